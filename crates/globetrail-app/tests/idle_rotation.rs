//! Idle auto-rotation: engaged after the intro, suspended by flag while a
//! selection or move is active, resumed by reset.

mod common;

use std::time::Duration;

use common::loaded_director;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn idle_rotation_drifts_west_after_intro_dismissal() {
    let (director, scene) = loaded_director().await;

    // not engaged until the intro overlay is gone
    sleep(Duration::from_secs(1)).await;
    assert_eq!(scene.pose().longitude, -10.0);

    director.dismiss_intro();
    sleep(Duration::from_secs(1)).await;

    let pose = scene.pose();
    assert!(pose.longitude < -10.0);
    assert_eq!(pose.latitude, 20.0);
    assert_eq!(pose.elevation_m, 18_000_000.0);

    director.shutdown();
}

#[tokio::test(start_paused = true)]
async fn selection_freezes_the_drift_and_reset_resumes_it() {
    let (director, scene) = loaded_director().await;
    director.dismiss_intro();

    // a marker click holds the camera still without any directed move
    director.select_marker(3).await;
    assert!(!director.idle_eligible());
    let held = scene.pose();
    sleep(Duration::from_secs(1)).await;
    assert_eq!(scene.pose(), held);

    director.reset().await;
    assert!(director.idle_eligible());
    sleep(Duration::from_secs(1)).await;
    assert!(scene.pose().longitude < -10.0);

    director.shutdown();
}

#[tokio::test(start_paused = true)]
async fn dismiss_intro_is_idempotent() {
    let (director, scene) = loaded_director().await;

    director.dismiss_intro();
    director.dismiss_intro();
    sleep(Duration::from_secs(1)).await;

    // one tick task: exactly one step every 33 ms, never two
    let drift = -10.0 - scene.pose().longitude;
    let max_single_task = 0.03 * (1_000.0 / 33.0 + 1.0);
    assert!(drift > 0.0);
    assert!(drift <= max_single_task);

    director.shutdown();
}
