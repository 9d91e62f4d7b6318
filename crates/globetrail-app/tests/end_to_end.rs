//! Loading from a JSON file through the director, and graceful degradation
//! when the geodata source is unavailable.

mod common;

use std::io::Write;
use std::sync::Arc;

use assert_matches::assert_matches;
use common::overview;
use globetrail_core::config::AppConfig;
use globetrail_core::error::GlobeError;
use globetrail_core::models::event::CareerPhase;
use globetrail_scene::geodata::JsonFileSource;
use globetrail_scene::headless::HeadlessScene;
use globetrail_view::director::GlobeDirector;
use globetrail_view::filter::FilterCriteria;

fn fresh_director() -> (GlobeDirector, Arc<HeadlessScene>) {
    let config = AppConfig::default_config();
    let scene = Arc::new(HeadlessScene::new(overview()));
    let director = GlobeDirector::new(scene.clone(), &config);
    (director, scene)
}

#[tokio::test(start_paused = true)]
async fn loads_a_json_file_and_sorts_by_rank() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{ "rank": 2, "longitude": 2.35, "latitude": 48.86,
               "city": "Paris", "company": "Atelier", "role": "Consultant",
               "description": "", "stack": "SQL",
               "phase": "Consultant", "country": "France" }},
            {{ "rank": 1, "longitude": -9.14, "latitude": 38.72,
               "city": "Lisbon", "company": "Tagus", "role": "RA",
               "description": "", "stack": "Python",
               "phase": "Academic", "country": "Portugal" }},
            {{ "longitude": 0.0, "latitude": 0.0,
               "city": "Null Island", "company": "Nowhere", "role": "-",
               "description": "", "stack": "",
               "phase": "Technical", "country": "Nowhere" }}
        ]"#
    )
    .unwrap();

    let (director, _scene) = fresh_director();
    let source = JsonFileSource::new(file.path());

    let count = director.load(&source).await.unwrap();
    assert_eq!(count, 3);

    // a missing rank defaults to 0 and sorts first
    let ranks: Vec<i64> = director.rows().iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![0, 1, 2]);
    assert_eq!(director.rows()[1].city, "Lisbon");
}

#[tokio::test(start_paused = true)]
async fn unavailable_source_leaves_the_view_usable() {
    let (director, scene) = fresh_director();
    let source = JsonFileSource::new("/nonexistent/career.json");

    assert_matches!(
        director.load(&source).await,
        Err(GlobeError::DataUnavailable(_))
    );

    // empty but alive: list, filters, tour toggle and reset all behave
    assert!(director.rows().is_empty());
    let count = director
        .apply_filters(&FilterCriteria {
            country: None,
            phase: Some(CareerPhase::Leadership),
        })
        .await;
    assert_eq!(count, 0);

    director.toggle_tour();
    assert!(!director.is_touring());

    director.reset().await;
    assert_eq!(scene.pose(), overview());

    director.dismiss_intro();
    assert!(director.idle_eligible());
    director.shutdown();
}

#[tokio::test(start_paused = true)]
async fn reload_discards_stale_highlight_and_tour() {
    let (director, scene) = fresh_director();

    let first = globetrail_scene::geodata::StaticSource::new(common::sample_events());
    director.load(&first).await.unwrap();
    director.select_marker(3).await;
    director.toggle_tour();
    assert_eq!(scene.highlighted(), vec![3]);
    assert!(director.is_touring());

    // the old highlight and tour are keyed to ranks of the old dataset
    let second = globetrail_scene::geodata::StaticSource::new(vec![common::event(
        9,
        0.0,
        0.0,
        "Reykjavík",
        "Borealis",
        CareerPhase::Technical,
        "Iceland",
    )]);
    director.load(&second).await.unwrap();

    assert_eq!(director.visible_len(), 1);
    assert_eq!(director.selected_index(), None);
    assert!(scene.highlighted().is_empty());
    assert!(!director.is_touring());
}

#[tokio::test(start_paused = true)]
async fn failed_reload_keeps_the_previous_dataset() {
    let (director, _scene) = fresh_director();

    let good = globetrail_scene::geodata::StaticSource::new(common::sample_events());
    director.load(&good).await.unwrap();
    assert_eq!(director.visible_len(), 5);

    let bad = JsonFileSource::new("/nonexistent/career.json");
    assert!(director.load(&bad).await.is_err());

    // the failed fetch must not clobber the installed collection
    assert_eq!(director.visible_len(), 5);
}
