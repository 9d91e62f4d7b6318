//! Filtering, list rows and external selection across the full wiring.

mod common;

use common::loaded_director;
use globetrail_core::models::event::CareerPhase;
use globetrail_view::filter::FilterCriteria;

#[tokio::test(start_paused = true)]
async fn load_sorts_by_rank_and_shows_everything() {
    let (director, scene) = loaded_director().await;

    let rows = director.rows();
    assert_eq!(rows.len(), 5);
    let ranks: Vec<i64> = rows.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    assert!(rows.iter().all(|r| !r.selected));
    assert_eq!(scene.definition_filter(), "1=1");
}

#[tokio::test(start_paused = true)]
async fn phase_filter_keeps_rank_order() {
    let (director, _scene) = loaded_director().await;

    let count = director
        .apply_filters(&FilterCriteria {
            country: None,
            phase: Some(CareerPhase::Leadership),
        })
        .await;

    assert_eq!(count, 2);
    let ranks: Vec<i64> = director.rows().iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![4, 5]);
}

#[tokio::test(start_paused = true)]
async fn filter_resets_selection_and_highlight() {
    let (director, scene) = loaded_director().await;

    director.activate_row(0).await; // rank 1, Academic
    assert_eq!(director.selected_index(), Some(0));
    assert_eq!(scene.highlighted(), vec![1]);

    director
        .apply_filters(&FilterCriteria {
            country: None,
            phase: Some(CareerPhase::Leadership),
        })
        .await;

    assert_eq!(director.selected_index(), None);
    assert!(scene.highlighted().is_empty());
}

#[tokio::test(start_paused = true)]
async fn definition_expression_is_pushed_down() {
    let (director, scene) = loaded_director().await;

    director
        .apply_filters(&FilterCriteria {
            country: Some("Brazil".to_string()),
            phase: Some(CareerPhase::Technical),
        })
        .await;
    assert_eq!(
        scene.definition_filter(),
        "country = 'Brazil' AND career_phase = 'Technical'"
    );

    director
        .apply_filters(&FilterCriteria::unconstrained())
        .await;
    assert_eq!(scene.definition_filter(), "1=1");
    assert_eq!(director.visible_len(), 5);
}

#[tokio::test(start_paused = true)]
async fn filter_options_reflect_the_dataset() {
    let (director, _scene) = loaded_director().await;

    let options = director.filter_options();
    assert_eq!(
        options.countries,
        vec!["Brazil", "France", "Portugal", "Singapore", "United Kingdom"]
    );
    assert_eq!(
        options.phases,
        vec![
            CareerPhase::Leadership,
            CareerPhase::Consultant,
            CareerPhase::Technical,
            CareerPhase::Academic,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn marker_click_resolves_by_rank() {
    let (director, scene) = loaded_director().await;

    // rank 4 sits at index 3 in the full set
    assert_eq!(director.select_marker(4).await, Some(3));
    assert_eq!(director.selected_index(), Some(3));
    assert_eq!(scene.highlighted(), vec![4]);

    // after filtering, the same rank maps to a different index
    director
        .apply_filters(&FilterCriteria {
            country: None,
            phase: Some(CareerPhase::Leadership),
        })
        .await;
    assert_eq!(director.select_marker(4).await, Some(0));
    assert_eq!(scene.highlighted(), vec![4]);

    // a filtered-out record is ignored and changes nothing
    assert_eq!(director.select_marker(1).await, None);
    assert_eq!(director.selected_index(), Some(0));
    assert_eq!(scene.highlighted(), vec![4]);
}
