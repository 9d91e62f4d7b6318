//! Shared fixture: a five-stop career dataset over the headless scene.

#![allow(dead_code)]

use std::sync::Arc;

use globetrail_core::config::AppConfig;
use globetrail_core::models::camera::CameraPose;
use globetrail_core::models::event::{CareerEvent, CareerPhase};
use globetrail_scene::geodata::StaticSource;
use globetrail_scene::headless::HeadlessScene;
use globetrail_view::director::GlobeDirector;

pub fn event(
    rank: i64,
    longitude: f64,
    latitude: f64,
    city: &str,
    company: &str,
    phase: CareerPhase,
    country: &str,
) -> CareerEvent {
    CareerEvent {
        rank,
        longitude,
        latitude,
        city: city.to_string(),
        company: company.to_string(),
        role: format!("{company} role"),
        description: String::new(),
        stack: "Rust, SQL".to_string(),
        phase,
        country: country.to_string(),
    }
}

/// Five stops, deliberately out of rank order. Sorted by rank the subset
/// indices map 0..4 onto ranks 1..5; phases are
/// [Academic, Technical, Consultant, Leadership, Leadership] and rank 2 is
/// in the southern hemisphere.
pub fn sample_events() -> Vec<CareerEvent> {
    vec![
        event(2, -46.633, -23.55, "São Paulo", "Horizonte", CareerPhase::Technical, "Brazil"),
        event(1, -9.139, 38.722, "Lisbon", "Tagus Labs", CareerPhase::Academic, "Portugal"),
        event(4, 103.82, 1.352, "Singapore", "Meridian", CareerPhase::Leadership, "Singapore"),
        event(3, 2.352, 48.856, "Paris", "Atelier", CareerPhase::Consultant, "France"),
        event(5, -0.128, 51.507, "London", "Northbank", CareerPhase::Leadership, "United Kingdom"),
    ]
}

/// The fixed overview pose under the default settings.
pub fn overview() -> CameraPose {
    CameraPose {
        longitude: -10.0,
        latitude: 20.0,
        elevation_m: 18_000_000.0,
        tilt: 0.0,
        heading: 0.0,
    }
}

/// Director over a headless scene with the sample dataset already loaded.
/// Idle rotation is not engaged; tests that need it call `dismiss_intro`.
pub async fn loaded_director() -> (GlobeDirector, Arc<HeadlessScene>) {
    let config = AppConfig::default_config();
    let scene = Arc::new(HeadlessScene::new(overview()));
    let director = GlobeDirector::new(scene.clone(), &config);
    let source = StaticSource::new(sample_events());
    director
        .load(&source)
        .await
        .expect("static source never fails");
    (director, scene)
}
