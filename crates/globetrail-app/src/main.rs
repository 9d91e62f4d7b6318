//! globetrail demo binary.
//!
//! Wires the headless scene surface and a geodata source into the globe
//! director and runs a short scripted session: load, list, filter, fly,
//! tour, reset. The real renderer plugs into the same `SceneSurface` port.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use globetrail_core::config::AppConfig;
use globetrail_core::config_manager::ConfigManager;
use globetrail_core::models::camera::CameraPose;
use globetrail_core::models::event::{CareerEvent, CareerPhase};
use globetrail_core::ports::geodata::GeodataSource;
use globetrail_scene::geodata::{JsonFileSource, StaticSource};
use globetrail_scene::headless::HeadlessScene;
use globetrail_view::director::GlobeDirector;
use globetrail_view::filter::FilterCriteria;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "globetrail", about = "Career timeline on a 3D globe (headless demo)")]
struct Cli {
    /// Career-event JSON file (defaults to the config value, then to the
    /// built-in demo dataset)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Settings file path (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run the scripted demo session on compressed timings
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    }
    .context("could not load settings")?;
    let mut config = manager.get();

    if cli.demo {
        // the scripted session should not take half a minute of real time
        config.camera.fly_duration_ms = 400;
        config.camera.reset_duration_ms = 300;
        config.tour.step_interval_secs = 1;
    }

    let scene = Arc::new(HeadlessScene::new(overview_pose(&config)));
    let director = GlobeDirector::new(scene.clone(), &config);

    let source = pick_source(&cli, &config);
    match director.load(source.as_ref()).await {
        Ok(count) => info!(count, "dataset ready"),
        Err(e) => error!(error = %e, "continuing with an empty list"),
    }
    director.dismiss_intro();

    print_rows(&director);

    if cli.demo {
        run_demo(&director, &scene).await;
    }

    director.shutdown();
    Ok(())
}

fn pick_source(cli: &Cli, config: &AppConfig) -> Arc<dyn GeodataSource> {
    if let Some(path) = &cli.data {
        return Arc::new(JsonFileSource::new(path.clone()));
    }
    if config.data.source_path.exists() {
        return Arc::new(JsonFileSource::new(config.data.source_path.clone()));
    }
    info!("no data file found, using the built-in demo dataset");
    Arc::new(StaticSource::new(demo_events()))
}

fn overview_pose(config: &AppConfig) -> CameraPose {
    let o = config.camera.overview;
    CameraPose {
        longitude: o.longitude,
        latitude: o.latitude,
        elevation_m: o.elevation_m,
        tilt: 0.0,
        heading: 0.0,
    }
}

fn print_rows(director: &GlobeDirector) {
    for row in director.rows() {
        let marker = if row.selected { ">" } else { " " };
        println!(
            "{marker} [{}] {} — {}, {} ({})",
            row.rank,
            row.company,
            row.city,
            row.country,
            row.phase.as_str()
        );
    }
}

async fn run_demo(director: &GlobeDirector, scene: &HeadlessScene) {
    info!("demo: fly to the first stop");
    director.activate_row(0).await;
    print_rows(director);

    info!("demo: leadership stops only");
    director
        .apply_filters(&FilterCriteria {
            country: None,
            phase: Some(CareerPhase::Leadership),
        })
        .await;
    print_rows(director);

    info!("demo: short tour");
    director.toggle_tour();
    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    director.toggle_tour();

    info!("demo: back to overview");
    director.reset().await;
    info!(
        visited = scene.shown_ranks().len(),
        pose = ?scene.pose(),
        "demo finished"
    );
}

fn demo_events() -> Vec<CareerEvent> {
    let make = |rank: i64,
                longitude: f64,
                latitude: f64,
                city: &str,
                company: &str,
                role: &str,
                stack: &str,
                phase: CareerPhase,
                country: &str| CareerEvent {
        rank,
        longitude,
        latitude,
        city: city.to_string(),
        company: company.to_string(),
        role: role.to_string(),
        description: format!("{role} at {company}"),
        stack: stack.to_string(),
        phase,
        country: country.to_string(),
    };

    vec![
        make(
            1,
            -9.139,
            38.722,
            "Lisbon",
            "Tagus Labs",
            "Research Assistant",
            "Python, NumPy",
            CareerPhase::Academic,
            "Portugal",
        ),
        make(
            2,
            -46.633,
            -23.55,
            "São Paulo",
            "Horizonte Digital",
            "Backend Engineer",
            "Java, Postgres, Kafka",
            CareerPhase::Technical,
            "Brazil",
        ),
        make(
            3,
            2.352,
            48.856,
            "Paris",
            "Atelier Conseil",
            "Solutions Consultant",
            "SQL, Tableau",
            CareerPhase::Consultant,
            "France",
        ),
        make(
            4,
            103.82,
            1.352,
            "Singapore",
            "Meridian Systems",
            "Engineering Manager",
            "Go, Kubernetes",
            CareerPhase::Leadership,
            "Singapore",
        ),
        make(
            5,
            -0.128,
            51.507,
            "London",
            "Northbank Group",
            "Head of Platform",
            "Rust, Terraform, AWS",
            CareerPhase::Leadership,
            "United Kingdom",
        ),
    ]
}
