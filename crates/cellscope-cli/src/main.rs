//! `cellscope` — replay captured radio/location triggers through the
//! sampling pipeline into a local SQLite store.
//!
//! # Usage
//!
//! ```text
//! cellscope --scenario capture.json
//! cellscope --db survey.db --scenario capture.json --dump
//! CELLSCOPE_DB_PATH=survey.db cellscope --dump
//! ```

mod scenario;

use std::path::PathBuf;

use anyhow::Context as _;
use cellscope_core::{measurement::GeoFix, store::MeasurementStore as _, summary};
use cellscope_sampler::{DisplaySink, Sampler};
use cellscope_store_sqlite::{SCHEMA_VERSION, SqliteStore};
use clap::Parser;
use scenario::{Scenario, ScenarioLocation, ScenarioRadio};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Radio-cell survey replay host")]
struct Cli {
  /// Path to an optional TOML configuration file.
  #[arg(short, long, default_value = "cellscope.toml")]
  config: PathBuf,

  /// Database path; overrides the config file.
  #[arg(long)]
  db: Option<PathBuf>,

  /// Scenario capture to replay, one sampler run per trigger.
  #[arg(long)]
  scenario: Option<PathBuf>,

  /// Print every stored record after replaying.
  #[arg(long)]
  dump: bool,
}

/// Shape of the optional TOML configuration file.
#[derive(Debug, Deserialize)]
struct FileConfig {
  #[serde(default = "default_db_path")]
  db_path: PathBuf,
}

fn default_db_path() -> PathBuf { PathBuf::from("measurements.db") }

/// Display sink that prints to stdout.
struct StdoutSink;

impl DisplaySink for StdoutSink {
  fn publish(&mut self, summary: &str) { print!("{summary}"); }

  fn mark_position(&mut self, fix: &GeoFix) {
    println!("Loc: ({}, {})\n", fix.latitude, fix.longitude);
  }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration: file, then environment, then flags.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config.clone()).required(false))
    .add_source(config::Environment::with_prefix("CELLSCOPE"))
    .build()
    .context("failed to read configuration")?;

  let file_cfg: FileConfig = settings
    .try_deserialize()
    .context("failed to deserialise configuration")?;

  let db_path = cli.db.unwrap_or(file_cfg.db_path);

  let store = SqliteStore::open(&db_path, SCHEMA_VERSION)
    .await
    .with_context(|| format!("failed to open store at {db_path:?}"))?;

  let mut sampler = Sampler::new(store, StdoutSink);

  if let Some(path) = &cli.scenario {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("failed to read scenario {path:?}"))?;
    let scenario: Scenario =
      serde_json::from_str(&raw).context("failed to parse scenario")?;

    for (index, trigger) in scenario.triggers.iter().enumerate() {
      let outcome = sampler
        .run(&ScenarioRadio(trigger), &ScenarioLocation(trigger))
        .await;

      match outcome {
        Ok(report) => tracing::info!(
          trigger = index,
          inserted = report.inserted,
          skipped = report.skipped,
          "trigger replayed"
        ),
        Err(err) => {
          tracing::info!(trigger = index, error = %err, "trigger did not run");
        }
      }
    }
  }

  if cli.dump {
    for stored in sampler.store().samples().await? {
      print!("#{} {}", stored.id, summary::render_record(&stored.record));
    }
  }

  sampler.shutdown().await.context("failed to close store")?;

  Ok(())
}
