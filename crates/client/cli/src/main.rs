//! Scripted skirmish runner.
//!
//! Loads a scenario from the content directory, plays its orders through the
//! turn facade, and prints the final standings.
mod config;
mod logging;
mod report;

use anyhow::{Context, Result};
use config::SkirmishConfig;
use tactics_content::ContentFactory;
use tactics_runtime::Skirmish;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let mut config = SkirmishConfig::from_env();
    if let Some(scenario) = std::env::args().nth(1) {
        config.scenario = scenario;
    }

    let _guard = logging::setup_logging(config.log_dir.as_deref())?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        scenario = %config.scenario,
        "starting skirmish"
    );

    let factory = ContentFactory::new(config.data_dir.clone());
    let mut combat = factory
        .load_config()
        .context("failed to load combat configuration")?;
    let mut spec = factory
        .load_scenario_spec(&config.scenario)
        .with_context(|| format!("failed to load scenario '{}'", config.scenario))?;
    if let Some(metric) = config.metric {
        combat.metric = metric;
        spec.metric = Some(metric);
    }
    let scenario = spec
        .build(&combat)
        .with_context(|| format!("failed to build scenario '{}'", config.scenario))?;

    let mut skirmish = Skirmish::new(combat, scenario);
    let summary = skirmish.play_all();
    print!("{}", report::render(&skirmish, &summary));
    Ok(())
}
