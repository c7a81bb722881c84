// src/main.rs

use inkpad::{
    classifier::{validate_input_shape, Classifier, LinearModel},
    config::CONFIG,
    grid::Grid,
    orchestrator::{AppOrchestrator, OrchestratorStatus},
    platform::{Driver, HeadlessDriver},
};

use anyhow::{bail, Context};
use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;

/// Main entry point for the `inkpad` application.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting inkpad...");

    let mut args = std::env::args_os().skip(1);
    let model_path = match (args.next(), args.next()) {
        (Some(path), None) => PathBuf::from(path),
        _ => bail!("Usage: inkpad <model.json>"),
    };

    let config = CONFIG.clone();
    info!("Configuration loaded (using default).");

    // --- Load the model and validate its shape once, up front ---
    let model = LinearModel::load(&model_path)
        .with_context(|| format!("failed to load model {}", model_path.display()))?;
    let probe = Grid::new(config.appearance.grid_rows, config.appearance.grid_cols);
    validate_input_shape(&model, &probe).context("model/canvas shape mismatch")?;
    let classifier: Arc<dyn Classifier> = Arc::new(model);
    info!("Classifier ready: {} classes.", classifier.num_classes());

    // --- Instantiate the driver ---
    // Graphical backends implement `platform::Driver` and slot in here; the
    // bundled build runs headless.
    let mut driver = HeadlessDriver::new(
        config.appearance.window_width_px,
        config.appearance.window_height_px,
    );
    driver.set_title("inkpad");
    info!("Driver initialized.");

    let tick = std::time::Duration::from_secs_f64(config.performance.tick_interval_ms / 1000.0);
    let mut orchestrator = AppOrchestrator::new(&mut driver, classifier, config);
    info!("AppOrchestrator created and initialized.");

    // --- Main control loop ---
    info!("Starting main control loop...");
    loop {
        match orchestrator.process_event_cycle() {
            Ok(OrchestratorStatus::Running) => {
                std::thread::sleep(tick);
            }
            Ok(OrchestratorStatus::Shutdown) => {
                info!("Orchestrator requested shutdown. Exiting main loop.");
                break;
            }
            Err(e) => {
                error!(
                    "Error in orchestrator event cycle: {:#}. Root cause: {:?}. Exiting.",
                    e,
                    e.root_cause()
                );
                break;
            }
        }
    }

    // --- Cleanup ---
    drop(orchestrator);
    driver.cleanup().context("Failed to clean up driver")?;
    info!("inkpad exited successfully.");

    Ok(())
}
