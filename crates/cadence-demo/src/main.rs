mod client;

use std::process::ExitCode;

use cadence_engine::device::GpuInit;
use cadence_engine::logging::{init_logging, LoggingConfig};
use cadence_engine::pacer::PacerConfig;
use cadence_engine::window::{Runtime, RuntimeConfig};

use crate::client::PulseClient;

/// Overrides the target frame rate.
const FPS_ENV: &str = "CADENCE_FPS";

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "cadence demo".to_string(),
        pacing: pacing_from_env(),
        ..RuntimeConfig::default()
    };

    let result = Runtime::run(config, GpuInit::default(), |gpu| {
        log::info!("building client for {:?} surface", gpu.surface_format());
        Ok(PulseClient::new())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn pacing_from_env() -> PacerConfig {
    let Ok(raw) = std::env::var(FPS_ENV) else {
        return PacerConfig::default();
    };

    match raw.trim().parse::<f64>() {
        Ok(fps) => PacerConfig::from_fps(fps).unwrap_or_else(|err| {
            log::warn!("{FPS_ENV}: {err}; using {} fps", PacerConfig::DEFAULT_FPS);
            PacerConfig::default()
        }),
        Err(err) => {
            log::warn!("{FPS_ENV}={raw:?} is not a number ({err}); using {} fps", PacerConfig::DEFAULT_FPS);
            PacerConfig::default()
        }
    }
}
