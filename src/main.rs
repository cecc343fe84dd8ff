//! Agar Bot entry point
//!
//! Reads the world config and tick snapshots from stdin, writes one command
//! per tick to stdout. Logs go to stderr, or to `debug_file` when configured.

use std::fs::File;
use std::io;

use anyhow::{Context, Result};

use agar_bot::runner::run;
use agar_bot::{Settings, Strategy};

fn init_logging(settings: &Settings) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = &settings.debug_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create debug file {}", path.display()))?;
        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .filter_level(log::LevelFilter::Debug);
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let settings = Settings::load()?;
    init_logging(&settings)?;
    log::info!("Agar bot starting with {:?}", settings);

    let mut strategy = Strategy::new(settings);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut strategy, stdin.lock(), stdout.lock())?;
    Ok(())
}
