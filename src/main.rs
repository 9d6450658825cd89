//! Block Breaker entry point
//!
//! Sets up logging and runs the windowed game loop.

use std::process::ExitCode;

use block_breaker::Settings;
use block_breaker::platform;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Block Breaker starting...");

    let settings = Settings::load();
    match platform::run(settings.window) {
        Ok(()) => {
            log::info!("Block Breaker shut down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
