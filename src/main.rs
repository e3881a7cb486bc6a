use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use lib_ut3::prelude::*;

fn main() -> Result<()> {
    dotenvy::dotenv()?;
    let options = EngineOptions::parse();

    let _logger = Logger::try_with_env_or_str(options.log_level.clone().unwrap_or_else(|| "info".into()).as_str())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(match cfg!(debug_assertions) {
            true => AdaptiveFormat::WithThread,
            _ => AdaptiveFormat::Default,
        })
        .start()?;

    let mut server = LTPServer::new(options);
    if let Err(e) = server.run() {
        log::error!("fatal error: {e}");
        return Err(e);
    }
    Ok(())
}
