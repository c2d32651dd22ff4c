mod cli;
mod config;
mod handlers;

use cli::Cli;
use handlers::run;
use tab_records::utils::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments
    let config = Cli::parse_config().map_err(|e| e.to_string())?;

    // Initialize logging based on environment
    logging::init_logging()?;

    let stdout = std::io::stdout();
    if let Err(e) = run(config, &mut stdout.lock()) {
        tracing::error!("tab-records failed: {}", e);
        return Err(e.to_string().into());
    }

    Ok(())
}
