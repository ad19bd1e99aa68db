use std::fs::File;
use std::io;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use grimoire::core::config;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Initialize file logger - writes to grimoire.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("grimoire.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {}", e);
            config::GrimoireConfig::default()
        }
    };
    let resolved = config::resolve(&config);

    // The rules text is the one hard startup requirement: if it can't be
    // read there is nothing to show, so bail out before touching the
    // terminal.
    let rules_text = config::read_rules(&resolved.rules_path)?;

    log::info!(
        "Grimoire starting up (rules: {}, splash delay: {:?})",
        resolved.rules_path.display(),
        resolved.splash_delay
    );

    grimoire::tui::run(resolved, rules_text)
}
