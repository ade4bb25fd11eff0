use crate::config_loader::MasterConfig;
use env_logger::Builder;
use log::LevelFilter;

pub fn initialize_logging(config: Option<&MasterConfig>, cli_matches: &clap::ArgMatches) {
    let level = resolve_log_level(config, cli_matches.get_flag("debug"));

    let mut builder = Builder::new();
    builder.filter_level(level);
    // Logs go to stderr so command output on stdout stays clean.
    builder.target(env_logger::Target::Stderr);

    builder.try_init().unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {}. Logging might not work as expected.", e);
    });
}

/// CLI `--debug` first, then the config file, then `warn`.
pub fn resolve_log_level(config: Option<&MasterConfig>, debug_flag: bool) -> LevelFilter {
    let log_level_str = if debug_flag {
        "debug".to_string()
    } else {
        config
            .and_then(|c| c.app_settings.log_level.clone())
            .unwrap_or_else(|| "warn".to_string())
    };

    match log_level_str.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        s => {
            eprintln!("Unrecognized log level '{}', defaulting to info.", s);
            LevelFilter::Info
        }
    }
}
