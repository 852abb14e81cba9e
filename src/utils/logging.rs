use log::LevelFilter;

/// Set up the logger; `RUST_LOG` still overrides the default level.
pub fn init_logging(debug_mode: bool) {
    let level = if debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
