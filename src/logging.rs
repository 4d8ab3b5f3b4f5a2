use log::LevelFilter;

/// Installs the global logger on stderr, showing warnings and errors unless
/// `RUST_LOG` says otherwise.
pub fn init() {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
}
