use log::LevelFilter;

/// Sets up the diagnostic logger on stderr. The level is chosen from the
/// command line only; `RUST_LOG` is ignored.
pub fn init(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format_timestamp_millis();
    let _ = builder.try_init();
}
