use log::LevelFilter;

/// Environment variable that switches the default level to `Debug`.
pub const DEBUG_ENV_VAR: &str = "AOC24_DEBUG";

/// Initialize logging for the `aoc24` binaries.
///
/// # Behavior
/// - Logs at `Debug` if `debug_enabled`, otherwise `Info`.
/// - `RUST_LOG`, when set, overrides that default.
/// - Safe to call more than once; later calls are ignored.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
