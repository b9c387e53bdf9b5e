//! Logging setup for the command-line binary.

/// Installs the global logger.
///
/// Pipeline milestones are shown at `Info`; `verbose` adds every copied,
/// skipped and rendered file. `RUST_LOG` still overrides both.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}
