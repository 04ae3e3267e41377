use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs the global logger once. `RUST_LOG` overrides `level`.
pub fn initialize_logger(level: LevelFilter) {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(level)
            .filter_module("course_planner", level)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed, e.g. by a test harness.
        let _ = builder.try_init();
    });
}
