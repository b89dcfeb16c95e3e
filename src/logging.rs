//! Log output for the server binary.
//!
//! Everything in the crate logs through the `log` macros; this module only
//! installs the sink. Lines go to stdout as `[LEVEL] message`.

use std::io::Write;

use env_logger::{Builder, Env, Target};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Install the stdout logger. Safe to call more than once; later calls are
/// ignored.
pub fn init() {
    let _ = builder().try_init();
}

fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder
        .target(Target::Stdout)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        log::info!("logger installed");
    }
}
