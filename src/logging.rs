use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn default_directive(debug: bool) -> &'static str {
    if debug { "floorwatch=debug" } else { "floorwatch=warn" }
}

/// Log to stderr so table and JSON output on stdout stay clean.
/// `RUST_LOG` overrides the level chosen by `--debug`.
pub(crate) fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_raises_level() {
        assert_eq!(default_directive(false), "floorwatch=warn");
        assert_eq!(default_directive(true), "floorwatch=debug");
    }
}
