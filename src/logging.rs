use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Filtering comes from `RUST_LOG` and
/// defaults to warnings only.
///
/// Events go to stderr; stdout is reserved for the rendered table.
pub fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    if json {
        builder.json().flatten_event(true).init();
    } else {
        builder.init();
    }
}
