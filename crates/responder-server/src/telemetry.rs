use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays clean.
pub fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info,actix_server=warn"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }
}
