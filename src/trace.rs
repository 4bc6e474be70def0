use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Call once, before the entry operation. `RUST_LOG` overrides the
/// verbose-derived filter. Logs go to stderr so stdout stays clean.
pub fn init_tracing(verbose: bool) {
    let default_filter = match verbose {
        true => "vaultchain=debug",
        false => "vaultchain=info",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
