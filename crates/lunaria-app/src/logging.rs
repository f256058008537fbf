//! Tracing subscriber setup.
//!
//! Logging starts before the config is read so loader messages are not
//! lost. Once the config is known its level replaces the startup filter
//! unless `--log-level` pinned one.

use tracing_subscriber::filter::{Directive, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::reload;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Registry;

use lunaria_config::schema::LogLevel;

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Build an env filter (`RUST_LOG` first) with extra directives on top.
/// Directives that fail to parse are skipped with a stderr note.
pub fn build_filter<S: AsRef<str>>(directives: &[S]) -> EnvFilter {
    directives
        .iter()
        .fold(EnvFilter::from_default_env(), |filter, d| {
            match d.as_ref().parse::<Directive>() {
                Ok(directive) => filter.add_directive(directive),
                Err(e) => {
                    eprintln!("ignoring invalid log directive {:?}: {e}", d.as_ref());
                    filter
                }
            }
        })
}

/// Directives for the startup filter: the CLI override, else info.
pub fn startup_directives(cli_level: Option<&str>) -> Vec<String> {
    match cli_level {
        Some(level) => vec![level.to_string()],
        None => LogLevel::Info.directives(),
    }
}

/// Install the global subscriber and return a handle for later reloads.
pub fn init(cli_level: Option<&str>) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(build_filter(&startup_directives(cli_level)));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
    handle
}

/// Swap in the configured level.
pub fn apply_config_level(handle: &FilterHandle, level: LogLevel) {
    if let Err(e) = handle.reload(build_filter(&level.directives())) {
        tracing::warn!("Failed to apply configured log level: {e}");
    }
}
