use crate::settings::{LogFormat, Settings};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use tracing_subscriber::util::TryInitError;

/// Install the global tracing subscriber. Fails if one is already set.
pub fn init(settings: &Settings) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_new(&settings.log_filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match settings.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
        LogFormat::Pretty => registry.with(fmt::layer()).try_init()?,
    }

    if let Some(rejected) = &settings.rejected_log_format {
        tracing::warn!(error = %rejected, "falling back to pretty log output");
    }
    tracing::debug!(filter = %settings.log_filter, "tracing initialised");
    Ok(())
}
