use crate::ApiConfig;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Log subscriber for the server: JSON lines when `api.log_json` is set,
/// plain text otherwise.
pub fn log_subscriber<W>(
    api: &ApiConfig,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);
    if api.log_json {
        Box::new(builder.json().finish())
    } else {
        Box::new(builder.finish())
    }
}

pub fn init_tracing(api: &ApiConfig) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(log_subscriber(api, filter, std::io::stdout))
        .map_err(|e| format!("tracing init failed: {e}"))
}
