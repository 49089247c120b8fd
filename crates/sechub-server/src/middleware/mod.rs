mod cors;
mod request_log;

pub(crate) use cors::cors_middleware;
pub(crate) use request_log::request_log_middleware;
pub use request_log::{access_log_line, ACCESS_LOG_TARGET};
