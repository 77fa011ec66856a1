//! Status endpoint.
//!
//! Returns a fixed message indicating the application is up. Used by uptime
//! monitors and load balancers to verify the service is alive; the handler
//! only logs the arrival time and writes a static body, so a 200 here means
//! the process can serve HTTP.

use chrono::{SecondsFormat, Utc};

/// Body returned for every successful `GET /`.
pub const STATUS_BODY: &str = "Application is running fine 👍";

/// Status handler.
///
/// Logs the wall-clock time the request was received, then responds with the
/// fixed status message. Stateless; nothing is carried between requests.
pub async fn status() -> &'static str {
    tracing::info!("Request received at: {}", received_at());
    STATUS_BODY
}

/// Current UTC time as an RFC 3339 / ISO-8601 string.
fn received_at() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
