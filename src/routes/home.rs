//! Root route.

use crate::config::GREETING;

/// Root handler. Returns a fixed greeting so a curl or browser check shows
/// the service is up.
pub async fn index() -> &'static str {
    GREETING
}
