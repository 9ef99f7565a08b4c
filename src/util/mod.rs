use crate::core::prelude::*;

use std::sync::OnceLock;
use tracing_subscriber::fmt::time::OffsetTime;

pub mod colour;
pub mod linalg;

static LOG_SETUP: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Installs a `tracing` subscriber that writes to stderr.
///
/// Only the first call installs anything; later calls return the same outcome. Fails if
/// some other global subscriber was already set.
///
/// # Examples
///
/// ```
/// use vector2::core::prelude::*;
/// setup_log()?;
/// info!("ready: {}", Vector2::one());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn setup_log() -> Result<()> {
    LOG_SETUP
        .get_or_init(|| {
            let timer = OffsetTime::new(
                time::UtcOffset::UTC,
                time::macros::format_description!(
                    "[hour]:[minute]:[second].[subsecond digits:6]"
                ),
            );
            tracing_subscriber::fmt()
                .event_format(
                    tracing_subscriber::fmt::format()
                        .with_target(false)
                        .with_source_location(true)
                        .with_timer(timer),
                )
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| e.to_string())
        })
        .clone()
        .map_err(|e| anyhow!("could not install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_log_is_idempotent() {
        setup_log().unwrap();
        setup_log().unwrap();
        warn!("logging from test: {}", Vector2::new(1.0, 2.0));
    }
}
