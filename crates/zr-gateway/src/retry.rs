use crate::GatewayError;

use std::time::Duration;

use tokio::time::sleep;
use zr_config::RetryConfig;

/// Errors that know whether another attempt could succeed
pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for GatewayError {
    fn is_retryable(&self) -> bool {
        GatewayError::is_retryable(self)
    }
}

/// Run `operation` until it succeeds, fails permanently, or attempts run out.
///
/// Only wrap idempotent calls in this.
pub async fn with_retry<F, Fut, T, E>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display + IsRetryable,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempts = 0;
    let mut delay = config.initial_delay();

    loop {
        attempts += 1;

        match operation().await {
            Ok(result) => {
                if attempts > 1 {
                    log::info!("{operation_name} succeeded after {attempts} attempts");
                }
                return Ok(result);
            }
            Err(e) if !e.is_retryable() || attempts >= max_attempts => {
                log::warn!("{operation_name} failed after {attempts} attempts: {e}");
                return Err(e);
            }
            Err(e) => {
                let actual_delay = if config.jitter {
                    let jitter_factor = 0.5 + rand::random::<f64>();
                    Duration::from_secs_f64(delay.as_secs_f64() * jitter_factor)
                } else {
                    delay
                };

                log::debug!(
                    "{operation_name} attempt {attempts} failed: {e}. Retrying in {actual_delay:?}"
                );

                sleep(actual_delay).await;

                delay = Duration::from_secs_f64(
                    (delay.as_secs_f64() * config.backoff_multiplier)
                        .min(config.max_delay().as_secs_f64()),
                );
            }
        }
    }
}
