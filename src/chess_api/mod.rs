pub(crate) mod player;
pub(crate) mod titled;

use std::time::Duration;

use reqwest::header::{HeaderValue, RETRY_AFTER, USER_AGENT};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ChessApiError, Result};

/// Append raw `segments` to the configured API root. Segments are
/// percent-encoded, so usernames are safe to pass through untouched.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// Fetch `url` and decode the JSON body into `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    config: &ClientConfig,
    url: Url,
) -> Result<T> {
    let body = get_with_retry(client, config, &url).await?;
    serde_json::from_str(&body).map_err(|source| ChessApiError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Fetch `url`, retrying rate-limited responses and transport failures.
///
/// Any other non-success status is terminal on the first occurrence. Retries
/// are strictly sequential; the caller's task sleeps between attempts.
pub(crate) async fn get_with_retry(
    client: &reqwest::Client,
    config: &ClientConfig,
    url: &Url,
) -> Result<String> {
    let max_attempts = config.retry.max_attempts;

    for attempt in 1..=max_attempts {
        let last_attempt = attempt == max_attempts;
        debug!(%url, attempt, "fetching");

        let response = client
            .get(url.clone())
            .header(USER_AGENT, config.user_agent.as_str())
            .timeout(config.timeout)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(source) if last_attempt => {
                return Err(ChessApiError::Transport {
                    url: url.to_string(),
                    source,
                });
            }
            Err(source) => {
                let delay = backoff_delay(config.retry.base_delay, attempt, None);
                warn!(%url, attempt, error = %source, delay_ms = delay.as_millis() as u64, "request failed, retrying");
                sleep(delay).await;
                continue;
            }
        };

        let status = response.status();
        if status.is_success() {
            return response
                .text()
                .await
                .map_err(|source| ChessApiError::ResponseBody {
                    url: url.to_string(),
                    source,
                });
        }

        if status == StatusCode::TOO_MANY_REQUESTS && !last_attempt {
            let delay = backoff_delay(
                config.retry.base_delay,
                attempt,
                response.headers().get(RETRY_AFTER),
            );
            warn!(%url, attempt, delay_ms = delay.as_millis() as u64, "rate limited, retrying");
            sleep(delay).await;
            continue;
        }

        return Err(ChessApiError::Status {
            url: url.to_string(),
            status,
        });
    }

    Err(ChessApiError::MaxRetriesExceeded {
        url: url.to_string(),
    })
}

/// How long to wait after the 1-based `attempt` failed.
///
/// A `Retry-After` given in whole seconds wins; anything else (absent, an
/// HTTP date, garbage) falls back to `base_delay * attempt`.
pub(crate) fn backoff_delay(
    base_delay: Duration,
    attempt: u32,
    retry_after: Option<&HeaderValue>,
) -> Duration {
    retry_after
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(base_delay * attempt)
}
