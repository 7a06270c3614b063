use crate::app::error::Error;
use crate::connection::api::ApiClient;
use crate::connection::SendMessage;
use crate::reporter::model::SuiteRunStatus;
use bytes::Bytes;
use http::Request as HttpRequest;
use http::Response as HttpResponse;
use std::thread::sleep;
use std::time::{Duration, Instant};

/// Polls the status endpoint at a fixed interval until the run reaches a
/// terminal state, returning that snapshot. The timeout window is measured
/// in wall-clock time from loop entry, so a slow response eats into it.
pub fn wait_for_completion<T>(
    client: &ApiClient<T>,
    suite_run_id: &str,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<SuiteRunStatus, Error>
where
    T: SendMessage<HttpRequest<Vec<u8>>, Result<HttpResponse<Bytes>, Error>>,
{
    let start = Instant::now();
    info!(
        "⏳ Waiting for suite run to complete (timeout: {}s, poll interval: {}s)",
        timeout.as_secs(),
        poll_interval.as_secs()
    );

    while start.elapsed() < timeout {
        let status = client.suite_run_status(suite_run_id)?;
        if status.status.is_terminal() {
            info!(
                "✅ Suite run finished in {}s with status: {}",
                start.elapsed().as_secs(),
                status.status
            );
            return Ok(status);
        }
        sleep(poll_interval);
    }

    Err(Error::Timeout {
        elapsed: start.elapsed(),
        limit: timeout,
    })
}
