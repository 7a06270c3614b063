use crate::app::error::Error;
use crate::configuration::constants::api::{API_KEY_HEADER, REQUEST_TIMEOUT_SECS};
use crate::connection::SendMessage;
use crate::reporter::model::SuiteRunStatus;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Method;
use http::Request as HttpRequest;
use http::Response as HttpResponse;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde_derive::{Deserialize, Serialize};
use std::time::Duration;

/// Payload of the trigger endpoint. Unset optional fields are omitted from
/// the serialized body, never sent as null.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteRunRequest {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci_run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

/// Acknowledgement returned by the trigger endpoint. Identifies the run for
/// all subsequent status queries.
#[derive(Debug, Clone, Deserialize)]
pub struct SuiteRunHandle {
    pub suite_run_id: String,
    pub poll_url: String,
    pub run_url: String,
}

pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    api_key: String,
}

impl ApiClient<Client> {
    pub fn new(api_key: String, base_url: String) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(ApiClient::with_transport(client, api_key, base_url))
    }
}

impl<T> ApiClient<T>
where
    T: SendMessage<HttpRequest<Vec<u8>>, Result<HttpResponse<Bytes>, Error>>,
{
    pub fn with_transport(transport: T, api_key: String, base_url: String) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key,
        }
    }

    pub fn trigger_suite_run(
        &self,
        suite_id: &str,
        request: &SuiteRunRequest,
    ) -> Result<SuiteRunHandle, Error> {
        let url = format!("{}/api/v1/suites/{}/ci/trigger", self.base_url, suite_id);
        info!("🚀 Triggering suite run");
        info!("   URL: {}", url);
        info!("   Payload: {}", serde_json::to_string_pretty(request)?);

        let handle: SuiteRunHandle =
            self.call(Method::POST, &url, Some(serde_json::to_vec(request)?))?;

        info!("✅ Suite run triggered successfully");
        info!("   Suite Run ID: {}", handle.suite_run_id);
        info!("   Poll URL: {}", handle.poll_url);
        info!("   Run URL: {}", handle.run_url);
        Ok(handle)
    }

    pub fn suite_run_status(&self, suite_run_id: &str) -> Result<SuiteRunStatus, Error> {
        let url = format!("{}/api/v1/suites/ci/{}/status", self.base_url, suite_run_id);
        let status: SuiteRunStatus = self.call(Method::GET, &url, None)?;
        info!(
            "📊 Status: {} | Tests: {} | Passed: {} | Failed: {}",
            status.status, status.total_tests, status.passed_tests, status.failed_tests
        );
        Ok(status)
    }

    fn call<R: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<R, Error> {
        let mut request = HttpRequest::builder()
            .method(method)
            .uri(url)
            .header(API_KEY_HEADER, self.api_key.as_str());
        if body.is_some() {
            request = request.header(CONTENT_TYPE, "application/json");
        }
        let prepared = request.body(body.unwrap_or_default())?;

        let response = self.transport.send(prepared)?;
        if !response.status().is_success() {
            return Err(Error::Api {
                status: response.status().as_u16(),
                body: String::from_utf8_lossy(response.body()).into_owned(),
            });
        }
        debug!(
            "🔍 Raw response: {}",
            String::from_utf8_lossy(response.body())
        );
        Ok(serde_json::from_slice(response.body())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct CannedTransport {
        status: u16,
        body: &'static str,
        requests: RefCell<Vec<HttpRequest<Vec<u8>>>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl SendMessage<HttpRequest<Vec<u8>>, Result<HttpResponse<Bytes>, Error>> for CannedTransport {
        fn send(&self, data: HttpRequest<Vec<u8>>) -> Result<HttpResponse<Bytes>, Error> {
            self.requests.borrow_mut().push(data);
            Ok(HttpResponse::builder()
                .status(self.status)
                .body(Bytes::from_static(self.body.as_bytes()))
                .unwrap())
        }
    }

    fn request(
        ci_run_id: Option<&str>,
        branch: Option<&str>,
        commit: Option<&str>,
    ) -> SuiteRunRequest {
        SuiteRunRequest {
            base_url: "https://staging.example.com".to_owned(),
            ci_run_id: ci_run_id.map(str::to_owned),
            branch: branch.map(str::to_owned),
            commit: commit.map(str::to_owned),
        }
    }

    #[test]
    fn test_trigger_payload_omits_unset_fields() {
        let payload = serde_json::to_value(request(None, None, None)).unwrap();
        let object = payload.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("base_url"));

        let payload = serde_json::to_value(request(Some("gh-1"), None, None)).unwrap();
        let object = payload.as_object().unwrap();
        assert!(object.contains_key("ci_run_id"));
        assert!(!object.contains_key("branch"));
        assert!(!object.contains_key("commit"));

        let payload = serde_json::to_value(request(Some("gh-1"), Some("main"), Some("abc"))).unwrap();
        let object = payload.as_object().unwrap();
        assert_eq!(object.len(), 4);
    }

    #[test]
    fn test_trigger_sends_authenticated_post() {
        let transport = CannedTransport::new(
            200,
            r#"{"suite_run_id":"run-1","poll_url":"https://api/poll","run_url":"https://app/run"}"#,
        );
        let client =
            ApiClient::with_transport(transport, "secret".to_owned(), "https://api.test/".to_owned());

        let handle = client
            .trigger_suite_run("smoke", &request(Some("gh-1"), None, None))
            .unwrap();
        assert_eq!(handle.suite_run_id, "run-1");
        assert_eq!(handle.poll_url, "https://api/poll");
        assert_eq!(handle.run_url, "https://app/run");

        let requests = client.transport.requests.borrow();
        let sent = &requests[0];
        assert_eq!(sent.method(), Method::POST);
        assert_eq!(
            sent.uri().to_string(),
            "https://api.test/api/v1/suites/smoke/ci/trigger"
        );
        assert_eq!(sent.headers()[API_KEY_HEADER], "secret");
        assert_eq!(sent.headers()[CONTENT_TYPE], "application/json");
        let body: serde_json::Value = serde_json::from_slice(sent.body()).unwrap();
        assert_eq!(body["base_url"], "https://staging.example.com");
        assert_eq!(body["ci_run_id"], "gh-1");
    }

    #[test]
    fn test_trigger_surfaces_api_error() {
        let transport = CannedTransport::new(500, "server error");
        let client =
            ApiClient::with_transport(transport, "secret".to_owned(), "https://api.test".to_owned());

        match client.trigger_suite_run("smoke", &request(None, None, None)) {
            Err(Error::Api { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "server error");
            }
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_status_fetch_decodes_snapshot() {
        let transport = CannedTransport::new(
            200,
            r#"{"status":"running","total_tests":5,"passed_tests":2,"failed_tests":0}"#,
        );
        let client =
            ApiClient::with_transport(transport, "secret".to_owned(), "https://api.test".to_owned());

        let status = client.suite_run_status("run-1").unwrap();
        assert_eq!(status.total_tests, 5);
        assert_eq!(status.passed_tests, 2);
        assert_eq!(status.failed_tests, 0);
        assert!(!status.status.is_terminal());

        let requests = client.transport.requests.borrow();
        let sent = &requests[0];
        assert_eq!(sent.method(), Method::GET);
        assert_eq!(
            sent.uri().to_string(),
            "https://api.test/api/v1/suites/ci/run-1/status"
        );
    }

    #[test]
    fn test_unauthorized_fetch_is_fatal() {
        let transport = CannedTransport::new(401, "invalid api key");
        let client =
            ApiClient::with_transport(transport, "wrong".to_owned(), "https://api.test".to_owned());

        match client.suite_run_status("run-1") {
            Err(Error::Api { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("Expected API error, got {:?}", other),
        }
    }
}
