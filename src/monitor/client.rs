//! Monitor Server Client
//!
//! HTTP client for the classroom monitor server: snapshot polling and session reports.

use crate::consts::cli_consts::{polling, server};
use crate::monitor::StudentSource;
use crate::monitor::error::MonitorError;
use crate::report::ClassReport;
use crate::student::StudentsSnapshot;
use log::debug;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("class-monitor/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct MonitorClient {
    client: Client,
    base_url: String,
}

impl MonitorClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, MonitorError> {
        let client = ClientBuilder::new()
            .connect_timeout(polling::connect_timeout())
            .timeout(polling::request_timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, MonitorError> {
        serde_json::from_slice(bytes).map_err(MonitorError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, MonitorError> {
        if !response.status().is_success() {
            debug!("{} answered {}", response.url(), response.status());
            return Err(MonitorError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, MonitorError> {
        let url = self.build_url(endpoint);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn post_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, MonitorError> {
        let url = self.build_url(endpoint);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl StudentSource for MonitorClient {
    async fn fetch_students(&self) -> Result<StudentsSnapshot, MonitorError> {
        self.get_request(server::STUDENTS_ENDPOINT).await
    }

    async fn end_class(&self) -> Result<ClassReport, MonitorError> {
        self.post_request(server::END_CLASS_ENDPOINT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_url_joins_slashes() {
        let client = MonitorClient::new("http://10.0.0.5:8000/").unwrap();
        assert_eq!(
            client.build_url("/students"),
            "http://10.0.0.5:8000/students"
        );
        let client = MonitorClient::new("http://10.0.0.5:8000").unwrap();
        assert_eq!(client.build_url("end_class"), "http://10.0.0.5:8000/end_class");
    }

    #[tokio::test]
    /// Should decode the students map served by the monitor.
    async fn test_fetch_students() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/students"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "s1": {"ear": 0.25, "fatigue": 10},
                "s2": {"ear": 0.20, "fatigue": 45, "name": "Jordan"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = MonitorClient::new(server.uri()).unwrap();
        let snapshot = client.fetch_students().await.unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("s2").unwrap().name.as_deref(), Some("Jordan"));
    }

    #[tokio::test]
    /// Non-success statuses surface as HTTP errors carrying the body.
    async fn test_fetch_students_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/students"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client = MonitorClient::new(server.uri()).unwrap();
        match client.fetch_students().await {
            Err(MonitorError::Http { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "overloaded");
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    /// A body that is not a students map is a decode error.
    async fn test_fetch_students_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/students"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = MonitorClient::new(server.uri()).unwrap();
        assert!(matches!(
            client.fetch_students().await,
            Err(MonitorError::Decode(_))
        ));
    }

    #[tokio::test]
    /// Connection failures surface as transport errors.
    async fn test_fetch_students_unreachable() {
        // Nothing listens on port 9 (discard) in the test environment.
        let client = MonitorClient::new("http://127.0.0.1:9").unwrap();
        assert!(matches!(
            client.fetch_students().await,
            Err(MonitorError::Reqwest(_))
        ));
    }

    #[tokio::test]
    /// Should POST to the end-class endpoint and decode the report.
    async fn test_end_class() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/end_class"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "students": {
                    "s1": {"name": "Avery", "status": "PASSIVE", "fatigue": 52}
                },
                "summary": {
                    "class_average_fatigue": 52.0,
                    "engagement_score": 48.0,
                    "total_students": 1
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = MonitorClient::new(server.uri()).unwrap();
        let report = client.end_class().await.unwrap();
        assert_eq!(report.summary.total_students, 1);
        assert_eq!(report.students["s1"].status, "PASSIVE");
    }
}
