use super::client::HttpClient;
use async_trait::async_trait;
use std::sync::Mutex;

/// Canned-response client for loader tests.
pub(crate) struct StubClient {
    status: u16,
    body: Vec<u8>,
    requested: Mutex<Vec<String>>,
}

impl StubClient {
    pub(crate) fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for StubClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.requested.lock().unwrap().push(req.url().to_string());

        let resp = http::Response::builder()
            .status(self.status)
            .body(self.body.clone())
            .unwrap();
        Ok(reqwest::Response::from(resp))
    }
}
