use reqwest::Client as ReqwestClient;
use reqwest::StatusCode;

use crate::payloads::{LoginRequest, SignupRequest};

/// Raw status and body of a completed probe, relayed without parsing.
pub struct ProbeResponse {
    pub status: StatusCode,
    pub body: String,
}

pub struct AuthClient {
    client: ReqwestClient,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: ReqwestClient::new(),
            base_url,
        }
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<ProbeResponse, reqwest::Error> {
        let url = format!("{}/signup", self.base_url);
        let response = self.client.post(url).json(request).send().await?;
        Self::read(response).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<ProbeResponse, reqwest::Error> {
        let url = format!("{}/login", self.base_url);
        let response = self.client.post(url).json(request).send().await?;
        Self::read(response).await
    }

    // Any status counts as a completed probe; only transport faults are errors.
    async fn read(response: reqwest::Response) -> Result<ProbeResponse, reqwest::Error> {
        let status = response.status();
        let body = response.text().await?;
        Ok(ProbeResponse { status, body })
    }
}
