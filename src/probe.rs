use log::debug;
use tap::TapFallible;

use crate::client::{AuthClient, ProbeResponse};
use crate::payloads::{LoginRequest, SignupRequest};

pub enum ProbeOutcome {
    Completed(ProbeResponse),
    Failed(reqwest::Error),
}

pub struct ProbeReport {
    pub label: &'static str,
    pub outcome: ProbeOutcome,
}

impl ProbeReport {
    fn resolve(label: &'static str, result: Result<ProbeResponse, reqwest::Error>) -> Self {
        let outcome = match result.tap_err(|e| debug!("{} probe failed: {:?}", label, e)) {
            Ok(response) => ProbeOutcome::Completed(response),
            Err(cause) => ProbeOutcome::Failed(cause),
        };
        Self { label, outcome }
    }

    pub fn completed(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Completed(_))
    }

    pub fn lines(&self) -> Vec<String> {
        match &self.outcome {
            ProbeOutcome::Completed(response) => vec![
                format!("{} status: {}", self.label, response.status.as_u16()),
                format!("{} response: {}", self.label, response.body),
            ],
            ProbeOutcome::Failed(cause) => vec![format!("{} error: {}", self.label, cause)],
        }
    }
}

/// Runs both probes in order. Signup resolves fully before login goes out,
/// and a transport fault on one probe does not stop the other.
pub async fn run(client: &AuthClient) -> Vec<ProbeReport> {
    let signup = client.signup(&SignupRequest::smoke()).await;
    let signup = ProbeReport::resolve("Signup", signup);

    let login = client.login(&LoginRequest::smoke()).await;
    let login = ProbeReport::resolve("Login", login);

    vec![signup, login]
}
