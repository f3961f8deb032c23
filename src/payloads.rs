use serde::{Deserialize, Serialize};

pub const SMOKE_USERNAME: &str = "testuser";
pub const SMOKE_EMAIL: &str = "testuser@example.com";
pub const SMOKE_PASSWORD: &str = "secure123";

// Field order is the wire order; the auth service sees these bodies as-is.
#[derive(Deserialize, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl SignupRequest {
    pub fn smoke() -> Self {
        Self {
            username: SMOKE_USERNAME.to_string(),
            email: SMOKE_EMAIL.to_string(),
            password: SMOKE_PASSWORD.to_string(),
        }
    }
}

impl LoginRequest {
    /// Credentials match the signup payload, so a healthy service accepts them.
    pub fn smoke() -> Self {
        Self {
            username: SMOKE_USERNAME.to_string(),
            password: SMOKE_PASSWORD.to_string(),
        }
    }
}
