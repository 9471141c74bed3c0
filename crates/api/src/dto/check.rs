use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CheckQuery {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub url: String,
    pub blocked: bool,
}
