use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_web_port")]
    pub web_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            web_port: default_web_port(),
            bind_address: default_bind_address(),
        }
    }
}

fn default_web_port() -> u16 {
    8417
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}
