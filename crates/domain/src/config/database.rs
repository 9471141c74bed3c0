use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_path() -> String {
    "focusgate.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}
