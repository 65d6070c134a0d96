use std::path::PathBuf;

use crate::error::AppError;

/// Built-in administrator logins. Not persisted and not configurable at runtime.
pub const ADMIN_ACCOUNTS: [(&str, &str); 2] = [("admin1", "admin123"), ("admin2", "admin456")];

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub users_file: PathBuf,
    pub tickets_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Config {
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?,
            users_file: std::env::var("USERS_FILE")
                .unwrap_or_else(|_| "users.json".to_string())
                .into(),
            tickets_file: std::env::var("TICKETS_FILE")
                .unwrap_or_else(|_| "tickets.json".to_string())
                .into(),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
