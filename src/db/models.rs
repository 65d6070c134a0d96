use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Status every ticket is created with.
pub const STATUS_OPEN: &str = "open";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored user record; the username is the key of the surrounding map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "password")]
    pub password_hash: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
}

/// Contents of the users file, keyed by username.
pub type Users = BTreeMap<String, User>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,
    pub username: String,
    pub discord_username: String,
    pub reason: String,
    #[serde(default)]
    pub additional_info: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub username: String,
    pub discord_username: String,
    pub reason: String,
    pub additional_info: String,
}

/// Identity bound to a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: Role,
}
