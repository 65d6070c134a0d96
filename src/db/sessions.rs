use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::crypto::generate_token;
use crate::db::models::{Role, Session};

/// Process-lifetime token table.
///
/// Starts empty, grows on every login and is never pruned. A restart
/// invalidates every token.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn issue(&self, username: &str, role: Role) -> String {
        let token = generate_token();
        let session = Session {
            username: username.to_string(),
            role,
        };
        self.sessions.lock().await.insert(token.clone(), session);
        token
    }

    pub async fn resolve(&self, token: &str) -> Option<Session> {
        self.sessions.lock().await.get(token).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
