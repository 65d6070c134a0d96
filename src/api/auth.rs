use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::extract::JsonBody;
use crate::api::state::AppState;
use crate::api::{require, MessageResponse};
use crate::db::Role;
use crate::error::AppError;
use crate::identity::CredentialService;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    fn into_parts(self) -> Result<(String, String), AppError> {
        let missing = || AppError::MissingFields("Username and password are required".to_string());
        let username = require(self.username).ok_or_else(missing)?;
        let password = require(self.password).ok_or_else(missing)?;
        Ok((username, password))
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: Role,
}

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let (username, password) = req.into_parts()?;

    let name = username.clone();
    state
        .with_store(move |store, admins| {
            let service = CredentialService::new(admins, store);
            service.register(&name, &password)?;
            Ok(())
        })
        .await?;

    tracing::info!("Registered user '{}'", username);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (username, password) = req.into_parts()?;

    let name = username.clone();
    let role = state
        .with_store(move |store, admins| {
            let service = CredentialService::new(admins, store);
            let role = service.authenticate(&name, &password)?;
            Ok(role)
        })
        .await?;

    let token = state.sessions.issue(&username, role).await;
    tracing::info!(
        "'{}' logged in as {} ({} active sessions)",
        username,
        role,
        state.sessions.len().await
    );

    Ok(Json(LoginResponse {
        token,
        username,
        role,
    }))
}
