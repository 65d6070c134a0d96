use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::extract::JsonBody;
use crate::api::require;
use crate::api::state::AppState;
use crate::db::{NewTicket, Role, Session, Ticket, TicketRepository};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    #[serde(default)]
    pub discord_username: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateTicketResponse {
    pub message: String,
    pub ticket_id: u64,
}

#[derive(Debug, Serialize)]
pub struct TicketListResponse {
    pub tickets: Vec<Ticket>,
}

/// POST /api/tickets (requires auth)
pub async fn create_ticket(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    JsonBody(req): JsonBody<CreateTicketRequest>,
) -> Result<(StatusCode, Json<CreateTicketResponse>), AppError> {
    let missing = || AppError::MissingFields("Discord username and reason are required".to_string());
    let discord_username = require(req.discord_username).ok_or_else(missing)?;
    let reason = require(req.reason).ok_or_else(missing)?;

    let new_ticket = NewTicket {
        username: session.username,
        discord_username,
        reason,
        additional_info: req.additional_info.unwrap_or_default(),
    };

    let ticket = state
        .with_store(move |store, _| TicketRepository::create(store, new_ticket))
        .await?;

    tracing::info!("Ticket #{} opened by '{}'", ticket.id, ticket.username);

    Ok((
        StatusCode::CREATED,
        Json(CreateTicketResponse {
            message: "Ticket created successfully".to_string(),
            ticket_id: ticket.id,
        }),
    ))
}

/// GET /api/admin/tickets (requires auth, admin role)
pub async fn list_tickets(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<TicketListResponse>, AppError> {
    if session.role != Role::Admin {
        tracing::warn!("'{}' tried to list tickets without admin role", session.username);
        return Err(AppError::Forbidden);
    }

    let tickets = state
        .with_store(|store, _| TicketRepository::list(store))
        .await?;

    Ok(Json(TicketListResponse { tickets }))
}
