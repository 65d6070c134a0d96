use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::state::AppState;
use crate::error::AppError;

/// Authentication middleware - resolves bearer tokens against the session registry
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthenticated("Missing Authorization header".to_string()))?;

    // Extract token from "Bearer <token>"
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthenticated("Invalid Authorization format".to_string()))?;

    let session = state
        .sessions
        .resolve(token)
        .await
        .ok_or_else(|| AppError::Unauthenticated("Invalid token".to_string()))?;

    // Store the session in request extensions
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}
