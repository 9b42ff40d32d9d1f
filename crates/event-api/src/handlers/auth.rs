//! Identity handlers
//!
//! Endpoints for user signup and login.

use axum::{extract::State, Json};
use event_service::dto::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use event_service::IdentityService;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Register a new user
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Json<SignupResponse>> {
    let service = IdentityService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Json(response))
}

/// Login with email and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = IdentityService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}
