//! Token route.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};
use web_types::{Credentials, TokenResponse};

use crate::error::ApiResult;
use crate::state::AppState;

/// POST /token - Exchange form-encoded credentials for a bearer token.
pub async fn issue_token(
    State(state): State<AppState>,
    form: Result<Form<Credentials>, FormRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Form(credentials) = form?;
    let token = state
        .login(&credentials.username, &credentials.password)
        .await
        .inspect_err(|_| tracing::warn!(username = %credentials.username, "login rejected"))?;

    tracing::info!(username = %credentials.username, "token issued");
    Ok(Json(TokenResponse::bearer(token)))
}
