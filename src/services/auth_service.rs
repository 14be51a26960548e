use validator::Validate;

use crate::{
    auth::{AuthError, CredentialChange},
    dto::auth::{ChangeCredentialsRequest, CredentialsUpdate, LoginRequest, LoginResponse},
    error::AppResult,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn login(state: &AppState, payload: LoginRequest) -> AppResult<ApiResponse<LoginResponse>> {
    payload.validate()?;
    if !state.auth.verify(&payload.username, &payload.password) {
        tracing::warn!(username = %payload.username, "admin login rejected");
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.auth.issue_session()?;
    tracing::info!(username = %payload.username, "admin logged in");
    Ok(ApiResponse::success(
        "Logged in",
        LoginResponse {
            token,
            expires_in: state.session.max_age_secs,
        },
        Some(Meta::empty()),
    ))
}

pub fn change_credentials(
    state: &AppState,
    payload: ChangeCredentialsRequest,
) -> AppResult<ApiResponse<CredentialsUpdate>> {
    payload.validate()?;
    let changed = state.auth.change_credentials(CredentialChange {
        current_password: payload.current_password,
        new_username: payload.new_username,
        new_password: payload.new_password,
    })?;

    let mut message = String::from("Credentials updated.");
    if changed.username_changed {
        message.push_str(" Username changed.");
    }
    if changed.password_changed {
        message.push_str(" Password changed.");
    }
    tracing::info!(
        username_changed = changed.username_changed,
        password_changed = changed.password_changed,
        "admin credentials changed"
    );
    Ok(ApiResponse::success(
        message,
        CredentialsUpdate {
            username_changed: changed.username_changed,
            password_changed: changed.password_changed,
        },
        Some(Meta::empty()),
    ))
}
