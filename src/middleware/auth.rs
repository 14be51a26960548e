use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, HeaderValue, header},
};

use crate::{error::AppError, state::{AppState, SessionSettings}};

pub const AUTH_COOKIE_NAME: &str = "lapzen-admin-auth";

/// Proof that the request carries a live admin session.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
}

/// Session token from `Authorization: Bearer` or the admin cookie.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(bearer) = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
    {
        return Some(bearer.trim().to_string());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == AUTH_COOKIE_NAME && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

pub fn session_cookie(token: &str, settings: &SessionSettings) -> HeaderValue {
    let mut cookie = format!(
        "{AUTH_COOKIE_NAME}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        settings.max_age_secs
    );
    if settings.secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| clear_session_cookie())
}

pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_static("lapzen-admin-auth=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers).ok_or(AppError::Unauthorized)?;
        if !state.auth.is_valid(&token) {
            return Err(AppError::Unauthorized);
        }
        Ok(AdminSession { token })
    }
}
