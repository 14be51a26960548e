use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue, header},
    routing::{get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::{
        auth::{ChangeCredentialsRequest, CredentialsUpdate, LoginRequest, LoginResponse, SessionStatus},
        laptops::{CreateLaptopRequest, LaptopList, UpdateLaptopRequest},
    },
    error::AppResult,
    middleware::auth::{AdminSession, clear_session_cookie, session_cookie, session_token},
    models::Laptop,
    response::{ApiResponse, Meta},
    services::{auth_service, laptop_service},
    state::AppState,
};

type WithCookie<T> = ([(HeaderName, HeaderValue); 1], Json<ApiResponse<T>>);

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session_status))
        .route("/credentials", post(change_credentials))
        .route("/laptops", get(list_laptops).post(create_laptop))
        .route("/laptops/{id}", put(update_laptop).delete(delete_laptop))
}

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session issued and set as cookie", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid username or password"),
        (status = 422, description = "Missing username or password"),
    ),
    tag = "Admin"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<WithCookie<LoginResponse>> {
    let resp = auth_service::login(&state, payload)?;
    let cookie = match &resp.data {
        Some(login) => session_cookie(&login.token, &state.session),
        None => clear_session_cookie(),
    };
    Ok(([(header::SET_COOKIE, cookie)], Json(resp)))
}

#[utoipa::path(
    post,
    path = "/api/admin/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = ApiResponse<SessionStatus>)
    ),
    tag = "Admin"
)]
pub async fn logout() -> WithCookie<SessionStatus> {
    (
        [(header::SET_COOKIE, clear_session_cookie())],
        Json(ApiResponse::success(
            "Logged out",
            SessionStatus {
                authenticated: false,
            },
            Some(Meta::empty()),
        )),
    )
}

#[utoipa::path(
    get,
    path = "/api/admin/session",
    responses(
        (status = 200, description = "Whether the request carries a live admin session", body = ApiResponse<SessionStatus>)
    ),
    tag = "Admin"
)]
pub async fn session_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<ApiResponse<SessionStatus>> {
    let authenticated = session_token(&headers).is_some_and(|token| state.auth.is_valid(&token));
    Json(ApiResponse::success(
        "Session",
        SessionStatus { authenticated },
        None,
    ))
}

#[utoipa::path(
    post,
    path = "/api/admin/credentials",
    request_body = ChangeCredentialsRequest,
    responses(
        (status = 200, description = "Credentials changed", body = ApiResponse<CredentialsUpdate>),
        (status = 400, description = "Incorrect current password or nothing to change"),
        (status = 401, description = "No admin session"),
        (status = 422, description = "Invalid new credentials"),
    ),
    tag = "Admin"
)]
pub async fn change_credentials(
    State(state): State<AppState>,
    _session: AdminSession,
    Json(payload): Json<ChangeCredentialsRequest>,
) -> AppResult<Json<ApiResponse<CredentialsUpdate>>> {
    let resp = auth_service::change_credentials(&state, payload)?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/laptops",
    operation_id = "admin_list_laptops",
    responses(
        (status = 200, description = "Whole catalog, newest first", body = ApiResponse<LaptopList>),
        (status = 401, description = "No admin session"),
    ),
    tag = "Admin"
)]
pub async fn list_laptops(
    State(state): State<AppState>,
    _session: AdminSession,
) -> AppResult<Json<ApiResponse<LaptopList>>> {
    let resp = laptop_service::admin_list(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/laptops",
    request_body = CreateLaptopRequest,
    responses(
        (status = 200, description = "Laptop created", body = ApiResponse<Laptop>),
        (status = 401, description = "No admin session"),
        (status = 422, description = "Field validation failed"),
    ),
    tag = "Admin"
)]
pub async fn create_laptop(
    State(state): State<AppState>,
    _session: AdminSession,
    Json(payload): Json<CreateLaptopRequest>,
) -> AppResult<Json<ApiResponse<Laptop>>> {
    let resp = laptop_service::create_laptop(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/laptops/{id}",
    params(
        ("id" = Uuid, Path, description = "Laptop ID")
    ),
    request_body = UpdateLaptopRequest,
    responses(
        (status = 200, description = "Laptop updated", body = ApiResponse<Laptop>),
        (status = 401, description = "No admin session"),
        (status = 404, description = "Laptop not found"),
        (status = 422, description = "Field validation failed"),
    ),
    tag = "Admin"
)]
pub async fn update_laptop(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLaptopRequest>,
) -> AppResult<Json<ApiResponse<Laptop>>> {
    let resp = laptop_service::update_laptop(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/laptops/{id}",
    params(
        ("id" = Uuid, Path, description = "Laptop ID")
    ),
    responses(
        (status = 200, description = "Laptop deleted"),
        (status = 401, description = "No admin session"),
        (status = 404, description = "Laptop not found"),
    ),
    tag = "Admin"
)]
pub async fn delete_laptop(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = laptop_service::delete_laptop(&state, id).await?;
    Ok(Json(resp))
}
