use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};

use crate::{
    application::dto::HealthResponse,
    core::StoreError,
    interface::http::{
        problem::{ApiProblem, ApiResult},
        views::{CreateUserTemplate, UserTemplate, UsersTemplate, render},
    },
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_first_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    render_page(&state, 1).await
}

pub async fn list_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> ApiResult<Html<String>> {
    let page = parse_page(&page)?;
    render_page(&state, page).await
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Html<String>)> {
    let back_page = state.user_service.cursor().await.page;

    let (status, user) = match state.user_service.get_user(&id).await {
        Ok(user) => (StatusCode::OK, Some(user)),
        Err(StoreError::NotFound(_)) => (StatusCode::NOT_FOUND, None),
        Err(err) => return Err(ApiProblem::from_store(err)),
    };

    let html = render(&UserTemplate {
        user: user.as_ref(),
        requested_id: &id,
        back_page,
    })?;

    Ok((status, html))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .user_service
        .delete_user(&id)
        .await
        .map_err(ApiProblem::from_store)?;

    Ok(StatusCode::OK)
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<StatusCode> {
    state
        .user_service
        .update_user(&id, &body)
        .await
        .map_err(ApiProblem::from_store)?;

    Ok(StatusCode::OK)
}

pub async fn create_user_form() -> ApiResult<Html<String>> {
    render(&CreateUserTemplate::default())
}

pub async fn create_user(State(state): State<AppState>, body: Bytes) -> ApiResult<StatusCode> {
    state
        .user_service
        .create_user(&body)
        .await
        .map_err(ApiProblem::from_store)?;

    Ok(StatusCode::OK)
}

async fn render_page(state: &AppState, page: i64) -> ApiResult<Html<String>> {
    let data = state
        .user_service
        .list_users(page)
        .await
        .map_err(ApiProblem::from_store)?;

    render(&UsersTemplate::new(&data))
}

fn parse_page(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        ApiProblem::from_store(StoreError::invalid_argument(format!(
            "page must be an integer, got '{}'",
            raw
        )))
    })
}
