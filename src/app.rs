use axum::{
    Router,
    http::{HeaderName, Method},
    routing::{delete, get, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    interface::http::users_handler::{
        create_user, create_user_form, delete_user, get_user, healthcheck, list_first_page,
        list_page, update_user,
    },
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/", get(list_first_page))
        .route("/health", get(healthcheck))
        .route("/create", get(create_user_form).post(create_user))
        .route("/{page}", get(list_page))
        .route("/users/{id}", get(get_user).post(get_user))
        .route("/delete/{id}", delete(delete_user))
        .route("/update/{id}", put(update_user))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ]),
        )
        .with_state(state)
}
