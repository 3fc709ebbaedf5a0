pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};

use state::AppState;

/// One route per engine operation; everything else the backend serves
/// (profiles, tags, messaging, events) lives with its own collaborator.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/location", post(routes::location::update_position_handler))
        .route(
            "/users/:user_id/encounters",
            get(routes::encounters::total_encounters_handler),
        )
        .route(
            "/users/:user_id/matches",
            get(routes::matches::matches_handler),
        )
        .route("/interests", post(routes::interests::record_interest_handler))
        .route(
            "/users/:user_id/chat-peers",
            get(routes::chats::chat_peers_handler),
        )
        .with_state(state)
}
