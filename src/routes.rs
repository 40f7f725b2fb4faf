use axum::{
    Router,
    extract::FromRef,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::{db::DbPool, handlers::user};

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

/// Build the HTTP router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(user::list_users))
        .route("/addUser/", post(user::create_user))
        .route("/updateUser/{user_id}", put(user::update_user))
        .route("/deleteUser/{user_id}", delete(user::delete_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
