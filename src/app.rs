use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/pressure", get(handlers::get_pressure))
        .route("/api/symptoms", get(handlers::get_symptoms))
        .route("/api/symptom", post(handlers::set_symptom))
        .with_state(state)
}
