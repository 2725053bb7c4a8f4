use axum::{
    Router,
    routing::{get, post},
};

use crate::error::AppError;

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub command: portfolio_contact::Command,
}

pub async fn fallback() -> AppError {
    AppError::NotFound
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::action))
        .fallback(fallback)
        .with_state(app_state)
}
