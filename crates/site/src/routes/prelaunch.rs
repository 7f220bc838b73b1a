//! Pre-launch sign-up route handlers.
//!
//! Two front doors to the same operation: the HTML form posts to
//! [`subscribe`] and gets the page back with a result banner, while
//! [`subscribe_json`] exposes the tagged result for programmatic callers.
//! Both outcomes are HTTP 200; the result payload carries success/failure.

use axum::{Form, Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use crate::services::{SaveResult, save_pre_launch_email};
use crate::state::AppState;

use super::coming_soon::ComingSoonTemplate;

/// Sign-up form data. The city field is hidden and prefilled from the
/// visitor's geo headers on page render.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    pub email: String,
    pub city: Option<String>,
}

/// Handle a sign-up form submission and re-render the page with a banner.
#[instrument(skip(state, form))]
pub async fn subscribe(
    State(state): State<AppState>,
    Form(form): Form<SubscribeForm>,
) -> ComingSoonTemplate {
    let city = normalize_city(form.city);
    let result = save_pre_launch_email(state.leads(), &form.email, city.as_deref()).await;

    let mut template = ComingSoonTemplate::fresh(city);
    match result {
        SaveResult::Saved { message, .. } => template.notice = Some(message),
        SaveResult::Failed { error, .. } => {
            template.error = Some(error);
            // Keep what the visitor typed so they can correct it
            template.email = form.email;
        }
    }
    template
}

/// JSON sign-up request body.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
    pub city: Option<String>,
}

/// Handle a JSON sign-up and return the tagged result.
#[instrument(skip(state, request))]
pub async fn subscribe_json(
    State(state): State<AppState>,
    Json(request): Json<SubscribeRequest>,
) -> Json<SaveResult> {
    let city = normalize_city(request.city);
    let result = save_pre_launch_email(state.leads(), &request.email, city.as_deref()).await;
    Json(result)
}

/// Treat an empty or whitespace-only city field as absent.
fn normalize_city(city: Option<String>) -> Option<String> {
    city.map(|c| c.trim().to_string()).filter(|c| !c.is_empty())
}
