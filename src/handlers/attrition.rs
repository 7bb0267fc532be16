//! Attrition page handlers

use axum::{
    extract::State,
    response::{Html, Redirect},
    Extension, Form,
};
use serde::Deserialize;
use std::sync::Arc;

use super::form_inputs;
use crate::forms::FormComponent;
use crate::middleware::session::Session;
use crate::models::AttritionModel;
use crate::{pages, views, AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct ModelSelection {
    pub model: String,
}

/// Render the attrition page, consuming any pending notification
pub async fn show(Extension(session): Extension<Arc<Session>>) -> Html<String> {
    render(&session)
}

/// Switch between logistic regression and random forest
pub async fn select_model(
    Extension(session): Extension<Arc<Session>>,
    Form(req): Form<ModelSelection>,
) -> AppResult<Redirect> {
    let model = req.model.parse::<AttritionModel>().map_err(AppError::BadRequest)?;
    session.attrition.lock().select_model(model);

    Ok(Redirect::to("/attrition"))
}

/// Apply posted fields to the form, submit, and render the outcome
pub async fn submit(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<Session>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Html<String> {
    session.attrition.lock().form_mut().apply_inputs(form_inputs(&fields));

    pages::attrition::submit(&session.attrition, &state.api).await;

    render(&session)
}

fn render(session: &Session) -> Html<String> {
    let mut page = session.attrition.lock();
    let notification = page.take_notification();
    Html(views::attrition::render(&page, notification.as_ref()))
}
