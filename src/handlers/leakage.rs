//! Leakage demo handlers

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
use crate::models::LeakageTab;
use crate::{pages, views, AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct TabSelection {
    pub tab: String,
}

pub async fn show(Extension(session): Extension<Arc<Session>>) -> Html<String> {
    render(&session)
}

/// Switch tabs; clears the result, keeps both forms
pub async fn switch_tab(
    Extension(session): Extension<Arc<Session>>,
    Form(req): Form<TabSelection>,
) -> AppResult<Redirect> {
    let tab = req.tab.parse::<LeakageTab>().map_err(AppError::BadRequest)?;
    session.leakage.lock().switch_tab(tab);

    Ok(Redirect::to("/leakage"))
}

/// Submit the broken model form (with leaky fields)
pub async fn submit_broken(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<Session>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Html<String> {
    session.leakage.lock().broken_form_mut().apply_inputs(form_inputs(&fields));

    pages::leakage::submit(&session.leakage, &state.api, true).await;

    render(&session)
}

/// Submit the fixed model form
pub async fn submit_fixed(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<Session>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Html<String> {
    session.leakage.lock().fixed_form_mut().apply_inputs(form_inputs(&fields));

    pages::leakage::submit(&session.leakage, &state.api, false).await;

    render(&session)
}

fn render(session: &Session) -> Html<String> {
    let mut page = session.leakage.lock();
    let notification = page.take_notification();
    Html(views::leakage::render(&page, notification.as_ref()))
}
