//! Attrition prediction page view

use std::fmt::Write;

use super::{layout, results, NavItem};
use crate::forms::render_form;
use crate::models::AttritionModel;
use crate::pages::{AttritionPage, Notification};

pub fn render(page: &AttritionPage, notification: Option<&Notification>) -> String {
    let mut content = String::from(
        r#"<header><h1>Employee Attrition Prediction</h1><p>Predict whether an employee is likely to leave using machine learning models.</p></header>"#,
    );

    content.push_str(r#"<section class="card"><h3>Select Model</h3><p>Choose the machine learning algorithm for prediction</p><form method="post" action="/attrition/model" class="toggle">"#);
    for model in AttritionModel::ALL {
        let _ = write!(
            content,
            r#"<button type="submit" name="model" value="{value}"{class}><strong>{name}</strong><br><small>{description}</small></button>"#,
            value = model.as_str(),
            class = if model == page.model() { r#" class="active""# } else { "" },
            name = model.display_name(),
            description = model.description(),
        );
    }
    content.push_str("</form></section>");

    let _ = write!(
        content,
        r#"<section class="card"><h3>Employee Information</h3><p>Enter the employee details for attrition risk analysis</p><form method="post" action="/attrition">{form}<button type="submit"{disabled}>{label}</button></form></section>"#,
        form = render_form(page.form(), page.errors()),
        disabled = if page.is_loading() { " disabled" } else { "" },
        label = if page.is_loading() { "Analyzing..." } else { "Analyze Attrition Risk" },
    );

    if let Some(outcome) = page.result() {
        let _ = write!(
            content,
            r#"<section class="card result"><h3>Prediction Results</h3><p>Based on {model} analysis</p>{body}</section>"#,
            model = outcome.model.display_name(),
            body = results::render_attrition(&outcome.result),
        );
    }

    layout("Attrition Models", NavItem::Attrition, notification, &content)
}
