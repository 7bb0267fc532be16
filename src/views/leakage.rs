//! Data leakage demo page view

use std::fmt::Write;

use super::{layout, results, NavItem};
use crate::forms::render_form;
use crate::models::LeakageTab;
use crate::pages::{LeakagePage, Notification};

pub fn render(page: &LeakagePage, notification: Option<&Notification>) -> String {
    let tab = page.active_tab();
    let mut content = String::from(
        r#"<header><h1>Data Leakage Experiment</h1><p>Demonstrate how data leakage can artificially inflate model performance and lead to unreliable predictions.</p></header>"#,
    );

    content.push_str(r#"<form method="post" action="/leakage/tab" class="toggle">"#);
    let tabs = [(LeakageTab::Broken, "Broken Model"), (LeakageTab::Fixed, "Fixed Model")];
    for (value, label) in tabs {
        let _ = write!(
            content,
            r#"<button type="submit" name="tab" value="{v}"{class}>{label}</button>"#,
            v = value.as_str(),
            class = if value == tab { r#" class="active""# } else { "" },
        );
    }
    content.push_str("</form>");

    let submit_label = |idle: &'static str| if page.is_loading() { "Processing..." } else { idle };
    let disabled = if page.is_loading() { " disabled" } else { "" };

    match tab {
        LeakageTab::Broken => {
            let _ = write!(
                content,
                r#"<div class="alert warning"><strong>Data Leakage Warning</strong><p>This model contains leaky features that expose the target variable during training, resulting in unrealistically high accuracy but poor real-world performance.</p></div><section class="card"><h3>Employee Information (with Leaky Features)</h3><p>Notice the red-highlighted fields that cause data leakage</p><form method="post" action="/leakage/broken">{form}<button type="submit"{disabled}>{label}</button></form></section>"#,
                form = render_form(page.broken_form(), page.errors(LeakageTab::Broken)),
                label = submit_label("Run Broken Model"),
            );
        }
        LeakageTab::Fixed => {
            let _ = write!(
                content,
                r#"<div class="alert info"><strong>Cleaned Model</strong><p>This model has been properly cleaned of data leakage features and provides reliable predictions based on legitimate employee data.</p></div><section class="card"><h3>Employee Information (Clean)</h3><p>Standard employee features without data leakage</p><form method="post" action="/leakage/fixed">{form}<button type="submit"{disabled}>{label}</button></form></section>"#,
                form = render_form(page.fixed_form(), page.errors(LeakageTab::Fixed)),
                label = submit_label("Run Fixed Model"),
            );
        }
    }

    if let Some(outcome) = page.result() {
        let _ = write!(
            content,
            r#"<section class="card result"><h3>Prediction Result</h3><p>Output from the {model} model</p>{body}</section>"#,
            model = outcome.tab.as_str(),
            body = results::render_leakage(&outcome.result, outcome.tab),
        );
    }

    layout("Leakage Demo", NavItem::Leakage, notification, &content)
}
