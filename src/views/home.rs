//! Dashboard overview page

use std::fmt::Write;

use super::{escape, layout, NavItem};
use crate::client::ApiError;
use crate::models::BackendStatus;

pub fn render(base_url: &str, status: &Result<BackendStatus, ApiError>) -> String {
    let mut content = String::from(
        r#"<header><h1>HR Analytics Dashboard</h1><p>Machine learning demos on employee data.</p></header>"#,
    );

    content.push_str(r#"<section class="card"><h3><a href="/attrition">Attrition Models</a></h3><p>Predict whether an employee is likely to leave with a Logistic Regression or a Random Forest model.</p></section>"#);
    content.push_str(r#"<section class="card"><h3><a href="/leakage">Leakage Demo</a></h3><p>Compare a model trained with target-correlated features against a cleaned one.</p></section>"#);

    let _ = write!(
        content,
        r#"<section class="card backend"><h3>Prediction Service</h3><p><code>{}</code></p>"#,
        escape(base_url),
    );
    match status {
        Ok(status) => {
            let message = escape(&status.message);
            let _ = write!(content, r#"<p class="stable">Reachable: {}</p>"#, message);
            if !status.endpoints.is_empty() {
                content.push_str("<ul>");
                for endpoint in &status.endpoints {
                    let _ = write!(content, "<li><code>{}</code></li>", escape(endpoint));
                }
                content.push_str("</ul>");
            }
        }
        Err(e) => {
            let reason = escape(&e.to_string());
            let _ = write!(content, r#"<p class="high-risk">Unreachable: {}</p>"#, reason);
        }
    }
    content.push_str("</section>");

    layout("Overview", NavItem::Home, None, &content)
}
