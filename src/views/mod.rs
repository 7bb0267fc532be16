//! Server-rendered HTML views

pub mod attrition;
pub mod home;
pub mod leakage;
pub mod results;

use std::fmt::Write;

use crate::pages::{Notification, NotificationKind};

/// Escape text for HTML element content and attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Sidebar navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Attrition,
    Leakage,
}

const NAV: [(NavItem, &str, &str); 3] = [
    (NavItem::Home, "Overview", "/"),
    (NavItem::Attrition, "Attrition Models", "/attrition"),
    (NavItem::Leakage, "Leakage Demo", "/leakage"),
];

const STYLESHEET: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; display: flex; color: #1f2937; background: #f8fafc; }
nav { width: 220px; min-height: 100vh; background: #0f172a; padding: 24px 12px; }
nav a { display: block; color: #cbd5e1; padding: 10px 12px; border-radius: 8px; text-decoration: none; }
nav a.active { background: #1e293b; color: #fff; }
main { flex: 1; max-width: 960px; margin: 0 auto; padding: 32px; }
.card { background: #fff; border: 1px solid #e2e8f0; border-radius: 12px; padding: 20px; margin-bottom: 24px; }
.form-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
.field label { display: block; font-weight: 500; margin-bottom: 4px; }
.field input, .field select { width: 100%; padding: 8px; box-sizing: border-box; }
.field.leaky { background: #fef2f2; border: 1px solid #fca5a5; border-radius: 8px; padding: 8px; }
.field.leaky label { color: #b91c1c; }
.field-error { color: #b91c1c; font-size: 0.85em; margin: 4px 0 0; }
.notification { padding: 12px 16px; border-radius: 8px; margin-bottom: 24px; }
.notification.success { background: #ecfdf5; border: 1px solid #10b981; }
.notification.error { background: #fef2f2; border: 1px solid #ef4444; }
.toggle { display: flex; gap: 8px; }
.toggle button { flex: 1; padding: 12px; border: 1px solid #cbd5e1; border-radius: 8px; background: #fff; text-align: left; }
.toggle button.active { border-color: #2563eb; background: #eff6ff; }
.alert { padding: 12px 16px; border-radius: 8px; margin-bottom: 24px; }
.alert.warning { background: #fffbeb; border: 1px solid #f59e0b; }
.alert.info { background: #eff6ff; border: 1px solid #3b82f6; }
.bar { position: relative; height: 16px; border-radius: 8px; background: linear-gradient(90deg, #10b981, #f59e0b, #ef4444); overflow: hidden; }
.bar .rest { position: absolute; top: 0; bottom: 0; right: 0; background: #e2e8f0; }
.high-risk { color: #b91c1c; }
.stable { color: #047857; }
button[type=submit] { width: 100%; padding: 12px; margin-top: 16px; font-size: 1em; }
"#;

/// Wrap page content in the dashboard shell
pub fn layout(
    title: &str,
    active: NavItem,
    notification: Option<&Notification>,
    content: &str,
) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{title} | HR Analytics</title><style>{style}</style></head><body><nav>"#,
        title = escape(title),
        style = STYLESHEET,
    );

    for (item, label, href) in NAV {
        let class = if item == active { r#" class="active""# } else { "" };
        let _ = write!(html, r#"<a href="{href}"{class}>{label}</a>"#);
    }

    html.push_str("</nav><main>");
    if let Some(notification) = notification {
        html.push_str(&render_notification(notification));
    }
    html.push_str(content);
    html.push_str("</main></body></html>");
    html
}

pub fn render_notification(notification: &Notification) -> String {
    let class = match notification.kind {
        NotificationKind::Success => "success",
        NotificationKind::Error => "error",
    };
    format!(
        r#"<div class="notification {class}" role="status"><strong>{}</strong><p>{}</p></div>"#,
        escape(&notification.title),
        escape(&notification.description),
    )
}
