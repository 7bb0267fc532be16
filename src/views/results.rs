//! Prediction result views

use std::fmt::Write;

use crate::models::{AttritionResult, LeakageResult, LeakageTab};

/// Display values derived from an attrition result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttritionView {
    pub high_risk: bool,
    pub headline: &'static str,
    /// Probability of leaving, in whole percent
    pub leave_percent: Option<u8>,
    pub stay_percent: Option<u8>,
    pub stay_confidence: Option<&'static str>,
}

impl AttritionView {
    pub fn new(result: &AttritionResult) -> Self {
        let high_risk = result.will_leave();
        let stay_percent = result.stay_probability.map(to_percent);

        Self {
            high_risk,
            headline: if high_risk { "High Risk (Will Leave)" } else { "Stable (Will Stay)" },
            leave_percent: result.attrition_probability.map(to_percent),
            stay_percent,
            stay_confidence: stay_percent.map(|p| match p {
                p if p > 70 => "High",
                p if p > 40 => "Medium",
                _ => "Low",
            }),
        }
    }
}

fn to_percent(probability: f64) -> u8 {
    (probability * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn render_attrition(result: &AttritionResult) -> String {
    let view = AttritionView::new(result);
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<div class="prediction {class}"><p>Prediction</p><h2>{headline}</h2></div>"#,
        class = if view.high_risk { "high-risk" } else { "stable" },
        headline = view.headline,
    );

    match view.leave_percent {
        Some(leave) => {
            let _ = write!(
                html,
                r#"<div class="probability"><p>Probability of Leaving <strong>{leave}%</strong></p><div class="bar" role="meter" aria-valuenow="{leave}" aria-valuemin="0" aria-valuemax="100"><div class="rest" style="width: {rest}%"></div></div><p><span>Stay</span> <span>Leave</span></p></div>"#,
                rest = 100 - leave,
            );
        }
        None => html.push_str(r#"<div class="probability"><p>Probability of Leaving <strong>n/a</strong></p></div>"#),
    }

    match (view.stay_percent, view.stay_confidence) {
        (Some(stay), Some(confidence)) => {
            let _ = write!(
                html,
                r#"<div class="stay"><p>Confidence to Stay <strong>{stay}%</strong></p><span class="badge">{confidence}</span></div>"#,
            );
        }
        _ => html.push_str(r#"<div class="stay"><p>Confidence to Stay <strong>n/a</strong></p></div>"#),
    }

    html
}

pub fn render_leakage(result: &LeakageResult, tab: LeakageTab) -> String {
    let label = result.label().unwrap_or_default();
    let (class, text) = if label == 1 {
        ("high-risk", "Will Leave (1)")
    } else {
        ("stable", "Will Stay (0)")
    };

    format!(
        r#"<div class="prediction {tab}"><p>{model} Model Prediction</p><h2 class="{class}">{text}</h2><p class="label">{label}</p></div>"#,
        tab = tab.as_str(),
        model = tab.display_name(),
    )
}
