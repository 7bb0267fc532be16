//! HTML controls for the employee forms

use std::fmt::Write;

use super::{Field, FieldErrors, FieldKind, FormComponent};
use crate::models::{
    Department, Education, Gender, JobRole, Overtime, ATTRITION_COPY_OPTIONS,
    PERFORMANCE_RATING_OPTIONS, TARGET_LEAKAGE_OPTIONS,
};
use crate::views::escape;

/// Render one control per field of `form`, with field messages from `errors`
pub fn render_form<F: FormComponent>(form: &F, errors: &FieldErrors) -> String {
    let mut html = String::from(r#"<div class="form-grid">"#);

    for field in form.fields() {
        let value = form
            .value(*field)
            .map(|v| v.as_form_value())
            .unwrap_or_default();
        render_field(&mut html, *field, &value, errors.get(*field));
    }

    html.push_str("</div>");
    html
}

fn render_field(html: &mut String, field: Field, value: &str, error: Option<&str>) {
    let class = if field.is_leaky() { "field leaky" } else { "field" };
    let name = field.name();

    let _ = write!(
        html,
        r#"<div class="{class}"><label for="{name}">{label}</label>"#,
        label = escape(field.label()),
    );

    match field.kind() {
        FieldKind::Number => {
            let (min, max, step, placeholder) = number_attrs(field);
            let _ = write!(
                html,
                r#"<input type="number" id="{name}" name="{name}" value="{value}" min="{min}"{max}{step} placeholder="{placeholder}">"#,
                value = escape(value),
                max = max.map(|m| format!(r#" max="{m}""#)).unwrap_or_default(),
                step = step.map(|s| format!(r#" step="{s}""#)).unwrap_or_default(),
            );
        }
        FieldKind::Choice | FieldKind::IntChoice => {
            let options = select_options(field);
            let _ = write!(html, r#"<select id="{name}" name="{name}">"#);
            let _ = write!(
                html,
                r#"<option value=""{selected}>{placeholder}</option>"#,
                selected = if value.is_empty() { " selected" } else { "" },
                placeholder = escape(placeholder(field)),
            );
            for (option_value, option_label) in options {
                let _ = write!(
                    html,
                    r#"<option value="{v}"{selected}>{l}</option>"#,
                    v = escape(&option_value),
                    selected = if option_value == value { " selected" } else { "" },
                    l = escape(&option_label),
                );
            }
            html.push_str("</select>");
        }
    }

    if let Some(message) = error {
        let _ = write!(html, r#"<p class="field-error">{}</p>"#, escape(message));
    }
    html.push_str("</div>");
}

fn number_attrs(field: Field) -> (i64, Option<i64>, Option<i64>, &'static str) {
    match field {
        Field::Age => (18, Some(65), None, "e.g. 30"),
        Field::MonthlyIncome => (1000, None, Some(100), "e.g. 5000"),
        Field::YearsAtCompany => (0, Some(40), None, "e.g. 5"),
        _ => (0, None, None, "e.g. 2"),
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Gender => "Select gender",
        Field::Education => "Select education level",
        Field::Department => "Select department",
        Field::JobRole => "Select job role",
        Field::Overtime => "Select overtime status",
        Field::PerformanceRating => "Select rating",
        _ => "Select value",
    }
}

fn select_options(field: Field) -> Vec<(String, String)> {
    fn literals<T: ToString>(all: &[T]) -> Vec<(String, String)> {
        all.iter().map(|o| (o.to_string(), o.to_string())).collect()
    }
    fn labelled(all: &[(i64, &str)]) -> Vec<(String, String)> {
        all.iter().map(|(v, l)| (v.to_string(), l.to_string())).collect()
    }

    match field {
        Field::Gender => literals(Gender::ALL),
        Field::Education => literals(Education::ALL),
        Field::Department => literals(Department::ALL),
        Field::JobRole => literals(JobRole::ALL),
        Field::Overtime => literals(Overtime::ALL),
        Field::PerformanceRating => labelled(&PERFORMANCE_RATING_OPTIONS),
        Field::AttritionCopy => labelled(&ATTRITION_COPY_OPTIONS),
        Field::TargetLeakageFeature => labelled(&TARGET_LEAKAGE_OPTIONS),
        _ => Vec::new(),
    }
}
