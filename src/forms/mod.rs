//! Employee form component
//!
//! Form state is updated field by field from posted values, rendered back as
//! HTML controls, and validated into a typed payload. The plain and the leaky
//! form are distinct types, so leaky fields only exist where they are shown.

pub mod employee;
pub mod render;

use std::collections::BTreeMap;
use validator::ValidationErrors;

pub use employee::{EmployeeForm, LeakyEmployeeForm};
pub use render::render_form;

/// A form control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    Gender,
    Education,
    Department,
    JobRole,
    MonthlyIncome,
    YearsAtCompany,
    Promotions,
    Overtime,
    PerformanceRating,
    AttritionCopy,
    TargetLeakageFeature,
}

/// How a control turns raw input into form state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free numeric input, coerced to 0 when unparsable
    Number,
    /// Select storing the chosen literal
    Choice,
    /// Select storing a parsed integer
    IntChoice,
}

impl Field {
    pub const EMPLOYEE: [Field; 10] = [
        Field::Age,
        Field::Gender,
        Field::Education,
        Field::Department,
        Field::JobRole,
        Field::MonthlyIncome,
        Field::YearsAtCompany,
        Field::Promotions,
        Field::Overtime,
        Field::PerformanceRating,
    ];

    pub const LEAKY: [Field; 2] = [Field::AttritionCopy, Field::TargetLeakageFeature];

    /// Payload key and form control name
    pub fn name(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Education => "education",
            Field::Department => "department",
            Field::JobRole => "job_role",
            Field::MonthlyIncome => "monthly_income",
            Field::YearsAtCompany => "years_at_company",
            Field::Promotions => "promotions",
            Field::Overtime => "overtime",
            Field::PerformanceRating => "performance_rating",
            Field::AttritionCopy => "attrition_copy",
            Field::TargetLeakageFeature => "target_leakage_feature",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Education => "Education",
            Field::Department => "Department",
            Field::JobRole => "Job Role",
            Field::MonthlyIncome => "Monthly Income ($)",
            Field::YearsAtCompany => "Years at Company",
            Field::Promotions => "Num. of Promotions",
            Field::Overtime => "Overtime",
            Field::PerformanceRating => "Performance Rating",
            Field::AttritionCopy => "Future Result Known? (Leaky)",
            Field::TargetLeakageFeature => "Leakage Parameter (Leaky)",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Age | Field::MonthlyIncome | Field::YearsAtCompany | Field::Promotions => {
                FieldKind::Number
            }
            Field::Gender
            | Field::Education
            | Field::Department
            | Field::JobRole
            | Field::Overtime => {
                FieldKind::Choice
            }
            Field::PerformanceRating | Field::AttritionCopy | Field::TargetLeakageFeature => {
                FieldKind::IntChoice
            }
        }
    }

    pub fn is_leaky(&self) -> bool {
        Self::LEAKY.contains(self)
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Self::EMPLOYEE
            .iter()
            .chain(Self::LEAKY.iter())
            .copied()
            .find(|f| f.name() == name)
    }
}

/// Stored value of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

impl FieldValue {
    pub fn as_form_value(&self) -> String {
        match self {
            FieldValue::Int(v) => v.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

/// Per-field validation messages, first message per field wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(field.name()).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(field.name())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.insert(field, message);
        }
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, errs) in errors.field_errors() {
            if let Some(err) = errs.first() {
                let message = err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", err.code));
                out.insert(field.to_string(), message);
            }
        }
        out
    }
}

/// Shared behavior of the plain and the leaky employee form
pub trait FormComponent {
    type Payload;

    /// Controls rendered for this form, in display order
    fn fields(&self) -> &'static [Field];

    /// Current value of a field, `None` if the form has no such field
    fn value(&self, field: Field) -> Option<FieldValue>;

    /// Store raw input for a field. Returns false if the form has no such field.
    fn set_field(&mut self, field: Field, raw: &str) -> bool;

    /// Validate the current state into the payload for this form's endpoint
    fn build_payload(&self) -> Result<Self::Payload, FieldErrors>;

    /// Apply posted `name=value` pairs in order, ignoring unknown names
    fn apply_inputs<'a, I>(&mut self, inputs: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
        Self: Sized,
    {
        let mut applied = 0;
        for (name, raw) in inputs {
            if let Some(field) = Field::from_name(name) {
                if self.set_field(field, raw) {
                    applied += 1;
                }
            }
        }
        applied
    }
}

/// Integer parse that keeps the leading digits and falls back to 0
/// (`"42"` → 42, `"12abc"` → 12, `"3.7"` → 3, `""` / `"abc"` → 0).
pub fn coerce_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());

    digits[..end]
        .parse::<i64>()
        .map(|v| sign * v)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce_int("42"), 42);
        assert_eq!(coerce_int("  7"), 7);
        assert_eq!(coerce_int("12abc"), 12);
        assert_eq!(coerce_int("3.7"), 3);
        assert_eq!(coerce_int("-5"), -5);
        assert_eq!(coerce_int(""), 0);
        assert_eq!(coerce_int("abc"), 0);
        assert_eq!(coerce_int("-"), 0);
    }

    #[test]
    fn test_field_names() {
        for field in Field::EMPLOYEE.iter().chain(Field::LEAKY.iter()) {
            assert_eq!(Field::from_name(field.name()), Some(*field));
        }
        assert_eq!(Field::from_name("salary"), None);
        assert!(Field::AttritionCopy.is_leaky());
        assert!(!Field::Age.is_leaky());
        assert_eq!(Field::PerformanceRating.kind(), FieldKind::IntChoice);
    }

    #[test]
    fn test_field_errors_keep_first() {
        let mut errors = FieldErrors::default();
        errors.insert("age", "first");
        errors.insert("age", "second");

        assert_eq!(errors.get(Field::Age), Some("first"));
        assert_eq!(errors.len(), 1);
        assert!(!errors.contains(Field::Gender));
    }
}
