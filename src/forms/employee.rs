//! Plain and leaky employee form state

use std::str::FromStr;
use validator::Validate;

use super::{coerce_int, Field, FieldErrors, FieldValue, FormComponent};
use crate::models::{
    Department, Education, EmployeeRecord, Gender, JobRole, LeakyEmployeeRecord, Overtime,
    UnknownOption,
};

/// Employee form without leaky fields.
///
/// Selects are kept as raw strings so an unselected control (empty string)
/// can be reported as a field error rather than failing to parse.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct EmployeeForm {
    #[validate(range(min = 18, max = 65, message = "Age must be between 18 and 65"))]
    pub age: i64,

    #[validate(length(min = 1, message = "Please select gender"))]
    pub gender: String,

    #[validate(length(min = 1, message = "Please select education level"))]
    pub education: String,

    #[validate(length(min = 1, message = "Please select department"))]
    pub department: String,

    #[validate(length(min = 1, message = "Please select job role"))]
    pub job_role: String,

    #[validate(range(min = 1000, message = "Monthly income must be at least 1000"))]
    pub monthly_income: i64,

    #[validate(range(min = 0, max = 40, message = "Years at company must be between 0 and 40"))]
    pub years_at_company: i64,

    #[validate(range(min = 0, message = "Promotions cannot be negative"))]
    pub promotions: i64,

    #[validate(length(min = 1, message = "Please select overtime status"))]
    pub overtime: String,

    #[validate(range(min = 1, max = 4, message = "Performance rating must be between 1 and 4"))]
    pub performance_rating: i64,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            age: 30,
            gender: String::new(),
            education: String::new(),
            department: String::new(),
            job_role: String::new(),
            monthly_income: 5000,
            years_at_company: 3,
            promotions: 0,
            overtime: String::new(),
            performance_rating: 3,
        }
    }
}

impl FormComponent for EmployeeForm {
    type Payload = EmployeeRecord;

    fn fields(&self) -> &'static [Field] {
        &Field::EMPLOYEE
    }

    fn value(&self, field: Field) -> Option<FieldValue> {
        let value = match field {
            Field::Age => FieldValue::Int(self.age),
            Field::Gender => FieldValue::Text(self.gender.clone()),
            Field::Education => FieldValue::Text(self.education.clone()),
            Field::Department => FieldValue::Text(self.department.clone()),
            Field::JobRole => FieldValue::Text(self.job_role.clone()),
            Field::MonthlyIncome => FieldValue::Int(self.monthly_income),
            Field::YearsAtCompany => FieldValue::Int(self.years_at_company),
            Field::Promotions => FieldValue::Int(self.promotions),
            Field::Overtime => FieldValue::Text(self.overtime.clone()),
            Field::PerformanceRating => FieldValue::Int(self.performance_rating),
            Field::AttritionCopy | Field::TargetLeakageFeature => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, field: Field, raw: &str) -> bool {
        match field {
            Field::Age => self.age = coerce_int(raw),
            Field::Gender => self.gender = raw.to_string(),
            Field::Education => self.education = raw.to_string(),
            Field::Department => self.department = raw.to_string(),
            Field::JobRole => self.job_role = raw.to_string(),
            Field::MonthlyIncome => self.monthly_income = coerce_int(raw),
            Field::YearsAtCompany => self.years_at_company = coerce_int(raw),
            Field::Promotions => self.promotions = coerce_int(raw),
            Field::Overtime => self.overtime = raw.to_string(),
            Field::PerformanceRating => self.performance_rating = coerce_int(raw),
            Field::AttritionCopy | Field::TargetLeakageFeature => return false,
        }
        true
    }

    fn build_payload(&self) -> Result<EmployeeRecord, FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(e) => FieldErrors::from(&e),
        };

        let gender = parse_choice::<Gender>(Field::Gender, &self.gender, &mut errors);
        let education = parse_choice::<Education>(Field::Education, &self.education, &mut errors);
        let department =
            parse_choice::<Department>(Field::Department, &self.department, &mut errors);
        let job_role = parse_choice::<JobRole>(Field::JobRole, &self.job_role, &mut errors);
        let overtime = parse_choice::<Overtime>(Field::Overtime, &self.overtime, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }
        let (Some(gender), Some(education), Some(department), Some(job_role), Some(overtime)) =
            (gender, education, department, job_role, overtime)
        else {
            return Err(errors);
        };

        Ok(EmployeeRecord {
            age: self.age,
            gender,
            education,
            department,
            job_role,
            monthly_income: self.monthly_income,
            years_at_company: self.years_at_company,
            promotions: self.promotions,
            overtime,
            performance_rating: self.performance_rating,
        })
    }
}

/// Parse a select literal, unless the field already failed validation
fn parse_choice<T>(field: Field, raw: &str, errors: &mut FieldErrors) -> Option<T>
where
    T: FromStr<Err = UnknownOption>,
{
    if errors.contains(field) {
        return None;
    }
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            errors.insert(field.name(), format!("Please select a valid {}", e.field));
            None
        }
    }
}

/// Employee form with the two leaky fields of the broken leakage model
#[derive(Debug, Clone, PartialEq, Default, Validate)]
pub struct LeakyEmployeeForm {
    pub employee: EmployeeForm,

    #[validate(range(min = 0, max = 1, message = "Must be 0 or 1"))]
    pub attrition_copy: i64,

    #[validate(range(min = 0, max = 1, message = "Must be 0 or 1"))]
    pub target_leakage_feature: i64,
}

const LEAKY_FORM_FIELDS: [Field; 12] = [
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
    Field::AttritionCopy,
    Field::TargetLeakageFeature,
];

impl FormComponent for LeakyEmployeeForm {
    type Payload = LeakyEmployeeRecord;

    fn fields(&self) -> &'static [Field] {
        &LEAKY_FORM_FIELDS
    }

    fn value(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::AttritionCopy => Some(FieldValue::Int(self.attrition_copy)),
            Field::TargetLeakageFeature => Some(FieldValue::Int(self.target_leakage_feature)),
            other => self.employee.value(other),
        }
    }

    fn set_field(&mut self, field: Field, raw: &str) -> bool {
        match field {
            Field::AttritionCopy => self.attrition_copy = coerce_int(raw),
            Field::TargetLeakageFeature => self.target_leakage_feature = coerce_int(raw),
            other => return self.employee.set_field(other, raw),
        }
        true
    }

    fn build_payload(&self) -> Result<LeakyEmployeeRecord, FieldErrors> {
        let employee = self.employee.build_payload();

        let mut errors = match &employee {
            Ok(_) => FieldErrors::default(),
            Err(e) => e.clone(),
        };
        if let Err(e) = self.validate() {
            errors.merge(FieldErrors::from(&e));
        }

        match employee {
            Ok(employee) if errors.is_empty() => Ok(LeakyEmployeeRecord {
                employee,
                attrition_copy: self.attrition_copy,
                target_leakage_feature: self.target_leakage_feature,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> EmployeeForm {
        let mut form = EmployeeForm::default();
        form.apply_inputs([
            ("age", "30"),
            ("gender", "Male"),
            ("education", "Graduate"),
            ("department", "IT"),
            ("job_role", "Manager"),
            ("monthly_income", "5000"),
            ("years_at_company", "3"),
            ("promotions", "0"),
            ("overtime", "No"),
            ("performance_rating", "3"),
        ]);
        form
    }

    #[test]
    fn test_defaults() {
        let form = EmployeeForm::default();
        assert_eq!(form.age, 30);
        assert_eq!(form.monthly_income, 5000);
        assert_eq!(form.years_at_company, 3);
        assert_eq!(form.promotions, 0);
        assert_eq!(form.performance_rating, 3);
        assert!(form.gender.is_empty());

        let leaky = LeakyEmployeeForm::default();
        assert_eq!(leaky.attrition_copy, 0);
        assert_eq!(leaky.target_leakage_feature, 0);
    }

    #[test]
    fn test_numeric_inputs_coerced() {
        let mut form = EmployeeForm::default();
        form.set_field(Field::Age, "");
        form.set_field(Field::MonthlyIncome, "abc");
        form.set_field(Field::YearsAtCompany, "7 years");
        form.set_field(Field::PerformanceRating, "4");

        assert_eq!(form.age, 0);
        assert_eq!(form.monthly_income, 0);
        assert_eq!(form.years_at_company, 7);
        assert_eq!(form.performance_rating, 4);
    }

    #[test]
    fn test_plain_form_ignores_leaky_fields() {
        let mut form = EmployeeForm::default();
        assert!(!form.set_field(Field::AttritionCopy, "1"));
        assert_eq!(form.value(Field::AttritionCopy), None);

        let applied = form.apply_inputs([("attrition_copy", "1"), ("bogus", "x"), ("age", "40")]);
        assert_eq!(applied, 1);
        assert_eq!(form.age, 40);
    }

    #[test]
    fn test_scenario_payload() {
        let record = filled_form().build_payload().unwrap();

        assert_eq!(record.age, 30);
        assert_eq!(record.gender, Gender::Male);
        assert_eq!(record.department, Department::It);
        assert_eq!(record.job_role, JobRole::Manager);
        assert_eq!(record.overtime, Overtime::No);
        assert_eq!(record.performance_rating, 3);
    }

    #[test]
    fn test_bounds_accepted() {
        for (field, value) in [
            (Field::Age, "18"),
            (Field::Age, "65"),
            (Field::MonthlyIncome, "1000"),
            (Field::YearsAtCompany, "0"),
            (Field::YearsAtCompany, "40"),
            (Field::Promotions, "12"),
            (Field::PerformanceRating, "1"),
            (Field::PerformanceRating, "4"),
        ] {
            let mut form = filled_form();
            form.set_field(field, value);
            assert!(
                form.build_payload().is_ok(),
                "{} = {} should be accepted",
                field.name(),
                value
            );
        }
    }

    #[test]
    fn test_out_of_bounds_blocked() {
        for (field, value) in [
            (Field::Age, "17"),
            (Field::Age, "66"),
            (Field::MonthlyIncome, "999"),
            (Field::YearsAtCompany, "41"),
            (Field::YearsAtCompany, "-1"),
            (Field::Promotions, "-1"),
            (Field::PerformanceRating, "0"),
            (Field::PerformanceRating, "5"),
        ] {
            let mut form = filled_form();
            form.set_field(field, value);

            let errors = form.build_payload().unwrap_err();
            assert_eq!(errors.len(), 1);
            assert!(errors.get(field).is_some(), "{} = {} should be blocked", field.name(), value);
        }
    }

    #[test]
    fn test_unselected_and_unknown_choices() {
        let mut form = filled_form();
        form.set_field(Field::Gender, "");
        form.set_field(Field::Department, "Marketing");

        let errors = form.build_payload().unwrap_err();
        assert_eq!(errors.get(Field::Gender), Some("Please select gender"));
        assert_eq!(errors.get(Field::Department), Some("Please select a valid department"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_leaky_form_payload() {
        let mut form = LeakyEmployeeForm { employee: filled_form(), ..Default::default() };
        form.apply_inputs([("attrition_copy", "1"), ("target_leakage_feature", "1")]);

        let record = form.build_payload().unwrap();
        assert_eq!(record.attrition_copy, 1);
        assert_eq!(record.target_leakage_feature, 1);
        assert_eq!(record.employee, filled_form().build_payload().unwrap());
    }

    #[test]
    fn test_leaky_fields_validated() {
        let mut form = LeakyEmployeeForm::default();
        form.set_field(Field::AttritionCopy, "2");
        form.set_field(Field::Age, "17");

        let errors = form.build_payload().unwrap_err();
        assert_eq!(errors.get(Field::AttritionCopy), Some("Must be 0 or 1"));
        assert!(errors.get(Field::Age).is_some());
        assert!(errors.get(Field::TargetLeakageFeature).is_none());
        // Unselected categorical fields of the default form
        assert!(errors.get(Field::Gender).is_some());
    }
}
