//! Employee payloads sent to the prediction service

use serde::{Deserialize, Serialize};

use super::options::{Department, Education, Gender, JobRole, Overtime};

/// Employee attributes accepted by every prediction endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub age: i64,
    pub gender: Gender,
    pub education: Education,
    pub department: Department,
    pub job_role: JobRole,
    pub monthly_income: i64,
    pub years_at_company: i64,
    pub promotions: i64,
    pub overtime: Overtime,
    pub performance_rating: i64,
}

/// Employee attributes plus the two label-correlated features used only by
/// the broken leakage model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeakyEmployeeRecord {
    #[serde(flatten)]
    pub employee: EmployeeRecord,
    pub attrition_copy: i64,
    pub target_leakage_feature: i64,
}

/// Validated payload of a leakage demo submission.
///
/// The variant decides the endpoint: `Leaky` goes to the broken model and
/// `Plain` to the fixed one, so the fixed model can never see leaky fields.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionPayload {
    Plain(EmployeeRecord),
    Leaky(LeakyEmployeeRecord),
}

impl PredictionPayload {
    pub fn is_leaky(&self) -> bool {
        matches!(self, PredictionPayload::Leaky(_))
    }
}
