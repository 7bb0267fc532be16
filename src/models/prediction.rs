//! Prediction models and response shapes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend model variant used by the attrition demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttritionModel {
    #[default]
    Logistic,
    RandomForest,
}

impl AttritionModel {
    pub const ALL: [AttritionModel; 2] = [AttritionModel::Logistic, AttritionModel::RandomForest];

    /// Form value of the model toggle
    pub fn as_str(&self) -> &'static str {
        match self {
            AttritionModel::Logistic => "logistic",
            AttritionModel::RandomForest => "random_forest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AttritionModel::Logistic => "Logistic Regression",
            AttritionModel::RandomForest => "Random Forest",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AttritionModel::Logistic => "Linear classifier",
            AttritionModel::RandomForest => "Ensemble method",
        }
    }
}

impl FromStr for AttritionModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logistic" => Ok(AttritionModel::Logistic),
            "random_forest" => Ok(AttritionModel::RandomForest),
            other => Err(format!("Unknown model: {}", other)),
        }
    }
}

impl fmt::Display for AttritionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Leakage demo tab, one per backend model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeakageTab {
    #[default]
    Broken,
    Fixed,
}

impl LeakageTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeakageTab::Broken => "broken",
            LeakageTab::Fixed => "fixed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LeakageTab::Broken => "Broken",
            LeakageTab::Fixed => "Fixed",
        }
    }
}

impl FromStr for LeakageTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "broken" => Ok(LeakageTab::Broken),
            "fixed" => Ok(LeakageTab::Fixed),
            other => Err(format!("Unknown tab: {}", other)),
        }
    }
}

/// Response of the attrition endpoints.
///
/// The probabilities are optional: the logistic endpoint may answer with the
/// class label only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttritionResult {
    pub attrition_prediction: i64,
    #[serde(default)]
    pub attrition_probability: Option<f64>,
    #[serde(default)]
    pub stay_probability: Option<f64>,
}

impl AttritionResult {
    pub fn will_leave(&self) -> bool {
        self.attrition_prediction == 1
    }
}

/// Response of the leakage endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeakageResult {
    pub prediction: Vec<i64>,
}

impl LeakageResult {
    /// First prediction, the only one for a single-row request
    pub fn label(&self) -> Option<i64> {
        self.prediction.first().copied()
    }
}

/// Banner returned by `GET {base}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub message: String,
    #[serde(default)]
    pub endpoints: Vec<String>,
}
