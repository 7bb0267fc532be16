//! Closed option sets for the categorical employee fields

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a literal is not part of an option set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {field}")]
pub struct UnknownOption {
    pub field: &'static str,
    pub value: String,
}

/// Declares a closed option set serialized as its literal.
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $literal:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $literal,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok($name::$variant),)+
                    _ => Err(UnknownOption { field: $field, value: s.to_string() }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

option_set! {
    Gender, "gender" {
        Male => "Male",
        Female => "Female",
    }
}

option_set! {
    Education, "education level" {
        Graduate => "Graduate",
        PostGraduate => "Post-Graduate",
        PhD => "PhD",
    }
}

option_set! {
    Department, "department" {
        Finance => "Finance",
        Hr => "HR",
        It => "IT",
        Sales => "Sales",
    }
}

option_set! {
    JobRole, "job role" {
        Executive => "Executive",
        Lead => "Lead",
        Manager => "Manager",
    }
}

option_set! {
    /// Whether the employee works overtime
    Overtime, "overtime status" {
        Yes => "Yes",
        No => "No",
    }
}

/// Performance ratings with their display labels
pub const PERFORMANCE_RATING_OPTIONS: [(i64, &str); 4] = [
    (1, "1 - Low"),
    (2, "2 - Below Average"),
    (3, "3 - Average"),
    (4, "4 - High"),
];

/// Options for the "future result known" leaky field
pub const ATTRITION_COPY_OPTIONS: [(i64, &str); 2] = [(0, "0 - No"), (1, "1 - Yes")];

/// Options for the leakage parameter field
pub const TARGET_LEAKAGE_OPTIONS: [(i64, &str); 2] = [(0, "0"), (1, "1")];
