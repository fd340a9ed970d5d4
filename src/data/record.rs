use serde::{Deserialize, Serialize};

/// Binary group partition carried by the second column.
///
/// Only the literal labels `"B"` and `"T"` participate in the baseline/test
/// split; anything else is preserved but belongs to neither group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupTag {
    Baseline,
    Test,
    Other(String),
}

impl GroupTag {
    pub const BASELINE_LABEL: &'static str = "B";
    pub const TEST_LABEL: &'static str = "T";

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            Self::BASELINE_LABEL => Self::Baseline,
            Self::TEST_LABEL => Self::Test,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn is_baseline(&self) -> bool {
        matches!(self, Self::Baseline)
    }

    #[must_use]
    pub fn is_test(&self) -> bool {
        matches!(self, Self::Test)
    }
}

/// One typed row of the dataset, field order fixed by the schema contract.
///
/// Record sequence order equals input row order; downstream code relies on
/// that for the category axis and the test-region boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub category: String,
    pub group: GroupTag,
    pub metric1: f64,
    pub metric2: f64,
}

impl Record {
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        group: GroupTag,
        metric1: f64,
        metric2: f64,
    ) -> Self {
        Self {
            category: category.into(),
            group,
            metric1,
            metric2,
        }
    }
}
