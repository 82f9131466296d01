use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    #[serde(rename = "Forte")]
    Strong,
    #[serde(rename = "Viável")]
    Viable,
    #[serde(rename = "Fraco")]
    Weak,
    #[serde(rename = "Inadequado")]
    Inadequate,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Self::Strong => "Forte",
            Self::Viable => "Viável",
            Self::Weak => "Fraco",
            Self::Inadequate => "Inadequado",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Weighted average on the 0..=5 scale.
    pub total_score: f64,
    pub percentage: f64,
    pub classification: Classification,
    pub color: &'static str,
    /// Average score per category id; `0.0` for categories with nothing answered.
    pub category_scores: BTreeMap<String, f64>,
}

impl ScoreResult {
    pub fn category_score(&self, category_id: &str) -> f64 {
        self.category_scores
            .get(category_id)
            .copied()
            .unwrap_or(0.0)
    }
}
