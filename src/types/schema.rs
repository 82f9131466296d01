use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Program {
    Maf,
    Iki,
}

impl Program {
    pub const ALL: [Program; 2] = [Program::Maf, Program::Iki];

    pub fn label(self) -> &'static str {
        match self {
            Self::Maf => "MAF",
            Self::Iki => "IKI",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub weight: f64,
    pub questions: &'static [Question],
}

impl Category {
    /// Weight as a display percentage, e.g. `0.15` -> `15`.
    pub fn weight_percent(&self) -> f64 {
        self.weight * 100.0
    }
}
