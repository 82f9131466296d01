use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessError {
    #[error("assessment file not found: {0}")]
    AssessmentNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("assessment parse error: {0}")]
    AssessmentParse(String),

    #[error("score out of range for {question}: {score} (expected 0..=5)")]
    ScoreOutOfRange { question: String, score: i64 },

    #[error("unknown question for {program}: {question}")]
    UnknownQuestion { program: String, question: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AssessError>;
