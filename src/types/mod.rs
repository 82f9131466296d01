pub mod answer;
pub mod config;
pub mod report;
pub mod schema;
pub mod scoring;
