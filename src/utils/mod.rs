/// Environment variable helpers
pub mod config;
/// Tracing subscriber setup
pub mod logger;
/// Interactive credential and license prompts
pub mod prompt;
