//! Quiz orchestrator — reads a TOML config file, selects the appropriate
//! line backend, and provides a factory for creating backend instances.
//!
//! Supported modes:
//! - `sim`: SimBackend (CI/unit tests)
//! - `cdev`: CdevBackend over the Linux GPIO character device

use pinquiz_cdev::CdevBackend;
use pinquiz_core::{Question, QuestionError};
use pinquiz_hal::config::{ChipConfig, LineMap};
use pinquiz_hal::sim::SimBackend;
use pinquiz_hal::traits::{LineBackend, LineError};
use serde::Deserialize;
use std::time::Duration;

/// Top-level config, deserialized from TOML. Every section is optional;
/// the defaults reproduce the stock wiring on `gpiochip0`.
#[derive(Debug, Default, Deserialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub mode: ModeConfig,
    #[serde(default)]
    pub chip: ChipConfig,
    #[serde(default)]
    pub lines: LineMap,
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub questions: QuestionsConfig,
}

#[derive(Debug, Deserialize)]
pub struct ModeConfig {
    #[serde(rename = "type", default = "default_mode")]
    pub mode_type: String,
}

fn default_mode() -> String {
    "cdev".to_string()
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            mode_type: default_mode(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_feedback_hold")]
    pub feedback_hold_ms: u64,
}

fn default_poll_interval() -> u64 {
    10
}

fn default_feedback_hold() -> u64 {
    1000
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
            feedback_hold_ms: default_feedback_hold(),
        }
    }
}

impl RuntimeConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn feedback_hold(&self) -> Duration {
        Duration::from_millis(self.feedback_hold_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct QuestionsConfig {
    #[serde(default)]
    pub path: Option<String>,
}

/// Parsed mode selection.
#[derive(Debug, Clone, PartialEq)]
pub enum HalMode {
    Sim,
    Cdev,
}

impl QuizConfig {
    /// Parse from TOML string.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse from TOML file path.
    pub fn from_file(path: &str) -> Result<Self, OrchestratorError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| OrchestratorError::ConfigError(format!("{path}: {e}")))?;
        Self::from_toml(&content).map_err(|e| OrchestratorError::ConfigError(e.to_string()))
    }

    /// Resolve the mode from config.
    pub fn hal_mode(&self) -> Result<HalMode, OrchestratorError> {
        match self.mode.mode_type.as_str() {
            "sim" => Ok(HalMode::Sim),
            "cdev" => Ok(HalMode::Cdev),
            other => Err(OrchestratorError::ConfigError(format!(
                "unknown mode type: {other}"
            ))),
        }
    }
}

/// Create a line backend from config.
pub fn create_backend(config: &QuizConfig) -> Result<Box<dyn LineBackend>, OrchestratorError> {
    let mode = config.hal_mode()?;
    log::info!("creating {mode:?} line backend");
    match mode {
        HalMode::Sim => Ok(Box::new(SimBackend::new())),
        HalMode::Cdev => {
            let backend = CdevBackend::open(&config.chip.name, &config.chip.consumer)
                .map_err(OrchestratorError::LineError)?;
            Ok(Box::new(backend))
        }
    }
}

/// The configured question file, or the compiled-in set when none is given.
pub fn load_question_set(config: &QuizConfig) -> Result<Vec<Question>, OrchestratorError> {
    match &config.questions.path {
        Some(path) => Ok(pinquiz_core::load_questions(path)?),
        None => Ok(pinquiz_core::builtin()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error("config error: {0}")]
    ConfigError(String),
    #[error("line error: {0}")]
    LineError(#[from] LineError),
    #[error("question error: {0}")]
    QuestionError(#[from] QuestionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sim_config() {
        let toml = r#"
[mode]
type = "sim"

[runtime]
poll_interval_ms = 0
feedback_hold_ms = 0
"#;
        let config = QuizConfig::from_toml(toml).unwrap();
        assert_eq!(config.hal_mode().unwrap(), HalMode::Sim);
        assert_eq!(config.runtime.poll_interval_ms, 0);
        assert_eq!(config.runtime.feedback_hold_ms, 0);
    }

    #[test]
    fn parses_cdev_config() {
        let toml = r#"
[mode]
type = "cdev"

[chip]
name = "gpiochip2"
consumer = "pinquiz"

[lines]
led_correct = 5
button_quit = 6

[questions]
path = "questions.json"
"#;
        let config = QuizConfig::from_toml(toml).unwrap();
        assert_eq!(config.hal_mode().unwrap(), HalMode::Cdev);
        assert_eq!(config.chip.name, "gpiochip2");
        assert_eq!(config.chip.consumer, "pinquiz");
        assert_eq!(config.lines.led_correct, 5);
        assert_eq!(config.lines.button_quit, 6);
        // unlisted lines keep the stock wiring
        assert_eq!(config.lines.led_wrong, 27);
        assert_eq!(config.questions.path.as_deref(), Some("questions.json"));
    }

    #[test]
    fn empty_config_defaults_to_stock_cdev() {
        let config = QuizConfig::from_toml("").unwrap();
        assert_eq!(config.hal_mode().unwrap(), HalMode::Cdev);
        assert_eq!(config.chip.name, "gpiochip0");
        assert_eq!(config.chip.consumer, "Consumer");
        assert_eq!(config.runtime.poll_interval_ms, 10);
        assert_eq!(config.runtime.feedback_hold_ms, 1000);
        assert!(config.questions.path.is_none());
    }

    #[test]
    fn rejects_unknown_mode() {
        let toml = r#"
[mode]
type = "quantum"
"#;
        let config = QuizConfig::from_toml(toml).unwrap();
        assert!(config.hal_mode().is_err());
    }

    #[test]
    fn create_backend_returns_sim() {
        let toml = r#"
[mode]
type = "sim"
"#;
        let config = QuizConfig::from_toml(toml).unwrap();
        let mut backend = create_backend(&config).unwrap();
        // nothing requested yet, so reads must fail
        assert!(backend.read_line("button_quit").is_err());
    }

    #[test]
    fn builtin_set_is_used_without_a_path() {
        let config = QuizConfig::from_toml("").unwrap();
        let questions = load_question_set(&config).unwrap();
        assert_eq!(questions.len(), 5);
    }

    #[test]
    fn parses_quiz_sim_toml_file() {
        let content = std::fs::read_to_string("../../config/quiz_sim.toml").unwrap();
        let config = QuizConfig::from_toml(&content).unwrap();
        assert_eq!(config.hal_mode().unwrap(), HalMode::Sim);
    }
}
