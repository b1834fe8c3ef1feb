//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};
use clap::Parser;

/// Message shown when the countdown runs out
pub const TIME_UP_MESSAGE: &str = "Time is up! Submitting exam...";

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "exam-timer")]
#[command(about = "A state-managed HTTP exam server with a self-submitting countdown")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Exam duration in seconds
    #[arg(short, long, default_value = "1200")]
    pub duration: u64,

    /// Identifier of the element the countdown renders into
    #[arg(long, default_value = "timer")]
    pub display_id: String,

    /// Identifier of the form submitted on expiry
    #[arg(long, default_value = "examForm")]
    pub form_id: String,

    /// JSON file with the question bank (built-in sample when omitted)
    #[arg(short, long)]
    pub questions: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Countdown settings derived from the CLI
    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig {
            duration_seconds: self.duration,
            display_id: self.display_id.clone(),
            form_id: self.form_id.clone(),
            ..TimerConfig::default()
        }
    }
}

/// Settings for a single countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    pub duration_seconds: u64,
    pub display_id: String,
    pub form_id: String,
    pub expiry_message: String,
    pub tick_interval: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 1200,
            display_id: "timer".to_string(),
            form_id: "examForm".to_string(),
            expiry_message: TIME_UP_MESSAGE.to_string(),
            tick_interval: Duration::from_millis(1000),
        }
    }
}
