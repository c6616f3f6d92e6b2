// Runtime configuration, read once at startup.
//
// Every key is optional. Parsing goes through a lookup function so tests can
// feed a map instead of mutating the process environment.

use chrono::NaiveTime;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_HARVEST_BASE_URL: &str = "https://api.harvestapp.com";
pub const DEFAULT_TEMPO_BASE_URL: &str = "https://api.tempo.io";

pub const DEFAULT_ISSUE_KEY: &str = "FREEM-5";
pub const DEFAULT_START_TIME: &str = "09:00:00";
pub const WORK_TYPE_ATTRIBUTE_KEY: &str = "_WorkType_";
pub const DEFAULT_WORK_TYPE: &str = "Development";
pub const DEFAULT_REMAINING_ESTIMATE_SECONDS: i64 = 0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not a valid socket address: {value}")]
    InvalidAddress { key: &'static str, value: String },

    #[error("{key} must be formatted as HH:MM:SS, got {value}")]
    InvalidStartTime { key: &'static str, value: String },

    #[error("{key} must be a positive integer, got {value}")]
    InvalidConcurrency { key: &'static str, value: String },
}

/// Fields every Tempo worklog gets regardless of the Harvest entry it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorklogTemplate {
    pub issue_key: String,
    pub start_time: String,
    pub work_type: String,
    pub remaining_estimate_seconds: i64,
}

impl Default for WorklogTemplate {
    fn default() -> Self {
        Self {
            issue_key: DEFAULT_ISSUE_KEY.to_string(),
            start_time: DEFAULT_START_TIME.to_string(),
            work_type: DEFAULT_WORK_TYPE.to_string(),
            remaining_estimate_seconds: DEFAULT_REMAINING_ESTIMATE_SECONDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub harvest_base_url: String,
    pub tempo_base_url: String,
    pub worklog_template: WorklogTemplate,
    /// `None` posts every worklog at once.
    pub max_concurrent_posts: Option<NonZeroUsize>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_or = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr = value_or("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddress {
                key: "BIND_ADDR",
                value: bind_addr.clone(),
            })?;

        let start_time = value_or("TEMPO_START_TIME", DEFAULT_START_TIME);
        let start_time = NaiveTime::parse_from_str(&start_time, "%H:%M:%S")
            .map_err(|_| ConfigError::InvalidStartTime {
                key: "TEMPO_START_TIME",
                value: start_time.clone(),
            })?
            .format("%H:%M:%S")
            .to_string();

        let max_concurrent_posts = match lookup("MAX_CONCURRENT_POSTS").map(|v| v.trim().to_string()) {
            None => None,
            Some(v) if v.is_empty() => None,
            Some(v) => Some(v.parse::<NonZeroUsize>().map_err(|_| {
                ConfigError::InvalidConcurrency {
                    key: "MAX_CONCURRENT_POSTS",
                    value: v.clone(),
                }
            })?),
        };

        Ok(Self {
            bind_addr,
            harvest_base_url: trim_base_url(value_or("HARVEST_BASE_URL", DEFAULT_HARVEST_BASE_URL)),
            tempo_base_url: trim_base_url(value_or("TEMPO_BASE_URL", DEFAULT_TEMPO_BASE_URL)),
            worklog_template: WorklogTemplate {
                issue_key: value_or("TEMPO_ISSUE_KEY", DEFAULT_ISSUE_KEY),
                start_time,
                work_type: value_or("TEMPO_WORK_TYPE", DEFAULT_WORK_TYPE),
                remaining_estimate_seconds: DEFAULT_REMAINING_ESTIMATE_SECONDS,
            },
            max_concurrent_posts,
        })
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
