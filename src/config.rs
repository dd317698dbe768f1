use crate::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://apis.ccbp.in/ipl";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_base = env::var("IPL_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let timeout = env::var("IPL_TIMEOUT_SECS").ok();

        Self::from_parts(&api_base, timeout.as_deref())
    }

    pub fn from_parts(api_base: &str, timeout_secs: Option<&str>) -> Result<Self, AppError> {
        let timeout = match timeout_secs {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AppError::Config(format!("IPL_TIMEOUT_SECS must be a whole number, got {:?}", raw))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Config {
            api_base: normalize_base(api_base),
            timeout,
        })
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = normalize_base(api_base);
        self
    }
}

fn normalize_base(base: &str) -> String {
    base.strip_suffix('/').unwrap_or(base).to_string()
}
