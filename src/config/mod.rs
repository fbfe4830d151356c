use std::env;

use crate::error::AppError;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama: OllamaConfig,
    pub logging: LoggingConfig,
    pub request: RequestConfig,
    pub search: SearchConfig,
}

/// Ollama API configuration
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub base_url: String,
    pub model: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// HTTP request configuration
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
}

/// Tree-of-Thought search bounds
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub max_iterations: usize,
    pub breadth_limit: usize,
    pub frontier_policy: FrontierPolicy,
}

/// Frontier retention policy applied after each expansion round.
///
/// `Unbounded` keeps every new node in the next frontier, so the tree grows
/// as `breadth_limit^iterations`. `TopK` narrows the frontier to the k
/// best-scored nodes; the tree itself retains every created node either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierPolicy {
    Unbounded,
    TopK(usize),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let ollama = OllamaConfig {
            base_url: env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.1".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let request = RequestConfig {
            timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30000),
            max_retries: env::var("MAX_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3),
            retry_delay_ms: env::var("RETRY_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1000),
        };

        let search = SearchConfig {
            max_iterations: positive_var("MAX_ITERATIONS", 3)?,
            breadth_limit: positive_var("BREADTH_LIMIT", 3)?,
            frontier_policy: match env::var("FRONTIER_TOP_K") {
                Ok(raw) => {
                    let k: usize = raw.parse().map_err(|_| AppError::Config {
                        message: format!(
                            "FRONTIER_TOP_K must be a positive integer, got '{}'",
                            raw
                        ),
                    })?;
                    if k == 0 {
                        return Err(AppError::Config {
                            message: "FRONTIER_TOP_K must be at least 1".to_string(),
                        });
                    }
                    FrontierPolicy::TopK(k)
                }
                Err(_) => FrontierPolicy::Unbounded,
            },
        };

        Ok(Config {
            ollama,
            logging,
            request,
            search,
        })
    }
}

/// Read an env var that must parse to a positive integer, falling back to a default
fn positive_var(name: &str, default: usize) -> Result<usize, AppError> {
    match env::var(name) {
        Ok(raw) => {
            let value: usize = raw.parse().map_err(|_| AppError::Config {
                message: format!("{} must be a positive integer, got '{}'", name, raw),
            })?;
            if value == 0 {
                return Err(AppError::Config {
                    message: format!("{} must be at least 1", name),
                });
            }
            Ok(value)
        }
        Err(_) => Ok(default),
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30000,
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 3,
            breadth_limit: 3,
            frontier_policy: FrontierPolicy::Unbounded,
        }
    }
}
