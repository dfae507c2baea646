//! Runtime Configuration
//!
//! Settings come from environment variables with sensible defaults; command
//! line flags (`--bind`, `--page`) override the environment.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_PAGE: &str = "Glossary_of_mycology";
pub const DEFAULT_USER_AGENT: &str = "MycoWriter/1.0 (mycowriter.com; Educational/Research)";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Where and how the glossary page is fetched.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub endpoint: String,
    pub page: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page: DEFAULT_PAGE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub source: SourceConfig,
    pub cache_ttl: Duration,
}

impl Config {
    /// Reads the process environment and command line.
    pub fn from_env(args: &[String]) -> Result<Self> {
        Self::from_sources(|key| std::env::var(key).ok(), args)
    }

    /// Builds a config from an arbitrary variable lookup plus CLI arguments.
    pub fn from_sources<F>(lookup: F, args: &[String]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mut bind = var("GLOSSARY_BIND", DEFAULT_BIND);
        let mut page = var("GLOSSARY_PAGE", DEFAULT_PAGE);

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind = args
                        .get(i + 1)
                        .cloned()
                        .context("--bind requires a value")?;
                    i += 2;
                }
                "--page" => {
                    page = args
                        .get(i + 1)
                        .cloned()
                        .context("--page requires a value")?;
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address: {}", bind))?;

        let timeout = parse_secs(&lookup, "GLOSSARY_TIMEOUT_SECS", DEFAULT_TIMEOUT)?;
        let cache_ttl = parse_secs(&lookup, "GLOSSARY_TTL_SECS", DEFAULT_CACHE_TTL)?;

        Ok(Self {
            bind_addr,
            source: SourceConfig {
                endpoint: var("GLOSSARY_API_ENDPOINT", DEFAULT_ENDPOINT),
                page,
                user_agent: var("GLOSSARY_USER_AGENT", DEFAULT_USER_AGENT),
                timeout,
            },
            cache_ttl,
        })
    }
}

fn parse_secs<F>(lookup: &F, key: &str, default: Duration) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of seconds, got {:?}", key, raw))?;
            Ok(Duration::from_secs(secs))
        }
        None => Ok(default),
    }
}
