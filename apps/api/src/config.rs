use anyhow::{Context, Result};

const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_NETLIFY_API_URL: &str = "https://api.netlify.com/api/v1";

/// Application configuration loaded from environment variables.
/// Startup fails if the language-model key is missing. Hosting credentials are
/// optional here and checked by the publisher before it touches the network.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub netlify_auth_token: Option<String>,
    pub netlify_site_id: Option<String>,
    pub netlify_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_model: env_or("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
            openai_base_url: env_or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            netlify_auth_token: optional_env("NETLIFY_AUTH_TOKEN"),
            netlify_site_id: optional_env("NETLIFY_SITE_ID"),
            netlify_api_url: env_or("NETLIFY_API_URL", DEFAULT_NETLIFY_API_URL),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Blank values count as unset so an empty `NETLIFY_AUTH_TOKEN=` line in `.env`
/// is reported as missing configuration rather than sent as a bearer token.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Config with dummy credentials, for tests that never reach the network.
    pub fn for_tests() -> Self {
        Config {
            openai_api_key: "sk-test".to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            netlify_auth_token: Some("netlify-test-token".to_string()),
            netlify_site_id: Some("site-123".to_string()),
            netlify_api_url: DEFAULT_NETLIFY_API_URL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}
