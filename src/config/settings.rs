use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 4567;

/// Process configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Settings {
    pub jira_base_url: String,
    pub jira_email: String,
    pub jira_api_token: String,
    pub chatgpt_api_key: String,
    pub port: u16,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Ok(Self {
            jira_base_url: require("JIRA_BASE_URL")?,
            jira_email: require("JIRA_EMAIL")?,
            jira_api_token: require("JIRA_API_TOKEN")?,
            chatgpt_api_key: require("CHATGPT_API_KEY")?,
            port: parse_port(std::env::var("PORT").ok())?,
        })
    }
}

fn require(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{name} environment variable not set"))
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    match raw {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("PORT is not a valid TCP port: {raw:?}")),
        None => Ok(DEFAULT_PORT),
    }
}
