use std::env;

use url::Url;

use crate::{
    theme::DarkPalette, DEFAULT_TARGET_URL, DEFAULT_USER_AGENT, ENGINE_LOGS_ENV, TARGET_URL_ENV,
    USER_AGENT_ENV,
};

/// Startup configuration, resolved once in bootstrap and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub target_url: Url,
    pub user_agent: String,
    pub keep_engine_logs: bool,
    pub palette: DarkPalette,
}

impl ShellConfig {
    pub fn from_env<F>(log: F) -> Self
    where
        F: Fn(&str),
    {
        let target_url = match env::var(TARGET_URL_ENV) {
            Ok(raw) => match normalize_target_url(&raw) {
                Ok(url) => url,
                Err(error) => {
                    log(&format!(
                        "ignoring {TARGET_URL_ENV}: {error}; using {DEFAULT_TARGET_URL}"
                    ));
                    default_target_url()
                }
            },
            Err(_) => default_target_url(),
        };

        Self {
            target_url,
            user_agent: resolve_user_agent(env::var(USER_AGENT_ENV).ok().as_deref()),
            keep_engine_logs: parse_flag(env::var(ENGINE_LOGS_ENV).ok().as_deref()),
            palette: DarkPalette::default(),
        }
    }
}

fn default_target_url() -> Url {
    Url::parse(DEFAULT_TARGET_URL).expect("default target url is a valid absolute url")
}

pub(crate) fn normalize_target_url(raw: &str) -> Result<Url, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("target url is empty".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("invalid target url: {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "unsupported target url scheme '{scheme}', only http/https are allowed"
        )),
    }
}

pub(crate) fn resolve_user_agent(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_USER_AGENT)
        .to_string()
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|value| value.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}
