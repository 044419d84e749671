//! Environment-sourced configuration
//!
//! Built once at startup and passed by reference to every component.
//! Invalid values are logged and replaced by their defaults so a
//! scheduled run never dies on a typo.

use chrono::NaiveDate;
use std::path::PathBuf;
use std::time::Duration;

use crate::consts::{DEFAULT_MIN_YEAR, DEFAULT_SCRATCH_DIR, DEFAULT_STATE_FILE};
use crate::error::ConfigError;
use crate::i18n::Lang;
use crate::utils::{Timezone, parse_date};

/// Photo API location and credentials.
#[derive(Clone)]
pub(crate) struct ApiSettings {
    pub(crate) base_url: String,
    pub(crate) endpoint: String,
    pub(crate) auth_endpoint: String,
    pub(crate) account: String,
    pub(crate) password: String,
    pub(crate) insecure_tls: bool,
    pub(crate) timeout: Duration,
}

impl ApiSettings {
    pub(crate) fn entry_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }

    pub(crate) fn auth_url(&self) -> String {
        format!("{}{}", self.base_url, self.auth_endpoint)
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SelectionSettings {
    pub(crate) min_year: i32,
    pub(crate) max_year: Option<i32>,
    pub(crate) fixed_date: Option<NaiveDate>,
}

#[derive(Clone)]
pub(crate) struct MailSettings {
    pub(crate) sender: String,
    pub(crate) password: String,
    pub(crate) sender_name: String,
    pub(crate) smtp_host: String,
    pub(crate) smtp_port: u16,
    /// "tls" (implicit, default), "starttls" or "none"
    pub(crate) smtp_tls: String,
    pub(crate) lang: Lang,
    pub(crate) recipients: Vec<String>,
    pub(crate) admin_recipients: Vec<String>,
}

#[derive(Clone)]
pub(crate) struct Config {
    pub(crate) api: ApiSettings,
    pub(crate) selection: SelectionSettings,
    pub(crate) mail: MailSettings,
    pub(crate) tags: Vec<String>,
    pub(crate) timezone: Timezone,
    pub(crate) state_file: PathBuf,
    pub(crate) scratch_dir: PathBuf,
}

impl Config {
    /// Read the process environment, after merging an optional `.env` file.
    pub(crate) fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let text = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let min_year = or_default(parse_year("MINYEAR", get("MINYEAR")), None)
            .unwrap_or(DEFAULT_MIN_YEAR);
        let max_year = or_default(parse_year("MAXYEAR", get("MAXYEAR")), None);
        let fixed_date = or_default(
            get("FIXEDDATE").map(|raw| parse_date(&raw)).transpose(),
            None,
        );

        let api = ApiSettings {
            base_url: text("API_URL", "https://localhost:5001")
                .trim_end_matches('/')
                .to_string(),
            endpoint: text("API_ENDPOINT", "/photo/webapi/entry.cgi"),
            auth_endpoint: text("API_AUTH_ENDPOINT", "/photo/webapi/auth.cgi"),
            account: text("SYNOLOGY_ACCOUNT", ""),
            password: text("SYNOLOGY_PASSWORD", ""),
            insecure_tls: parse_flag(get("API_INSECURE_TLS"), true),
            timeout: Duration::from_secs(or_default(
                parse_number("API_TIMEOUT_SECS", get("API_TIMEOUT_SECS")),
                None,
            )
            .unwrap_or(30)),
        };

        let mail = MailSettings {
            sender: text("EMAIL_SENDER", ""),
            password: text("EMAIL_PASSWORD", ""),
            sender_name: text("EMAIL_SENDER_NAME", "Photo Memories"),
            smtp_host: text("SMTP_HOST", "smtp.gmail.com"),
            smtp_port: or_default(parse_number("SMTP_PORT", get("SMTP_PORT")), None)
                .unwrap_or(465),
            smtp_tls: text("SMTP_TLS", "tls").to_ascii_lowercase(),
            lang: or_default(Lang::from_code(get("EMAIL_LANG").as_deref()), Lang::En),
            recipients: parse_list(get("RECIPIENTS")),
            admin_recipients: parse_list(get("ADMIN_RECIPIENTS")),
        };

        Self {
            api,
            selection: SelectionSettings {
                min_year,
                max_year,
                fixed_date,
            },
            mail,
            tags: parse_list(get("PHOTOTAGS")),
            timezone: or_default(Timezone::parse(get("TIMEZONE").as_deref()), Timezone::Local),
            state_file: PathBuf::from(text("STATE_FILE", DEFAULT_STATE_FILE)),
            scratch_dir: PathBuf::from(text("SCRATCH_DIR", DEFAULT_SCRATCH_DIR)),
        }
    }
}

fn or_default<T>(parsed: Result<T, ConfigError>, default: T) -> T {
    parsed.unwrap_or_else(|e| {
        tracing::warn!("{e}, using default");
        default
    })
}

/// Comma separated list; blanks are dropped, entries trimmed.
fn parse_list(value: Option<String>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_year(var: &'static str, value: Option<String>) -> Result<Option<i32>, ConfigError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    match raw.trim().parse::<i32>() {
        Ok(year) if (1..=9999).contains(&year) => Ok(Some(year)),
        _ => Err(ConfigError::InvalidYear { var, input: raw }),
    }
}

fn parse_number<T: std::str::FromStr>(
    var: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber { var, input: raw })
}

fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

#[cfg(test)]
pub(crate) fn test_config(vars: &[(&str, &str)]) -> Config {
    let owned: std::collections::HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| owned.get(key).cloned())
}
