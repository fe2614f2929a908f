use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::units::MassUnit;
use crate::util::redact;

pub const DEFAULT_URL: &str = "https://www.carboninterface.com/api/v1";

const ENV_KEY: &str = "CARBONINTERFACE_KEY";
const ENV_URL: &str = "CARBONINTERFACE_URL";
const ENV_UNITS: &str = "CARBONINTERFACE_UNITS";
const ENV_RC: &str = "CARBONINTERFACE_RC";
const RC_NAME: &str = ".carboninterfacerc";

#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Carbon Interface API key, sent as a bearer token.
    pub api_key: String,
    /// Unit every estimate is reported in.
    pub units: MassUnit,
    /// Base API URL, normally [`DEFAULT_URL`].
    pub url: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, units: MassUnit) -> Self {
        Self {
            api_key: api_key.into(),
            units,
            url: DEFAULT_URL.to_string(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::config("API key must not be empty"));
        }
        if self.url.trim().is_empty() {
            return Err(Error::config("base URL must not be empty"));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &redact(&self.api_key))
            .field("units", &self.units)
            .field("url", &self.url)
            .finish()
    }
}

#[derive(Debug, Default, PartialEq)]
struct RcConfig {
    url: Option<String>,
    key: Option<String>,
    units: Option<String>,
}

/// Resolves configuration from explicit values, then environment variables,
/// then the first rc file found.
pub(crate) fn load_config(
    key: Option<String>,
    units: Option<MassUnit>,
    url: Option<String>,
) -> Result<ClientConfig> {
    let key = key.or_else(|| env_var(ENV_KEY));
    let url = url.or_else(|| env_var(ENV_URL));
    let units_text = if units.is_none() { env_var(ENV_UNITS) } else { None };

    let candidates = rc_candidates();
    let rc = if key.is_none() || url.is_none() || (units.is_none() && units_text.is_none()) {
        find_rc(&candidates)?
    } else {
        RcConfig::default()
    };

    resolve(key, units, units_text, url, rc, &candidates)
}

fn resolve(
    key: Option<String>,
    units: Option<MassUnit>,
    units_text: Option<String>,
    url: Option<String>,
    rc: RcConfig,
    candidates: &[PathBuf],
) -> Result<ClientConfig> {
    let api_key = match key.or(rc.key) {
        Some(v) => v,
        None => {
            if candidates.is_empty() {
                return Err(Error::config(format!(
                    "missing API key (set {ENV_KEY} or create {RC_NAME})"
                )));
            }
            return Err(Error::config(format!(
                "missing API key (set {ENV_KEY} or put `key:` in one of: {})",
                candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }
    };

    let units = match units {
        Some(u) => u,
        None => match units_text.or(rc.units) {
            Some(text) => text.parse()?,
            None => MassUnit::default(),
        },
    };

    let url = url.or(rc.url).unwrap_or_else(|| DEFAULT_URL.to_string());

    let cfg = ClientConfig {
        api_key,
        units,
        url,
    };
    cfg.validate()?;
    Ok(cfg)
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn find_rc(candidates: &[PathBuf]) -> Result<RcConfig> {
    for path in candidates {
        if path.exists() {
            return read_rc(path);
        }
    }
    Ok(RcConfig::default())
}

fn read_rc(path: &Path) -> Result<RcConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(parse_rc(&text))
}

fn parse_rc(text: &str) -> RcConfig {
    let mut cfg = RcConfig::default();

    // A key may be left bare with its value on the following line.
    let mut pending_key: Option<&str> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(pk) = pending_key.take() {
            if !line.contains(':') || (pk == "url" && looks_like_url(line)) {
                cfg.set(pk, strip_quotes(line));
                continue;
            }
        }

        if let Some((k, v)) = line.split_once(':') {
            let k = k.trim();
            let v = strip_quotes(v.trim());
            if !matches!(k, "url" | "key" | "units") {
                continue;
            }
            if v.is_empty() {
                pending_key = Some(k);
            } else {
                cfg.set(k, v);
            }
        }
    }

    cfg
}

impl RcConfig {
    fn set(&mut self, key: &str, value: &str) {
        let value = Some(value.to_string());
        match key {
            "url" => self.url = value,
            "key" => self.key = value,
            "units" => self.units = value,
            _ => {}
        }
    }
}

fn looks_like_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    if (s.starts_with('"') && s.ends_with('"') && s.len() >= 2)
        || (s.starts_with('\'') && s.ends_with('\'') && s.len() >= 2)
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

fn rc_candidates() -> Vec<PathBuf> {
    // 1) CARBONINTERFACE_RC, 2) ./.carboninterfacerc, 3) ~/.carboninterfacerc
    if let Some(p) = env_var(ENV_RC) {
        return vec![PathBuf::from(p)];
    }

    let mut v = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        v.push(cwd.join(RC_NAME));
    }
    if let Some(home) = dirs::home_dir() {
        v.push(home.join(RC_NAME));
    }
    v
}
