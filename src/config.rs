use directories::UserDirs;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    BASE_API_URL_ENV, CONFIG_DIR, CONFIG_FILE, ENTER_BASE_API_URL, ENTER_USER_ID,
    COMPLETE_SETUP,
};
use crate::external_api::ApiError;

const DEFAULT_USER_ID: u32 = 1;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_user_id() -> u32 {
    DEFAULT_USER_ID
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Blog REST API url, endpoints are appended to it
    #[serde(default)]
    pub base_api_url: String,
    /// Owner written into new drafts
    #[serde(default = "default_user_id")]
    pub user_id: u32,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_api_url: String::new(),
            user_id: DEFAULT_USER_ID,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Create the config from user input
    pub fn new<R, W>(mut input: R, mut output: W) -> Result<Self, ApiError>
    where
        R: BufRead,
        W: Write,
    {
        output.write_all(ENTER_BASE_API_URL.as_bytes())?;
        output.flush()?;
        let base_api_url = validate_url(read_line(&mut input)?)?;

        output.write_all(ENTER_USER_ID.as_bytes())?;
        output.flush()?;
        let user_id = match read_line(&mut input)?.as_str() {
            "" => DEFAULT_USER_ID,
            value => validate_user_id(value)?,
        };
        writeln!(output, "{}", COMPLETE_SETUP)?;

        Ok(Self {
            base_api_url,
            user_id,
            ..Self::default()
        })
    }

    /// Read the config file
    pub fn get_config(path_to_config: &Path) -> Result<Self, ApiError> {
        let file = fs::File::open(path_to_config)?;
        serde_json::from_reader(file)
            .map_err(|_| ApiError::NotParseConfig(path_to_config.display().to_string()))
    }

    pub fn save(&self, path_to_config: &Path) -> Result<(), ApiError> {
        if let Some(parent) = path_to_config.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path_to_config, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// `~/.config/postboard/config.json`
    pub fn default_path() -> Result<PathBuf, ApiError> {
        UserDirs::new()
            .ok_or(ApiError::NotFoundUserDir)
            .map(|user_dirs| user_dirs.home_dir().join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Url precedence: flag, then environment, then file
    pub fn resolve(
        path_to_config: Option<&Path>,
        base_url_flag: Option<&str>,
    ) -> Result<Self, ApiError> {
        let env_url = std::env::var(BASE_API_URL_ENV).ok();
        Self::resolve_with_env(path_to_config, base_url_flag, env_url)
    }

    fn resolve_with_env(
        path_to_config: Option<&Path>,
        base_url_flag: Option<&str>,
        env_url: Option<String>,
    ) -> Result<Self, ApiError> {
        let path = match path_to_config {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };
        let mut config = if path.exists() {
            debug!(path = %path.display(), "reading config");
            Self::get_config(&path)?
        } else {
            Self::default()
        };

        let env_url = env_url.filter(|url| !url.is_empty());
        if let Some(url) = base_url_flag.map(str::to_string).or(env_url) {
            config.base_api_url = url;
        }
        if config.base_api_url.is_empty() {
            return Err(ApiError::MissingBaseUrl);
        }
        config.base_api_url = validate_url(config.base_api_url)?;
        Ok(config)
    }
}

/// The entered string must be a URL
pub fn validate_url(mut value: String) -> Result<String, ApiError> {
    let regex = Regex::new(r"^https?://.+$").map_err(|e| ApiError::Parse(e.to_string()))?;
    if !regex.is_match(&value) {
        return Err(ApiError::InvalidUrl);
    }
    while value.ends_with('/') {
        value.pop();
    }
    Ok(value)
}

fn validate_user_id(value: &str) -> Result<u32, ApiError> {
    let user_id: u32 = value
        .parse()
        .map_err(|_| ApiError::InvalidArgument("user id".to_string(), value.to_string()))?;
    if user_id == 0 {
        return Err(ApiError::IdMoreThenZero);
    }
    Ok(user_id)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, ApiError> {
    let mut input_value = String::new();
    input.read_line(&mut input_value)?;
    Ok(input_value.trim().to_string())
}
