use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const BOOTSTRAP_CSS: &str =
    "http://netdna.bootstrapcdn.com/bootstrap/3.2.0/css/bootstrap.min.css";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TemperConfig {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub lang: String,
    pub title: String,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            title: String::new(),
            stylesheets: vec![BOOTSTRAP_CSS.to_string()],
            scripts: Vec::new(),
        }
    }
}

/// Number of sibling page links shown on each side of the current page.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    pub max_left: u32,
    pub max_right: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_left: 2,
            max_right: 2,
        }
    }
}

impl TemperConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        tracing::debug!(path = %path.display(), "loaded temper config");
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}
