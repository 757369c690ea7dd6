//! The repository's `.git/config` file.
//!
//! Parsing and writing are delegated to `rust-ini`. Only the repository
//! format version is interpreted here; every other value is passed through
//! as text.

use std::io::{self, Write};

use ini::Ini;
use thiserror::Error;

/// The only repository format version this crate understands.
pub const REPOSITORY_FORMAT_VERSION: i64 = 0;

const CORE: &str = "core";
const FORMAT_VERSION: &str = "repositoryformatversion";

/// Reasons why a config file could not be parsed or its version read.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("missing required key `core.repositoryformatversion`")]
    MissingVersion,

    #[error("`core.repositoryformatversion` is not an integer: `{0}`")]
    VersionNotAnInteger(String),
}

/// An in-memory copy of a git config file.
#[derive(Debug)]
pub struct Config {
    ini: Ini,
}

impl Config {
    /// Create the configuration written into a freshly initialized repository.
    pub fn new_repo() -> Config {
        let mut ini = Ini::new();
        ini.with_section(Some(CORE))
            .set(FORMAT_VERSION, REPOSITORY_FORMAT_VERSION.to_string())
            .set("filemode", "false")
            .set("bare", "false");

        Config { ini }
    }

    /// Parse the text of a config file.
    pub fn parse(text: &str) -> Result<Config, ConfigError> {
        let ini = Ini::load_from_str(text).map_err(|err| ConfigError::Syntax(err.to_string()))?;
        Ok(Config { ini })
    }

    /// Look up a value as text. Section and key names are case-insensitive.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.ini.section(Some(section))?.get(key)
    }

    /// Return the declared `core.repositoryformatversion`.
    pub fn repository_format_version(&self) -> Result<i64, ConfigError> {
        let value = self
            .get(CORE, FORMAT_VERSION)
            .ok_or(ConfigError::MissingVersion)?;

        value
            .trim()
            .parse()
            .map_err(|_| ConfigError::VersionNotAnInteger(value.to_string()))
    }

    /// Write the config out in INI form.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.ini.write_to(writer)
    }
}
