use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{KeycheckError, Result};

pub const DEFAULT_KEY_NAME: &str = "GEMINI_API_KEY";
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Read-only accessor for named configuration values.
pub trait EnvSource {
    fn get(&self, name: &str) -> Option<OsString>;
}

/// The real process environment. Values need not be valid Unicode.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<OsString> {
        env::var_os(name)
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<OsString> {
        HashMap::get(self, name).map(OsString::from)
    }
}

impl EnvSource for HashMap<String, OsString> {
    fn get(&self, name: &str) -> Option<OsString> {
        HashMap::get(self, name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, name: &str) -> Option<OsString> {
        (**self).get(name)
    }
}

/// Looks in `primary` first, then `fallback`.
#[derive(Debug, Clone)]
pub struct Layered<A, B> {
    primary: A,
    fallback: B,
}

impl<A: EnvSource, B: EnvSource> Layered<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: EnvSource, B: EnvSource> EnvSource for Layered<A, B> {
    fn get(&self, name: &str) -> Option<OsString> {
        self.primary.get(name).or_else(|| self.fallback.get(name))
    }
}

/// A dotenv-format settings file, parsed into memory.
///
/// The values are never exported into the process environment; layer it
/// under [`ProcessEnv`] with [`Layered`] instead.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    path: PathBuf,
    vars: HashMap<String, String>,
}

impl EnvFile {
    /// Parses `path`. A file that does not exist yields an empty set.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            debug!("Settings file {} not found, skipping", path.display());
            return Ok(Self {
                path,
                vars: HashMap::new(),
            });
        }

        let iter = dotenvy::from_path_iter(&path).map_err(|source| KeycheckError::EnvFile {
            path: path.clone(),
            source,
        })?;

        let mut vars = HashMap::new();
        for item in iter {
            let (name, value) = item.map_err(|source| KeycheckError::EnvFile {
                path: path.clone(),
                source,
            })?;
            vars.insert(name, value);
        }

        debug!("Loaded {} entries from {}", vars.len(), path.display());

        Ok(Self { path, vars })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for EnvFile {
    fn get(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).map(OsString::from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub key_name: String,
    pub api_key: Option<OsString>,
}

impl Config {
    /// Resolves `key_name` from `source`. An empty value counts as unset.
    pub fn from_source(key_name: impl Into<String>, source: &impl EnvSource) -> Self {
        let key_name = key_name.into();
        let api_key = source.get(&key_name).filter(|value| !value.is_empty());

        debug!(
            "{} resolved: {}",
            key_name,
            if api_key.is_some() { "present" } else { "absent" }
        );

        Self { key_name, api_key }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
