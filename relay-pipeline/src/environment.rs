//! Env-file discovery and read-only variable lookup.
//!
//! Values come from one `KEY=VALUE` file and fall back to the process
//! environment. Nothing here writes to the process environment.

use crate::error::{PipelineError, Result};
use relay_model::StaticCredentials;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const ENV_FILE_NAME: &str = ".env";
/// Parent directories searched above the working directory.
pub const MAX_PARENT_SEARCH: usize = 3;
pub const DEFAULT_REGION: &str = "us-east-1";

pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub const AWS_REGION: &str = "AWS_REGION";

/// A parsed env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    path: PathBuf,
    vars: HashMap<String, String>,
    skipped: Vec<String>,
}

impl EnvFile {
    /// Parse `path`. Lines that fail to parse are skipped and kept in [`EnvFile::skipped`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let iter = dotenvy::from_path_iter(path).map_err(|e| {
            PipelineError::config(format!("cannot read env file {}: {e}", path.display()))
        })?;

        let mut vars = HashMap::new();
        let mut skipped = Vec::new();
        for item in iter {
            match item {
                Ok((key, value)) => {
                    vars.insert(key, value);
                }
                Err(e) => skipped.push(e.to_string()),
            }
        }

        debug!(
            path = %path.display(),
            keys = vars.len(),
            skipped = skipped.len(),
            "env file loaded"
        );
        Ok(Self { path: path.to_path_buf(), vars, skipped })
    }

    /// Paths tried by [`EnvFile::discover`], in order.
    pub fn candidates(explicit: Option<&Path>, cwd: &Path) -> Vec<PathBuf> {
        if let Some(path) = explicit {
            return vec![path.to_path_buf()];
        }
        cwd.ancestors().take(MAX_PARENT_SEARCH + 1).map(|dir| dir.join(ENV_FILE_NAME)).collect()
    }

    /// Find and load the env file.
    ///
    /// An explicit path must exist. Without one, the first `.env` found in
    /// `cwd` or its nearest three parents is used, and finding none is not an
    /// error.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Option<Self>> {
        if let Some(path) = explicit {
            if !path.is_file() {
                let message = format!("env file {} does not exist", path.display());
                return Err(PipelineError::config(message));
            }
            return Self::load(path).map(Some);
        }

        for candidate in Self::candidates(None, cwd) {
            if candidate.is_file() {
                return Self::load(&candidate).map(Some);
            }
        }
        Ok(None)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Parse errors of the lines that were skipped.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Log one warning per skipped line. Call once logging is installed.
    pub fn warn_skipped(&self) {
        for error in &self.skipped {
            warn!(path = %self.path.display(), %error, "skipping malformed env file line");
        }
    }
}

/// Read-only view over the env file and a snapshot of the process environment.
///
/// Empty values count as unset.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    file: Option<EnvFile>,
    process: HashMap<String, String>,
    searched: Vec<PathBuf>,
}

impl Environment {
    /// Discover the env file and snapshot the process environment.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let searched = EnvFile::candidates(explicit, cwd);
        let file = EnvFile::discover(explicit, cwd)?;
        Ok(Self { file, process: std::env::vars().collect(), searched })
    }

    /// Build from explicit parts.
    pub fn from_parts(file: Option<EnvFile>, process: HashMap<String, String>) -> Self {
        let searched = file.iter().map(|f| f.path().to_path_buf()).collect();
        Self { file, process, searched }
    }

    /// Value of `key`: env file first, then the process environment.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.file
            .as_ref()
            .and_then(|f| f.get(key))
            .filter(|v| !v.is_empty())
            .or_else(|| self.process.get(key).map(String::as_str).filter(|v| !v.is_empty()))
    }

    pub fn file(&self) -> Option<&EnvFile> {
        self.file.as_ref()
    }

    pub fn searched(&self) -> &[PathBuf] {
        &self.searched
    }
}

/// Region and credentials for the Bedrock client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsSettings {
    pub region: String,
    pub credentials: StaticCredentials,
}

impl AwsSettings {
    /// Read region and credentials. The key pair is required.
    pub fn from_environment(env: &Environment) -> Result<Self> {
        let region = resolve_region(env);

        let (Some(access_key_id), Some(secret_access_key)) =
            (env.get(AWS_ACCESS_KEY_ID), env.get(AWS_SECRET_ACCESS_KEY))
        else {
            return Err(PipelineError::MissingCredentials { searched: env.searched().to_vec() });
        };

        let mut credentials = StaticCredentials::new(access_key_id, secret_access_key);
        if let Some(token) = env.get(AWS_SESSION_TOKEN) {
            credentials = credentials.with_session_token(token);
        }

        Ok(Self { region, credentials })
    }
}

/// `AWS_DEFAULT_REGION`, then `AWS_REGION`, then `us-east-1`.
pub fn resolve_region(env: &Environment) -> String {
    env.get(AWS_DEFAULT_REGION)
        .or_else(|| env.get(AWS_REGION))
        .unwrap_or(DEFAULT_REGION)
        .to_string()
}
