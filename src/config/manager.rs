//! Credential storage on top of the config file.

use std::path::{Path, PathBuf};

use crate::config::loader::Config;
use crate::credentials::{email_from_auth_string, CredentialEntry};
use crate::error::{Error, Result};

/// Owns a loaded config and the path it is persisted to.
#[derive(Debug)]
pub struct ConfigManager {
    path: PathBuf,
    config: Config,
}

impl ConfigManager {
    /// Load the config from `path`, or from the default location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Config::default_path()?,
        };
        let config = Config::load(&path)?;
        Ok(Self { path, config })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    /// Every stored credential with the email it parses to.
    pub fn entries(&self) -> Vec<CredentialEntry> {
        self.config
            .credentials
            .iter()
            .map(|auth| CredentialEntry::from_auth_string(auth))
            .collect()
    }

    /// Emails of all valid credentials, in stored order.
    pub fn emails(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(CredentialEntry::into_email)
            .collect()
    }

    /// Store a new credential and make it the active one.
    pub fn add_credentials(&mut self, auth: &str) -> Result<String> {
        let auth = auth.trim();
        let email = email_from_auth_string(auth)?;

        if self.emails().iter().any(|e| e == &email) {
            return Err(Error::CredentialExists(email));
        }

        self.config.credentials.push(auth.to_string());
        self.config.selected = email.clone();
        self.save()?;

        tracing::debug!("Added credentials for {}", email);
        Ok(email)
    }

    /// Remove every credential stored for `email`.
    pub fn remove_credentials(&mut self, email: &str) -> Result<()> {
        let before = self.config.credentials.len();
        self.config.credentials.retain(|auth| {
            CredentialEntry::from_auth_string(auth).email() != Some(email)
        });

        if self.config.credentials.len() == before {
            return Err(Error::CredentialNotFound(email.to_string()));
        }

        if self.config.selected == email {
            self.config.selected = self.emails().into_iter().next().unwrap_or_default();
        }

        self.save()?;
        tracing::debug!("Removed credentials for {}", email);
        Ok(())
    }

    /// Make `email` the active credential.
    pub fn set_selected(&mut self, email: &str) -> Result<()> {
        if !self.emails().iter().any(|e| e == email) {
            return Err(Error::CredentialNotFound(email.to_string()));
        }

        self.config.selected = email.to_string();
        self.save()
    }

    fn save(&self) -> Result<()> {
        self.config.save(&self.path)
    }
}
