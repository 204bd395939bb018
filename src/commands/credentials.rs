//! `credentials` / `creds` subcommands.

use std::path::Path;

use crate::cli::CredentialsCommand;
use crate::config::ConfigManager;
use crate::credentials::{match_email, CredentialEntry};
use crate::error::{Result, ResultExt};
use crate::output::{print_info, print_success};

/// Run a credentials subcommand against the config at `config_path`.
pub fn run(command: CredentialsCommand, config_path: Option<&Path>) -> Result<()> {
    let mut manager = ConfigManager::load(config_path).context("failed to load config")?;

    match command {
        CredentialsCommand::Add { auth_string } => {
            manager
                .add_credentials(&auth_string)
                .context("failed to add credentials")?;
            print_success("Credentials added successfully");
        }
        CredentialsCommand::Remove { email } => {
            manager
                .remove_credentials(&email)
                .context("failed to remove credentials")?;
            print_success(&format!("Credentials for {} removed successfully", email));
        }
        CredentialsCommand::List => {
            for line in list_lines(&manager) {
                print_info(&line);
            }
        }
        CredentialsCommand::Set { email } => {
            let matched = select(&mut manager, &email)?;
            print_success(&format!("Active credential set to {}", matched));
        }
    }

    Ok(())
}

/// Resolve `query` to one stored email and make it active.
pub fn select(manager: &mut ConfigManager, query: &str) -> Result<String> {
    let matched = match_email(&manager.emails(), query)?;
    manager
        .set_selected(&matched)
        .context("failed to save config")?;
    Ok(matched)
}

/// Lines printed by `creds list`.
pub fn list_lines(manager: &ConfigManager) -> Vec<String> {
    let entries = manager.entries();
    if entries.is_empty() {
        return vec!["No credentials found".to_string()];
    }

    let selected = &manager.config().selected;
    let mut lines = vec!["Credentials:".to_string()];

    for (i, entry) in entries.iter().enumerate() {
        match entry {
            CredentialEntry::Valid { email } => {
                let marker = if email == selected { "*" } else { " " };
                lines.push(format!("  {} {}", marker, email));
            }
            CredentialEntry::Invalid => {
                lines.push(format!("  {}. [Invalid credential]", i + 1));
            }
        }
    }

    if !selected.is_empty() {
        lines.push(String::new());
        lines.push("* = active".to_string());
    }
    lines.push(String::new());
    lines.push(
        "Use 'gotohp creds set <email>' to change active account (supports partial matching)"
            .to_string(),
    );

    lines
}
