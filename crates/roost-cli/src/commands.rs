//! Command implementations

use anyhow::{Context, Result};
use roost_core::{Account, ProfileConfig, Relationship, RelationshipState, Session};
use roost_profile::{DefaultRowAction, ProfileEngine, ProfileInput};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// JSON files describing one render.
#[derive(Debug, Clone, Default)]
pub struct InputFiles {
    /// Subject account record
    pub account: PathBuf,
    /// Viewer → subject relationship; absent means not loaded
    pub relationship: Option<PathBuf>,
    /// Viewer session; absent means anonymous
    pub session: Option<PathBuf>,
    /// Treat the subject as hidden
    pub hidden: bool,
}

/// Load the engine configuration.
///
/// A missing file yields the defaults. Environment overrides are applied
/// afterwards and the result is validated.
pub fn load_config(path: &Path) -> Result<ProfileConfig> {
    let mut config = if path.exists() {
        ProfileConfig::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        ProfileConfig::default()
    };
    config.merge_with_env();
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Assemble a `ProfileInput` from its JSON files.
pub fn load_input(files: &InputFiles) -> Result<ProfileInput> {
    let account: Account = read_json(&files.account)?;
    let relationship = match &files.relationship {
        Some(path) => RelationshipState::Loaded(read_json::<Relationship>(path)?),
        None => RelationshipState::Unknown,
    };
    let session = match &files.session {
        Some(path) => read_json(path)?,
        None => Session::anonymous(),
    };
    Ok(ProfileInput {
        account,
        relationship,
        session,
        hidden: files.hidden,
    })
}

/// Render the full decision as pretty JSON.
pub fn decide(config: ProfileConfig, files: &InputFiles) -> Result<String> {
    let input = load_input(files)?;
    let decision = ProfileEngine::new(config).decide(&input);
    serde_json::to_string_pretty(&decision).context("failed to serialize decision")
}

/// Render the row controls as pretty JSON.
pub fn row(config: ProfileConfig, files: &InputFiles, default_action: DefaultRowAction) -> Result<String> {
    let input = load_input(files)?;
    let controls = ProfileEngine::new(config).row(&input, default_action);
    serde_json::to_string_pretty(&controls).context("failed to serialize row controls")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn json_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_relationship_is_unknown() {
        let account = json_file(r#"{"id":"1","username":"alice","acct":"alice"}"#);
        let files = InputFiles {
            account: account.path().to_path_buf(),
            ..InputFiles::default()
        };
        let input = load_input(&files).unwrap();
        assert_eq!(input.relationship, RelationshipState::Unknown);
        assert!(!input.session.signed_in);
    }

    #[test]
    fn test_unreadable_account_names_the_file() {
        let files = InputFiles {
            account: PathBuf::from("/nonexistent/account.json"),
            ..InputFiles::default()
        };
        let err = load_input(&files).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/account.json"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let account = json_file("{not json");
        let files = InputFiles {
            account: account.path().to_path_buf(),
            ..InputFiles::default()
        };
        assert!(load_input(&files).is_err());
    }
}
