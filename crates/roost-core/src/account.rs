//! Profile subject records
//!
//! `Account` is the pre-fetched record of the profile being viewed. It is
//! supplied read-only per render and never mutated by the engine.

use crate::errors::CoreError;
use crate::identifiers::AccountId;
use serde::{Deserialize, Serialize};

/// The profile subject as delivered by the account store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account id
    pub id: AccountId,
    /// Local part of the handle
    pub username: String,
    /// `username` for local accounts, `username@domain` for remote ones
    pub acct: String,
    /// Display name, possibly blank
    #[serde(default)]
    pub display_name: String,
    /// Canonical profile URL on the origin server
    #[serde(default)]
    pub url: Option<String>,
    /// Follow requests require manual approval
    #[serde(default)]
    pub locked: bool,
    /// Automated account
    #[serde(default)]
    pub bot: bool,
    /// Group actor
    #[serde(default)]
    pub group: bool,
    /// Suspended by moderators
    #[serde(default)]
    pub suspended: bool,
    /// Target account id if the subject has moved
    #[serde(default)]
    pub moved: Option<AccountId>,
    /// Opted out of search engine indexing
    #[serde(default)]
    pub noindex: bool,
    /// Memorialized account
    #[serde(default)]
    pub memorial: bool,
}

impl Account {
    /// Create an active local account with every optional field cleared.
    pub fn local(id: impl Into<AccountId>, username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            id: id.into(),
            acct: username.clone(),
            username,
            display_name: String::new(),
            url: None,
            locked: false,
            bot: false,
            group: false,
            suspended: false,
            moved: None,
            noindex: false,
            memorial: false,
        }
    }

    /// Create an active remote account (`username@domain`).
    pub fn remote(
        id: impl Into<AccountId>,
        username: impl Into<String>,
        domain: impl AsRef<str>,
    ) -> Self {
        let mut account = Self::local(id, username);
        account.acct = format!("{}@{}", account.username, domain.as_ref());
        account
    }

    /// Tagged view of the suspension and move fields.
    pub fn state(&self) -> AccountState {
        match (self.suspended, &self.moved) {
            (false, None) => AccountState::Active,
            (true, None) => AccountState::Suspended,
            (false, Some(target)) => AccountState::Moved(target.clone()),
            (true, Some(target)) => AccountState::SuspendedAndMoved(target.clone()),
        }
    }

    /// Parse the acct handle.
    pub fn parsed_acct(&self) -> Result<Acct, CoreError> {
        Acct::parse(&self.acct)
    }

    /// Whether the handle carries a domain segment at all, parseable or not.
    pub fn has_domain_segment(&self) -> bool {
        self.acct.contains('@')
    }
}

/// Account lifecycle state.
///
/// The stored record keeps `suspended` and `moved` as independent fields, so
/// both may hold at once; that combination has its own variant rather than
/// being folded into either.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "target", rename_all = "snake_case")]
pub enum AccountState {
    /// Neither suspended nor moved
    Active,
    /// Suspended by moderators
    Suspended,
    /// Moved to the target account
    Moved(AccountId),
    /// Suspended after (or while) moving to the target account
    SuspendedAndMoved(AccountId),
}

impl AccountState {
    /// Check if the account is suspended.
    pub fn is_suspended(&self) -> bool {
        matches!(self, Self::Suspended | Self::SuspendedAndMoved(_))
    }

    /// The move target, if any.
    pub fn moved_to(&self) -> Option<&AccountId> {
        match self {
            Self::Moved(target) | Self::SuspendedAndMoved(target) => Some(target),
            Self::Active | Self::Suspended => None,
        }
    }

    /// Check if the account is suspended or moved.
    pub fn is_suspended_or_moved(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// A parsed `username[@domain]` handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Acct {
    /// Local part
    pub username: String,
    /// Domain part, absent for local handles
    pub domain: Option<String>,
}

impl Acct {
    /// Split a handle into username and optional domain.
    ///
    /// Rejects empty usernames, more than one `@`, and domains that are
    /// empty, contain whitespace, `/` or `@`, or start or end with `.`.
    pub fn parse(acct: &str) -> Result<Self, CoreError> {
        let mut parts = acct.splitn(2, '@');
        let username = parts.next().unwrap_or_default();

        if username.is_empty() {
            return Err(CoreError::invalid_acct(acct, "empty username"));
        }
        if username.chars().any(char::is_whitespace) {
            return Err(CoreError::invalid_acct(acct, "whitespace in username"));
        }

        let domain = match parts.next() {
            None => None,
            Some(domain) => {
                validate_domain(domain).map_err(|reason| CoreError::invalid_acct(acct, reason))?;
                Some(domain.to_string())
            }
        };

        Ok(Self {
            username: username.to_string(),
            domain,
        })
    }

    /// Check if the handle names an account on a server other than `local_domain`.
    pub fn is_remote_for(&self, local_domain: &str) -> bool {
        self.domain
            .as_deref()
            .map(|domain| !domain.eq_ignore_ascii_case(local_domain))
            .unwrap_or(false)
    }

    /// Fully qualified handle, filling in `local_domain` for local accounts.
    pub fn qualified(&self, local_domain: &str) -> String {
        format!(
            "{}@{}",
            self.username,
            self.domain.as_deref().unwrap_or(local_domain)
        )
    }
}

/// Check that a domain segment is usable as a link or admin path target.
pub fn validate_domain(domain: &str) -> Result<(), &'static str> {
    if domain.is_empty() {
        return Err("empty domain");
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return Err("domain starts or ends with a dot");
    }
    if domain
        .chars()
        .any(|c| c.is_whitespace() || c == '/' || c == '@' || c == '?' || c == '#')
    {
        return Err("illegal character in domain");
    }
    Ok(())
}
