//! Dispatch errors

use roost_profile::ActionKey;
use thiserror::Error;

/// Failure reported by a relationship transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server refused the request
    #[error("request rejected: {0}")]
    Rejected(String),
    /// The request never reached the server or the reply was lost
    #[error("network failure: {0}")]
    Network(String),
}

impl TransportError {
    /// Create a rejection error
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Create a network error
    pub fn network(reason: impl Into<String>) -> Self {
        Self::Network(reason.into())
    }
}

/// Errors returned by the action gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The action does not write any relationship field
    #[error("action {0} does not change a relationship")]
    NotRelational(ActionKey),

    /// Another request for the same relationship field is still running
    #[error("a request for this relationship field is already in flight")]
    InFlight,

    /// The transport failed; local state was rolled back
    #[error("transport failed: {0}")]
    Transport(String),

    /// No signed-in viewer to act as
    #[error("viewer is signed out")]
    SignedOut,
}

impl From<TransportError> for DispatchError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result alias for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_converts() {
        let err: DispatchError = TransportError::rejected("rate limited").into();
        assert_eq!(err, DispatchError::Transport("request rejected: rate limited".into()));
    }

    #[test]
    fn test_not_relational_display() {
        let err = DispatchError::NotRelational(ActionKey::Report);
        assert_eq!(err.to_string(), "action account.report does not change a relationship");
    }
}
