use thiserror::Error;

/// Failures the strategy surfaces to its driver.
///
/// Carried inside `anyhow::Error` at the API seams; callers that need to
/// branch on the kind can `downcast_ref::<NegotiationError>()`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NegotiationError {
    #[error("maximum utility bid unavailable: {0}")]
    MaxBidUnavailable(String),

    #[error("no free opponent slot for sender {0}; at most two opponents are tracked")]
    TooManyOpponents(String),

    #[error("issue {0} has no values to offer")]
    EmptyIssue(String),

    #[error("invalid scenario: {0}")]
    Scenario(String),

    #[error("{0} accepted with no offer on the table")]
    NothingToAccept(String),
}
