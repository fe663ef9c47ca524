use thiserror::Error;

/// Failures the core can surface to the presentation shell.
///
/// The variants are deliberately distinct: "no credential", "provider call
/// failed", "no event for this team" each need different user remediation,
/// so they must never collapse into one generic message.
#[derive(Debug, Error)]
pub enum EdgeError {
    #[error("no odds API key configured; set ODDS_API_KEY or pass --api-key")]
    MissingCredential,

    #[error("odds API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("odds API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("failed to decode odds API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no upcoming event found for {team}")]
    NoMatchingEvent { team: String },
}

pub type Result<T> = std::result::Result<T, EdgeError>;
