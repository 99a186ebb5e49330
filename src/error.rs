use thiserror::Error;

use crate::compliance::ComplianceError;
use crate::source::SourceError;

/// Terminal failures of a check run. Each one maps to exit status 1.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{0}")]
    Config(String),

    #[error("Could not determine namespace: {0}")]
    Resolution(#[source] SourceError),

    #[error("Could not read file from branch: {0}")]
    Retrieval(#[source] SourceError),

    #[error(transparent)]
    Compliance(#[from] ComplianceError),
}
