use std::fmt;

use thiserror::Error;

/// Remote entity whose existence is checked before a deployment is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Application,
    DeploymentGroup,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Application => write!(f, "application"),
            EntityKind::DeploymentGroup => write!(f, "deployment group"),
        }
    }
}

#[derive(Error, Debug)]
pub enum StepError {
    #[error("{0} must not be null or empty")]
    InvalidArgument(&'static str),

    #[error("Cannot find {kind} named '{name}'")]
    Validation { kind: EntityKind, name: String },

    #[error("Request to CodeDeploy failed: {0}")]
    RemoteService(#[from] anyhow::Error),

    #[error("Region '{0}' does not belong to any known partition")]
    UnknownRegion(String),

    #[error("No step registered with function name '{0}'")]
    UnknownStep(String),

    #[error("Invalid step parameters: {0}")]
    InvalidParameters(String),
}

impl StepError {
    /// True for errors caused by the caller's input or configuration rather than by the
    /// remote service being unavailable.
    pub fn is_misconfiguration(&self) -> bool {
        !matches!(self, StepError::RemoteService(_))
    }
}
