mod deployment;
mod errors;
mod provider;
mod revision;
mod step;

pub use deployment::{
    CreateDeploymentParams, DeploymentRequest, RegisterRevisionParams, RevisionRegistration,
    DEFAULT_DEPLOYMENT_CONFIG_NAME,
};
pub use errors::{EntityKind, StepError};
pub use provider::{CodeDeployApi, ProgressSink};
pub use revision::{build_revision_location, BundleType, RevisionLocation, RevisionLocationType};
pub use step::{StepDescriptor, StepHandler};
