mod common;
mod create_deployment;
mod register_revision;

pub use create_deployment::DeploymentCreator;
pub use register_revision::RevisionRegistrar;
