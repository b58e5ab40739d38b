mod registry;
mod sink;
mod steps;

pub use registry::{default_registry, StepRegistry};
pub use sink::ConsoleSink;
pub use steps::{
    CreateDeploymentStep, RegisterRevisionStep, CREATE_DEPLOYMENT_STEP, REGISTER_REVISION_STEP,
};
