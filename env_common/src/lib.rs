mod interface;
mod logic;

pub use interface::{
    default_registry, ConsoleSink, CreateDeploymentStep, RegisterRevisionStep, StepRegistry,
    CREATE_DEPLOYMENT_STEP, REGISTER_REVISION_STEP,
};
pub use logic::{DeploymentCreator, RevisionRegistrar};

#[cfg(test)]
pub(crate) mod test_support;
