use std::collections::BTreeMap;
use std::sync::Arc;

use cd_defs::{CodeDeployApi, ProgressSink, StepDescriptor, StepError, StepHandler};
use log::debug;
use serde_json::Value;

use super::steps::{CreateDeploymentStep, RegisterRevisionStep};

/// Maps pipeline function names to their handlers.
#[derive(Default)]
pub struct StepRegistry {
    steps: BTreeMap<&'static str, Box<dyn StepHandler>>,
}

impl StepRegistry {
    pub fn new() -> Self {
        StepRegistry::default()
    }

    /// Adds `handler` under its function name, replacing any handler already there.
    pub fn register(&mut self, handler: Box<dyn StepHandler>) {
        let function_name = handler.descriptor().function_name;
        debug!("Registering step {}", function_name);
        self.steps.insert(function_name, handler);
    }

    pub fn get(&self, function_name: &str) -> Option<&dyn StepHandler> {
        self.steps.get(function_name).map(|handler| handler.as_ref())
    }

    pub fn descriptors(&self) -> Vec<&StepDescriptor> {
        self.steps
            .values()
            .map(|handler| handler.descriptor())
            .collect()
    }

    pub async fn execute(&self, function_name: &str, params: &Value) -> Result<String, StepError> {
        let handler = self
            .get(function_name)
            .ok_or_else(|| StepError::UnknownStep(function_name.to_string()))?;
        debug!("Executing step {}", function_name);
        handler.execute(params).await
    }
}

/// Registry holding both CodeDeploy steps, sharing one client and one sink.
pub fn default_registry(
    codedeploy: Arc<dyn CodeDeployApi>,
    sink: Arc<dyn ProgressSink>,
) -> StepRegistry {
    let mut registry = StepRegistry::new();
    registry.register(Box::new(CreateDeploymentStep::new(
        codedeploy.clone(),
        sink.clone(),
    )));
    registry.register(Box::new(RegisterRevisionStep::new(codedeploy, sink)));
    registry
}
