use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::StepError;

/// Static metadata describing how a step is invoked from a pipeline.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct StepDescriptor {
    pub function_name: &'static str,
    pub display_name: &'static str,
    pub parameters: &'static [&'static str],
}

#[async_trait]
pub trait StepHandler: Send + Sync {
    fn descriptor(&self) -> &StepDescriptor;
    async fn execute(&self, params: &Value) -> Result<String, StepError>;
}
