use std::sync::Arc;

use async_trait::async_trait;
use cd_defs::{
    CodeDeployApi, CreateDeploymentParams, ProgressSink, RegisterRevisionParams, StepDescriptor,
    StepError, StepHandler,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::logic::{DeploymentCreator, RevisionRegistrar};

pub const CREATE_DEPLOYMENT_STEP: StepDescriptor = StepDescriptor {
    function_name: "cdCreateDeployment",
    display_name: "Create a deployment of an application to a deployment group",
    parameters: &["applicationName", "deploymentGroupName", "bucketName", "key"],
};

pub const REGISTER_REVISION_STEP: StepDescriptor = StepDescriptor {
    function_name: "cdRegisterRevision",
    display_name: "Register a revision of an application from S3",
    parameters: &["applicationName", "bucketName", "key"],
};

fn parse_params<T: DeserializeOwned>(params: &Value) -> Result<T, StepError> {
    if !params.is_object() {
        return Err(StepError::InvalidParameters(format!(
            "expected a JSON object, got {}",
            params
        )));
    }
    serde_json::from_value(params.clone())
        .map_err(|e| StepError::InvalidParameters(e.to_string()))
}

pub struct CreateDeploymentStep {
    codedeploy: Arc<dyn CodeDeployApi>,
    sink: Arc<dyn ProgressSink>,
}

impl CreateDeploymentStep {
    pub fn new(codedeploy: Arc<dyn CodeDeployApi>, sink: Arc<dyn ProgressSink>) -> Self {
        CreateDeploymentStep { codedeploy, sink }
    }
}

#[async_trait]
impl StepHandler for CreateDeploymentStep {
    fn descriptor(&self) -> &StepDescriptor {
        &CREATE_DEPLOYMENT_STEP
    }

    async fn execute(&self, params: &Value) -> Result<String, StepError> {
        let params: CreateDeploymentParams = parse_params(params)?;
        DeploymentCreator::new(self.codedeploy.as_ref(), self.sink.as_ref())
            .create_deployment(&params)
            .await
    }
}

pub struct RegisterRevisionStep {
    codedeploy: Arc<dyn CodeDeployApi>,
    sink: Arc<dyn ProgressSink>,
}

impl RegisterRevisionStep {
    pub fn new(codedeploy: Arc<dyn CodeDeployApi>, sink: Arc<dyn ProgressSink>) -> Self {
        RegisterRevisionStep { codedeploy, sink }
    }
}

#[async_trait]
impl StepHandler for RegisterRevisionStep {
    fn descriptor(&self) -> &StepDescriptor {
        &REGISTER_REVISION_STEP
    }

    async fn execute(&self, params: &Value) -> Result<String, StepError> {
        let params: RegisterRevisionParams = parse_params(params)?;
        RevisionRegistrar::new(self.codedeploy.as_ref(), self.sink.as_ref())
            .register(&params)
            .await
    }
}
