use std::sync::Mutex;

use async_trait::async_trait;
use cd_defs::{CodeDeployApi, DeploymentRequest, ProgressSink, RevisionLocation};
use mockall::mock;

mock! {
    pub CodeDeploy {}

    #[async_trait]
    impl CodeDeployApi for CodeDeploy {
        async fn list_applications(&self) -> Result<Vec<String>, anyhow::Error>;
        async fn list_deployment_groups(
            &self,
            application_name: &str,
        ) -> Result<Vec<String>, anyhow::Error>;
        async fn register_application_revision(
            &self,
            application_name: &str,
            revision: &RevisionLocation,
        ) -> Result<String, anyhow::Error>;
        async fn create_deployment(
            &self,
            request: &DeploymentRequest,
        ) -> Result<String, anyhow::Error>;
    }
}

/// Sink that keeps every progress line for later inspection.
#[derive(Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingSink {
    fn write(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

pub fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
