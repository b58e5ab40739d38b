use async_trait::async_trait;

use crate::{DeploymentRequest, RevisionLocation};

/// The four CodeDeploy operations the workflows rely on.
///
/// Listings must return every name known to the service, whatever paging the
/// implementation needs to get there.
#[async_trait]
pub trait CodeDeployApi: Send + Sync {
    async fn list_applications(&self) -> Result<Vec<String>, anyhow::Error>;
    async fn list_deployment_groups(
        &self,
        application_name: &str,
    ) -> Result<Vec<String>, anyhow::Error>;
    /// Returns a printable description of the service response.
    async fn register_application_revision(
        &self,
        application_name: &str,
        revision: &RevisionLocation,
    ) -> Result<String, anyhow::Error>;
    /// Returns the id of the created deployment.
    async fn create_deployment(&self, request: &DeploymentRequest)
        -> Result<String, anyhow::Error>;
}

/// Sink for human-readable progress lines.
pub trait ProgressSink: Send + Sync {
    fn write(&self, line: &str);
}
