use serde::{Deserialize, Serialize};

use crate::RevisionLocation;

/// Rollout policy used for every deployment: one host at a time.
pub const DEFAULT_DEPLOYMENT_CONFIG_NAME: &str = "CodeDeployDefault.OneAtATime";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DeploymentRequest {
    pub application_name: String,
    pub deployment_group_name: String,
    pub deployment_config_name: String,
    pub revision: RevisionLocation,
}

impl DeploymentRequest {
    pub fn new(
        application_name: &str,
        deployment_group_name: &str,
        revision: RevisionLocation,
    ) -> Self {
        DeploymentRequest {
            application_name: application_name.to_string(),
            deployment_group_name: deployment_group_name.to_string(),
            deployment_config_name: DEFAULT_DEPLOYMENT_CONFIG_NAME.to_string(),
            revision,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RevisionRegistration {
    pub application_name: String,
    pub revision: RevisionLocation,
}

/// Parameters of the `cdCreateDeployment` step. Missing values deserialize to `None`
/// and are rejected by the workflow, not by serde.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeploymentParams {
    #[serde(default)]
    pub application_name: Option<String>,
    #[serde(default)]
    pub deployment_group_name: Option<String>,
    #[serde(default)]
    pub bucket_name: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

impl CreateDeploymentParams {
    pub fn new(
        application_name: &str,
        deployment_group_name: &str,
        bucket_name: &str,
        key: &str,
    ) -> Self {
        CreateDeploymentParams {
            application_name: Some(application_name.to_string()),
            deployment_group_name: Some(deployment_group_name.to_string()),
            bucket_name: Some(bucket_name.to_string()),
            key: Some(key.to_string()),
        }
    }
}

/// Parameters of the `cdRegisterRevision` step.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRevisionParams {
    #[serde(default)]
    pub application_name: Option<String>,
    #[serde(default)]
    pub bucket_name: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

impl RegisterRevisionParams {
    pub fn new(application_name: &str, bucket_name: &str, key: &str) -> Self {
        RegisterRevisionParams {
            application_name: Some(application_name.to_string()),
            bucket_name: Some(bucket_name.to_string()),
            key: Some(key.to_string()),
        }
    }
}
