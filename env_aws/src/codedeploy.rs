use async_trait::async_trait;
use aws_sdk_codedeploy::types::{
    BundleType as SdkBundleType, RevisionLocation as SdkRevisionLocation,
    RevisionLocationType as SdkRevisionLocationType, S3Location,
};
use cd_defs::{
    BundleType, CodeDeployApi, DeploymentRequest, RevisionLocation, RevisionLocationType,
};
use log::debug;

/// `CodeDeployApi` backed by the AWS SDK.
#[derive(Clone, Debug)]
pub struct AwsCodeDeploy {
    client: aws_sdk_codedeploy::Client,
}

impl AwsCodeDeploy {
    pub fn new(client: aws_sdk_codedeploy::Client) -> Self {
        AwsCodeDeploy { client }
    }
}

fn to_sdk_revision(revision: &RevisionLocation) -> SdkRevisionLocation {
    let bundle_type = match revision.bundle_type {
        BundleType::Zip => SdkBundleType::Zip,
    };
    let revision_type = match revision.revision_type {
        RevisionLocationType::S3 => SdkRevisionLocationType::S3,
    };

    let s3_location = S3Location::builder()
        .bucket(&revision.bucket)
        .key(&revision.key)
        .bundle_type(bundle_type)
        .build();

    SdkRevisionLocation::builder()
        .revision_type(revision_type)
        .s3_location(s3_location)
        .build()
}

#[async_trait]
impl CodeDeployApi for AwsCodeDeploy {
    async fn list_applications(&self) -> Result<Vec<String>, anyhow::Error> {
        let mut applications = vec![];
        let mut next_token: Option<String> = None;
        loop {
            let resp = self
                .client
                .list_applications()
                .set_next_token(next_token)
                .send()
                .await?;
            applications.extend(resp.applications().iter().cloned());
            next_token = resp.next_token().map(|token| token.to_string());
            if next_token.is_none() {
                break;
            }
        }
        debug!("Found {} applications", applications.len());
        Ok(applications)
    }

    async fn list_deployment_groups(
        &self,
        application_name: &str,
    ) -> Result<Vec<String>, anyhow::Error> {
        let mut deployment_groups = vec![];
        let mut next_token: Option<String> = None;
        loop {
            let resp = self
                .client
                .list_deployment_groups()
                .application_name(application_name)
                .set_next_token(next_token)
                .send()
                .await?;
            deployment_groups.extend(resp.deployment_groups().iter().cloned());
            next_token = resp.next_token().map(|token| token.to_string());
            if next_token.is_none() {
                break;
            }
        }
        debug!(
            "Found {} deployment groups for {}",
            deployment_groups.len(),
            application_name
        );
        Ok(deployment_groups)
    }

    async fn register_application_revision(
        &self,
        application_name: &str,
        revision: &RevisionLocation,
    ) -> Result<String, anyhow::Error> {
        let resp = self
            .client
            .register_application_revision()
            .application_name(application_name)
            .revision(to_sdk_revision(revision))
            .send()
            .await?;
        Ok(format!("{:?}", resp))
    }

    async fn create_deployment(
        &self,
        request: &DeploymentRequest,
    ) -> Result<String, anyhow::Error> {
        let resp = self
            .client
            .create_deployment()
            .application_name(&request.application_name)
            .deployment_group_name(&request.deployment_group_name)
            .deployment_config_name(&request.deployment_config_name)
            .revision(to_sdk_revision(&request.revision))
            .send()
            .await?;
        let deployment_id = resp
            .deployment_id()
            .ok_or_else(|| anyhow::anyhow!("Deployment ID not found in response"))?;
        Ok(deployment_id.to_string())
    }
}
