use cd_defs::{
    build_revision_location, CodeDeployApi, CreateDeploymentParams, DeploymentRequest,
    EntityKind, ProgressSink, StepError,
};
use log::{debug, info};

use super::common::require;

/// Creates a deployment of an S3 bundle to an existing deployment group.
///
/// The application and deployment group are looked up before anything is created, so a
/// `StepError::Validation` guarantees that no deployment was started. Every call creates
/// a new deployment; retries are left to the caller.
pub struct DeploymentCreator<'a> {
    codedeploy: &'a dyn CodeDeployApi,
    sink: &'a dyn ProgressSink,
}

impl<'a> DeploymentCreator<'a> {
    pub fn new(codedeploy: &'a dyn CodeDeployApi, sink: &'a dyn ProgressSink) -> Self {
        DeploymentCreator { codedeploy, sink }
    }

    /// Returns the id of the created deployment.
    pub async fn create_deployment(
        &self,
        params: &CreateDeploymentParams,
    ) -> Result<String, StepError> {
        let application_name = require("applicationName", &params.application_name)?;
        let deployment_group_name =
            require("deploymentGroupName", &params.deployment_group_name)?;
        let bucket_name = require("bucketName", &params.bucket_name)?;
        let key = require("key", &params.key)?;

        self.verify_application(application_name, deployment_group_name)
            .await?;

        let request = DeploymentRequest::new(
            application_name,
            deployment_group_name,
            build_revision_location(bucket_name, key),
        );

        self.sink.write(&format!(
            "Create deployment of {} to {} from revision {}",
            request.application_name, request.deployment_group_name, request.revision
        ));

        let deployment_id = self.codedeploy.create_deployment(&request).await?;

        info!(
            "Created deployment {} of {} to {}",
            deployment_id, request.application_name, request.deployment_group_name
        );
        self.sink
            .write(&format!("Create deployment {} started.", deployment_id));

        Ok(deployment_id)
    }

    async fn verify_application(
        &self,
        application_name: &str,
        deployment_group_name: &str,
    ) -> Result<(), StepError> {
        let applications = self.codedeploy.list_applications().await?;
        if !applications.iter().any(|name| name == application_name) {
            return Err(StepError::Validation {
                kind: EntityKind::Application,
                name: application_name.to_string(),
            });
        }

        let deployment_groups = self
            .codedeploy
            .list_deployment_groups(application_name)
            .await?;
        if !deployment_groups
            .iter()
            .any(|name| name == deployment_group_name)
        {
            return Err(StepError::Validation {
                kind: EntityKind::DeploymentGroup,
                name: deployment_group_name.to_string(),
            });
        }

        debug!(
            "Verified application {} and deployment group {}",
            application_name, deployment_group_name
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{names, MockCodeDeploy, RecordingSink};
    use cd_defs::{BundleType, RevisionLocationType};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn params() -> CreateDeploymentParams {
        CreateDeploymentParams::new("my-app", "my-group", "my-bucket", "build.zip")
    }

    fn existing_app_and_group(codedeploy: &mut MockCodeDeploy) {
        codedeploy
            .expect_list_applications()
            .returning(|| Ok(names(&["other-app", "my-app"])));
        codedeploy
            .expect_list_deployment_groups()
            .withf(|application_name| application_name == "my-app")
            .returning(|_| Ok(names(&["staging", "my-group"])));
    }

    #[tokio::test]
    async fn test_create_deployment() {
        let mut codedeploy = MockCodeDeploy::new();
        existing_app_and_group(&mut codedeploy);
        codedeploy
            .expect_create_deployment()
            .withf(|request| {
                request.application_name == "my-app"
                    && request.deployment_group_name == "my-group"
                    && request.deployment_config_name == "CodeDeployDefault.OneAtATime"
                    && request.revision.bucket == "my-bucket"
                    && request.revision.key == "build.zip"
                    && request.revision.bundle_type == BundleType::Zip
                    && request.revision.revision_type == RevisionLocationType::S3
            })
            .times(1)
            .returning(|_| Ok("d-123".to_string()));
        let sink = RecordingSink::default();

        let deployment_id = DeploymentCreator::new(&codedeploy, &sink)
            .create_deployment(&params())
            .await
            .unwrap();

        assert_eq!(deployment_id, "d-123");
        assert_eq!(
            sink.lines(),
            vec![
                "Create deployment of my-app to my-group from revision s3://my-bucket/build.zip"
                    .to_string(),
                "Create deployment d-123 started.".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_deployment_rejects_missing_fields() {
        let cases: Vec<(CreateDeploymentParams, &str)> = vec![
            (
                CreateDeploymentParams {
                    application_name: None,
                    ..params()
                },
                "applicationName",
            ),
            (
                CreateDeploymentParams {
                    application_name: Some(String::new()),
                    ..params()
                },
                "applicationName",
            ),
            (
                CreateDeploymentParams {
                    deployment_group_name: None,
                    ..params()
                },
                "deploymentGroupName",
            ),
            (
                CreateDeploymentParams {
                    deployment_group_name: Some(String::new()),
                    ..params()
                },
                "deploymentGroupName",
            ),
            (
                CreateDeploymentParams {
                    bucket_name: None,
                    ..params()
                },
                "bucketName",
            ),
            (
                CreateDeploymentParams {
                    bucket_name: Some(String::new()),
                    ..params()
                },
                "bucketName",
            ),
            (
                CreateDeploymentParams {
                    key: None,
                    ..params()
                },
                "key",
            ),
            (
                CreateDeploymentParams {
                    key: Some(String::new()),
                    ..params()
                },
                "key",
            ),
        ];

        for (params, expected_field) in cases {
            let mut codedeploy = MockCodeDeploy::new();
            codedeploy.expect_list_applications().never();
            codedeploy.expect_list_deployment_groups().never();
            codedeploy.expect_create_deployment().never();
            let sink = RecordingSink::default();

            let err = DeploymentCreator::new(&codedeploy, &sink)
                .create_deployment(&params)
                .await
                .unwrap_err();

            match err {
                StepError::InvalidArgument(field) => assert_eq!(field, expected_field),
                other => panic!("Expected InvalidArgument, got {:?}", other),
            }
            assert!(sink.lines().is_empty());
        }
    }

    #[tokio::test]
    async fn test_create_deployment_unknown_application() {
        let mut codedeploy = MockCodeDeploy::new();
        codedeploy
            .expect_list_applications()
            .times(1)
            .returning(|| Ok(names(&["other-app"])));
        codedeploy.expect_list_deployment_groups().never();
        codedeploy.expect_create_deployment().never();
        let sink = RecordingSink::default();

        let err = DeploymentCreator::new(&codedeploy, &sink)
            .create_deployment(&params())
            .await
            .unwrap_err();

        match err {
            StepError::Validation { kind, name } => {
                assert_eq!(kind, EntityKind::Application);
                assert_eq!(name, "my-app");
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
        assert!(sink.lines().is_empty());
    }

    #[tokio::test]
    async fn test_create_deployment_unknown_deployment_group() {
        let mut codedeploy = MockCodeDeploy::new();
        codedeploy
            .expect_list_applications()
            .times(1)
            .returning(|| Ok(names(&["my-app"])));
        codedeploy
            .expect_list_deployment_groups()
            .times(1)
            .returning(|_| Ok(names(&["staging"])));
        codedeploy.expect_create_deployment().never();
        let sink = RecordingSink::default();

        let err = DeploymentCreator::new(&codedeploy, &sink)
            .create_deployment(&params())
            .await
            .unwrap_err();

        match err {
            StepError::Validation { kind, name } => {
                assert_eq!(kind, EntityKind::DeploymentGroup);
                assert_eq!(name, "my-group");
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
        assert!(sink.lines().is_empty());
    }

    #[tokio::test]
    async fn test_create_deployment_listing_failure_is_remote_error() {
        let mut codedeploy = MockCodeDeploy::new();
        codedeploy
            .expect_list_applications()
            .returning(|| Err(anyhow::anyhow!("AccessDeniedException")));
        codedeploy.expect_create_deployment().never();
        let sink = RecordingSink::default();

        let err = DeploymentCreator::new(&codedeploy, &sink)
            .create_deployment(&params())
            .await
            .unwrap_err();

        assert!(matches!(err, StepError::RemoteService(_)));
        assert!(!err.is_misconfiguration());
    }

    #[tokio::test]
    async fn test_create_deployment_is_not_deduplicated() {
        let mut codedeploy = MockCodeDeploy::new();
        existing_app_and_group(&mut codedeploy);
        let created = AtomicUsize::new(0);
        codedeploy
            .expect_create_deployment()
            .times(2)
            .returning(move |_| {
                let n = created.fetch_add(1, Ordering::SeqCst) + 1;
                Ok(format!("d-{}", n))
            });
        let sink = RecordingSink::default();
        let creator = DeploymentCreator::new(&codedeploy, &sink);

        let first = creator.create_deployment(&params()).await.unwrap();
        let second = creator.create_deployment(&params()).await.unwrap();

        assert_eq!(first, "d-1");
        assert_eq!(second, "d-2");
        assert_eq!(sink.lines().len(), 4);
    }
}
