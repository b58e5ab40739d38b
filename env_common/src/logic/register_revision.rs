use cd_defs::{
    build_revision_location, CodeDeployApi, ProgressSink, RegisterRevisionParams,
    RevisionRegistration, StepError,
};
use log::info;

use super::common::require;

/// Registers an S3 bundle as a revision of an application.
///
/// The application is not looked up first; CodeDeploy rejects unknown applications itself.
pub struct RevisionRegistrar<'a> {
    codedeploy: &'a dyn CodeDeployApi,
    sink: &'a dyn ProgressSink,
}

impl<'a> RevisionRegistrar<'a> {
    pub fn new(codedeploy: &'a dyn CodeDeployApi, sink: &'a dyn ProgressSink) -> Self {
        RevisionRegistrar { codedeploy, sink }
    }

    pub async fn register(&self, params: &RegisterRevisionParams) -> Result<String, StepError> {
        let application_name = require("applicationName", &params.application_name)?;
        let bucket_name = require("bucketName", &params.bucket_name)?;
        let key = require("key", &params.key)?;

        let registration = RevisionRegistration {
            application_name: application_name.to_string(),
            revision: build_revision_location(bucket_name, key),
        };

        self.sink.write(&format!(
            "Register revision for {} from revision {}",
            registration.application_name, registration.revision
        ));

        let result = self
            .codedeploy
            .register_application_revision(&registration.application_name, &registration.revision)
            .await?;

        info!(
            "Registered {} for application {}",
            registration.revision, registration.application_name
        );
        self.sink.write("Register revision done.");

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockCodeDeploy, RecordingSink};
    use cd_defs::BundleType;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_register_revision() {
        let mut codedeploy = MockCodeDeploy::new();
        codedeploy.expect_list_applications().never();
        codedeploy.expect_list_deployment_groups().never();
        codedeploy
            .expect_register_application_revision()
            .withf(|application_name, revision| {
                application_name == "my-app"
                    && revision.bucket == "my-bucket"
                    && revision.key == "v1.zip"
                    && revision.bundle_type == BundleType::Zip
            })
            .times(1)
            .returning(|_, _| Ok("RegisterApplicationRevisionOutput { _request_id: None }".to_string()));
        let sink = RecordingSink::default();

        let result = RevisionRegistrar::new(&codedeploy, &sink)
            .register(&RegisterRevisionParams::new("my-app", "my-bucket", "v1.zip"))
            .await
            .unwrap();

        assert_eq!(
            result,
            "RegisterApplicationRevisionOutput { _request_id: None }"
        );
        assert_eq!(
            sink.lines(),
            vec![
                "Register revision for my-app from revision s3://my-bucket/v1.zip".to_string(),
                "Register revision done.".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_register_revision_rejects_missing_fields() {
        let cases = [
            (
                RegisterRevisionParams {
                    application_name: None,
                    ..RegisterRevisionParams::new("my-app", "my-bucket", "v1.zip")
                },
                "applicationName",
            ),
            (
                RegisterRevisionParams {
                    bucket_name: Some(String::new()),
                    ..RegisterRevisionParams::new("my-app", "my-bucket", "v1.zip")
                },
                "bucketName",
            ),
            (
                RegisterRevisionParams {
                    key: None,
                    ..RegisterRevisionParams::new("my-app", "my-bucket", "v1.zip")
                },
                "key",
            ),
        ];

        for (params, expected_field) in cases {
            let mut codedeploy = MockCodeDeploy::new();
            codedeploy.expect_register_application_revision().never();
            let sink = RecordingSink::default();

            let err = RevisionRegistrar::new(&codedeploy, &sink)
                .register(&params)
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
    async fn test_register_revision_passes_remote_error_through() {
        let mut codedeploy = MockCodeDeploy::new();
        codedeploy
            .expect_register_application_revision()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("ApplicationDoesNotExistException")));
        let sink = RecordingSink::default();

        let err = RevisionRegistrar::new(&codedeploy, &sink)
            .register(&RegisterRevisionParams::new("missing-app", "my-bucket", "v1.zip"))
            .await
            .unwrap_err();

        assert!(matches!(err, StepError::RemoteService(_)));
        assert_eq!(
            sink.lines(),
            vec!["Register revision for missing-app from revision s3://my-bucket/v1.zip".to_string()]
        );
    }
}
