use std::sync::Arc;

use anyhow::Context;
use cd_aws::{get_codedeploy_client, AwsCodeDeploy, ClientSettings};
use cd_common::{
    default_registry, ConsoleSink, StepRegistry, CREATE_DEPLOYMENT_STEP, REGISTER_REVISION_STEP,
};
use cd_defs::{CodeDeployApi, CreateDeploymentParams, RegisterRevisionParams};
use colored::Colorize;
use serde_json::Value;

async fn registry(settings: &ClientSettings) -> Result<StepRegistry, anyhow::Error> {
    let client = get_codedeploy_client(settings).await?;
    let codedeploy: Arc<dyn CodeDeployApi> = Arc::new(AwsCodeDeploy::new(client));
    Ok(default_registry(codedeploy, Arc::new(ConsoleSink)))
}

async fn run_step(
    settings: &ClientSettings,
    function_name: &str,
    params: &Value,
) -> Result<(), anyhow::Error> {
    let result = registry(settings)
        .await?
        .execute(function_name, params)
        .await?;
    println!("{}", result);
    Ok(())
}

pub async fn handle_create_deployment(
    settings: &ClientSettings,
    application_name: &str,
    deployment_group_name: &str,
    bucket_name: &str,
    key: &str,
) -> Result<(), anyhow::Error> {
    let params =
        CreateDeploymentParams::new(application_name, deployment_group_name, bucket_name, key);
    run_step(
        settings,
        CREATE_DEPLOYMENT_STEP.function_name,
        &serde_json::to_value(params)?,
    )
    .await
}

pub async fn handle_register_revision(
    settings: &ClientSettings,
    application_name: &str,
    bucket_name: &str,
    key: &str,
) -> Result<(), anyhow::Error> {
    let params = RegisterRevisionParams::new(application_name, bucket_name, key);
    run_step(
        settings,
        REGISTER_REVISION_STEP.function_name,
        &serde_json::to_value(params)?,
    )
    .await
}

pub async fn handle_run(
    settings: &ClientSettings,
    function_name: &str,
    params: &str,
) -> Result<(), anyhow::Error> {
    let params: Value = serde_json::from_str(params)
        .with_context(|| format!("Parameters for {} are not valid JSON", function_name))?;
    run_step(settings, function_name, &params).await
}

pub async fn handle_list_steps(settings: &ClientSettings) -> Result<(), anyhow::Error> {
    // Listing never calls CodeDeploy, so skip role assumption
    let settings = ClientSettings {
        role: None,
        ..settings.clone()
    };
    let registry = registry(&settings).await?;

    println!("{:<22} {:<62} {}", "Function", "Description", "Parameters");
    for descriptor in registry.descriptors() {
        println!(
            "{:<22} {:<62} {}",
            descriptor.function_name.bold(),
            descriptor.display_name,
            descriptor.parameters.join(", ")
        );
    }
    Ok(())
}

pub fn handle_validate_role_arn(arn: &str) -> Result<(), anyhow::Error> {
    if cd_utils::is_valid_role_arn(arn) {
        println!("{} {}", "valid".green(), arn);
        Ok(())
    } else {
        Err(anyhow::anyhow!("'{}' is not a valid IAM role ARN", arn))
    }
}

pub fn handle_partition(region: &str) -> Result<(), anyhow::Error> {
    println!("{}", cd_utils::partition_for_region(region)?);
    Ok(())
}
