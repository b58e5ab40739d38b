use aws_config::{Region, SdkConfig};
use aws_credential_types::Credentials;
use cd_utils::{is_valid_role_arn, role_arn_for};
use log::{debug, info};

use crate::ClientSettings;

async fn load_shared_config(region: Option<&str>) -> SdkConfig {
    let mut config_loader = aws_config::from_env();
    if let Some(region) = region {
        config_loader = config_loader.region(Region::new(region.to_string()));
    }
    config_loader.load().await
}

// Identity

pub async fn get_account_id(shared_config: &SdkConfig) -> Result<String, anyhow::Error> {
    let client = aws_sdk_sts::Client::new(shared_config);

    let identity = client.get_caller_identity().send().await?;
    let account_id = identity
        .account()
        .ok_or_else(|| anyhow::anyhow!("Account ID not found"))?;

    Ok(account_id.to_string())
}

pub async fn assume_role(
    shared_config: &SdkConfig,
    role_arn: &str,
    session_name: &str,
) -> Result<Credentials, anyhow::Error> {
    let client = aws_sdk_sts::Client::new(shared_config);

    let resp = client
        .assume_role()
        .role_arn(role_arn)
        .role_session_name(session_name)
        .send()
        .await?;

    let creds = resp
        .credentials()
        .ok_or_else(|| anyhow::anyhow!("No credentials returned when assuming {}", role_arn))?;

    Ok(Credentials::new(
        creds.access_key_id(),
        creds.secret_access_key(),
        Some(creds.session_token().to_string()),
        None,
        "AssumeRole",
    ))
}

// Client

pub async fn get_codedeploy_client(
    settings: &ClientSettings,
) -> Result<aws_sdk_codedeploy::Client, anyhow::Error> {
    let shared_config = load_shared_config(settings.region.as_deref()).await;
    let mut builder = aws_sdk_codedeploy::config::Builder::from(&shared_config);

    if let Some(endpoint_url) = &settings.endpoint_url {
        info!("Using CodeDeploy endpoint: {}", endpoint_url);
        builder = builder.endpoint_url(endpoint_url);
    }

    if let Some(role) = &settings.role {
        let role_arn = if is_valid_role_arn(role) {
            role.clone()
        } else {
            let region = shared_config
                .region()
                .map(|region| region.to_string())
                .ok_or_else(|| {
                    anyhow::anyhow!("A region is required to resolve role name '{}'", role)
                })?;
            let account_id = match &settings.role_account {
                Some(account_id) => account_id.clone(),
                None => get_account_id(&shared_config).await?,
            };
            role_arn_for(role, &account_id, &region)?
        };
        info!(
            "Assuming role {} with session name {}",
            role_arn, settings.session_name
        );
        let credentials = assume_role(&shared_config, &role_arn, &settings.session_name).await?;
        builder = builder.credentials_provider(credentials);
    }

    debug!("CodeDeploy client region: {:?}", shared_config.region());
    Ok(aws_sdk_codedeploy::Client::from_conf(builder.build()))
}
