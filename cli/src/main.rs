mod commands;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::error;

use cd_aws::ClientSettings;

#[derive(Parser)]
#[command(name = "cdstep")]
#[command(about = "Register revisions and create deployments with AWS CodeDeploy")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    client: ClientArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ClientArgs {
    /// AWS region, defaults to AWS_REGION
    #[arg(long, global = true)]
    region: Option<String>,

    /// Override the CodeDeploy endpoint, e.g. http://localhost:4566
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    /// Role ARN or role name to assume before calling CodeDeploy
    #[arg(long, global = true)]
    role: Option<String>,

    /// Account owning --role when it is given as a name
    #[arg(long, global = true)]
    role_account: Option<String>,

    /// Session name used when assuming --role
    #[arg(long, global = true)]
    session_name: Option<String>,
}

impl From<ClientArgs> for ClientSettings {
    fn from(args: ClientArgs) -> Self {
        ClientSettings {
            region: args.region,
            endpoint_url: args.endpoint_url,
            role: args.role,
            role_account: args.role_account,
            session_name: args.session_name.unwrap_or_default(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a deployment of an application to a deployment group
    CreateDeployment {
        #[arg(long)]
        application_name: String,
        #[arg(long)]
        deployment_group_name: String,
        #[arg(long)]
        bucket_name: String,
        #[arg(long)]
        key: String,
    },
    /// Register a revision of an application from S3
    RegisterRevision {
        #[arg(long)]
        application_name: String,
        #[arg(long)]
        bucket_name: String,
        #[arg(long)]
        key: String,
    },
    /// Run a registered step with JSON parameters, e.g. cdRegisterRevision '{"applicationName": "app", ...}'
    Run {
        function_name: String,
        params: String,
    },
    /// List the registered steps and their parameters
    ListSteps,
    /// Check whether a string is a well-formed IAM role ARN
    ValidateRoleArn { arn: String },
    /// Print the partition owning a region
    Partition { region: String },
}

#[tokio::main]
async fn main() {
    if let Err(e) = cd_utils::setup_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();
    let settings = ClientSettings::from_env().merge(cli.client.into());

    let result = match cli.command {
        Commands::CreateDeployment {
            application_name,
            deployment_group_name,
            bucket_name,
            key,
        } => {
            commands::handle_create_deployment(
                &settings,
                &application_name,
                &deployment_group_name,
                &bucket_name,
                &key,
            )
            .await
        }
        Commands::RegisterRevision {
            application_name,
            bucket_name,
            key,
        } => {
            commands::handle_register_revision(&settings, &application_name, &bucket_name, &key)
                .await
        }
        Commands::Run {
            function_name,
            params,
        } => commands::handle_run(&settings, &function_name, &params).await,
        Commands::ListSteps => commands::handle_list_steps(&settings).await,
        Commands::ValidateRoleArn { arn } => commands::handle_validate_role_arn(&arn),
        Commands::Partition { region } => commands::handle_partition(&region),
    };

    if let Err(e) = result {
        error!("{:?}", e);
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
