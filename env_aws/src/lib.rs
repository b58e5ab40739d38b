mod api;
mod codedeploy;
mod settings;

pub use api::{assume_role, get_account_id, get_codedeploy_client};
pub use codedeploy::AwsCodeDeploy;
pub use settings::ClientSettings;
