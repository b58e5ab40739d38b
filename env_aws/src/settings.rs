use std::env;

pub const DEFAULT_SESSION_NAME: &str = "codedeploy-step";

/// How to reach CodeDeploy: region, endpoint override and an optional role to assume.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientSettings {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    /// Role ARN or bare role name to assume before calling CodeDeploy.
    pub role: Option<String>,
    /// Account owning `role` when it is given as a name. Defaults to the caller's account.
    pub role_account: Option<String>,
    pub session_name: String,
}

impl ClientSettings {
    pub fn from_env() -> Self {
        ClientSettings {
            region: non_empty_var("AWS_REGION").or_else(|| non_empty_var("AWS_DEFAULT_REGION")),
            endpoint_url: non_empty_var("AWS_ENDPOINT_URL_CODEDEPLOY")
                .or_else(|| non_empty_var("CODEDEPLOY_ENDPOINT")),
            role: non_empty_var("CODEDEPLOY_ROLE"),
            role_account: non_empty_var("CODEDEPLOY_ROLE_ACCOUNT"),
            session_name: non_empty_var("CODEDEPLOY_SESSION_NAME")
                .unwrap_or_else(|| DEFAULT_SESSION_NAME.to_string()),
        }
    }

    /// Values set in `overrides` win over the ones in `self`.
    pub fn merge(self, overrides: ClientSettings) -> Self {
        ClientSettings {
            region: overrides.region.or(self.region),
            endpoint_url: overrides.endpoint_url.or(self.endpoint_url),
            role: overrides.role.or(self.role),
            role_account: overrides.role_account.or(self.role_account),
            session_name: if overrides.session_name.is_empty() {
                self.session_name
            } else {
                overrides.session_name
            },
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
