use cd_defs::StepError;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::partition_for_region;

// Limits from https://docs.aws.amazon.com/IAM/latest/UserGuide/reference_iam-quotas.html
static IAM_ROLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^arn:(aws|aws-cn|aws-us-gov):iam::[0-9]{12}:role/([A-Za-z0-9_+=,.@/-]{1,512}/)?[A-Za-z0-9_+=,.@-]{1,64}$",
    )
    .unwrap()
});

/// Whether `arn` is a well-formed IAM role ARN. Never fails.
pub fn is_valid_role_arn(arn: &str) -> bool {
    IAM_ROLE_PATTERN.is_match(arn)
}

/// Resolve `role` to a role ARN. A valid ARN is returned as given, anything else is
/// treated as a role name (optionally with a path) in `account_id` within the partition
/// that owns `region`.
pub fn role_arn_for(role: &str, account_id: &str, region: &str) -> Result<String, StepError> {
    if is_valid_role_arn(role) {
        return Ok(role.to_string());
    }
    let partition = partition_for_region(region)?;
    Ok(format!(
        "arn:{}:iam::{}:role/{}",
        partition,
        account_id,
        role.trim_start_matches('/')
    ))
}
