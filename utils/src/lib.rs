mod iam;
mod logging;
mod partition;

pub use iam::{is_valid_role_arn, role_arn_for};
pub use logging::setup_logging;
pub use partition::{known_regions, partition_for_region};
