use std::fmt;

use serde::{Deserialize, Serialize};

/// Archive format of a revision bundle. Only zip archives are produced here.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BundleType {
    Zip,
}

/// Storage backend holding the revision bundle.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevisionLocationType {
    S3,
}

/// Pointer to a revision bundle stored in S3.
///
/// Fully determined by `bucket` and `key`; the bundle type and location type are fixed.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RevisionLocation {
    pub bundle_type: BundleType,
    pub revision_type: RevisionLocationType,
    pub bucket: String,
    pub key: String,
}

impl RevisionLocation {
    pub fn s3_uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

impl fmt::Display for RevisionLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.s3_uri())
    }
}

/// Build the revision pointer for a zip bundle at `s3://<bucket>/<key>`.
///
/// Callers have already checked that both values are non-empty.
pub fn build_revision_location(bucket: &str, key: &str) -> RevisionLocation {
    RevisionLocation {
        bundle_type: BundleType::Zip,
        revision_type: RevisionLocationType::S3,
        bucket: bucket.to_string(),
        key: key.to_string(),
    }
}
