use cd_defs::StepError;
use once_cell::sync::Lazy;
use regex::Regex;

const AWS_REGIONS: &[&str] = &[
    "aws-global",
    "af-south-1",
    "ap-east-1",
    "ap-east-2",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-southeast-5",
    "ap-southeast-6",
    "ap-southeast-7",
    "ca-central-1",
    "ca-west-1",
    "eu-central-1",
    "eu-central-2",
    "eu-north-1",
    "eu-south-1",
    "eu-south-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "il-central-1",
    "me-central-1",
    "me-south-1",
    "mx-central-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
];

const AWS_CN_REGIONS: &[&str] = &["aws-cn-global", "cn-north-1", "cn-northwest-1"];

const AWS_US_GOV_REGIONS: &[&str] = &["aws-us-gov-global", "us-gov-east-1", "us-gov-west-1"];

const AWS_ISO_REGIONS: &[&str] = &["aws-iso-global", "us-iso-east-1", "us-iso-west-1"];

const AWS_ISO_B_REGIONS: &[&str] = &["aws-iso-b-global", "us-isob-east-1"];

const AWS_ISO_E_REGIONS: &[&str] = &["aws-iso-e-global", "eu-isoe-west-1"];

const AWS_ISO_F_REGIONS: &[&str] = &["aws-iso-f-global", "us-isof-east-1", "us-isof-south-1"];

const AWS_EUSC_REGIONS: &[&str] = &["eusc-de-east-1"];

const PARTITIONS: &[(&str, &[&str])] = &[
    ("aws", AWS_REGIONS),
    ("aws-cn", AWS_CN_REGIONS),
    ("aws-us-gov", AWS_US_GOV_REGIONS),
    ("aws-iso", AWS_ISO_REGIONS),
    ("aws-iso-b", AWS_ISO_B_REGIONS),
    ("aws-iso-e", AWS_ISO_E_REGIONS),
    ("aws-iso-f", AWS_ISO_F_REGIONS),
    ("aws-eusc", AWS_EUSC_REGIONS),
];

// Region naming rules per partition, matching the SDK endpoint metadata. Used for regions
// launched after the table above was last updated.
static PARTITION_REGION_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("aws", r"^(us|eu|ap|sa|ca|me|af|il|mx)\-\w+\-\d+$"),
        ("aws-cn", r"^cn\-\w+\-\d+$"),
        ("aws-us-gov", r"^us\-gov\-\w+\-\d+$"),
        ("aws-iso", r"^us\-iso\-\w+\-\d+$"),
        ("aws-iso-b", r"^us\-isob\-\w+\-\d+$"),
        ("aws-iso-e", r"^eu\-isoe\-\w+\-\d+$"),
        ("aws-iso-f", r"^us\-isof\-\w+\-\d+$"),
        ("aws-eusc", r"^eusc\-(de)\-\w+\-\d+$"),
    ]
    .into_iter()
    .map(|(partition, pattern)| (partition, Regex::new(pattern).unwrap()))
    .collect()
});

/// Name of the partition (`aws`, `aws-cn`, `aws-us-gov`, ...) that owns `region`.
///
/// Regions missing from the table are matched against each partition's naming rule.
pub fn partition_for_region(region: &str) -> Result<&'static str, StepError> {
    PARTITIONS
        .iter()
        .find(|(_, regions)| regions.contains(&region))
        .map(|(partition, _)| *partition)
        .or_else(|| {
            PARTITION_REGION_PATTERNS
                .iter()
                .find(|(_, pattern)| pattern.is_match(region))
                .map(|(partition, _)| *partition)
        })
        .ok_or_else(|| StepError::UnknownRegion(region.to_string()))
}

/// Every `(partition, region)` pair in the table.
pub fn known_regions() -> impl Iterator<Item = (&'static str, &'static str)> {
    PARTITIONS.iter().flat_map(|(partition, regions)| {
        regions.iter().map(move |region| (*partition, *region))
    })
}
