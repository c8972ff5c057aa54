use std::fmt;

use serde::Deserialize;

/// IBM Cloud datacenter locations that host watsonx.ai.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    /// Dallas
    #[default]
    UsSouth,
    /// Frankfurt
    EuDe,
    /// London
    EuGb,
    /// Tokyo
    JpTok,
    /// Sydney
    AuSyd,
    /// Toronto
    CaTor,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Region::UsSouth => "us-south",
            Region::EuDe => "eu-de",
            Region::EuGb => "eu-gb",
            Region::JpTok => "jp-tok",
            Region::AuSyd => "au-syd",
            Region::CaTor => "ca-tor",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the regional base URL for the gateway.
///
/// Pure formatting; an out-of-date region list still yields a syntactically
/// valid URL, resolving it is the gateway's problem.
pub fn base_url(region: Region) -> String {
    format!("https://{}.ml.cloud.ibm.com", region)
}
