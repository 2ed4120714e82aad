use crate::api::error::ApiError;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Anonymous access policy of a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketPolicy {
    /// Private bucket
    None,
    /// Anyone can read and write
    Public,
    /// Anyone can upload
    Upload,
    /// Anyone can download
    Download,
}

impl BucketPolicy {
    /// Every bucket policy, in display order
    pub const ALL: [BucketPolicy; 4] = [
        BucketPolicy::None,
        BucketPolicy::Public,
        BucketPolicy::Download,
        BucketPolicy::Upload,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketPolicy::None => "none",
            BucketPolicy::Public => "public",
            BucketPolicy::Upload => "upload",
            BucketPolicy::Download => "download",
        }
    }
}

impl Display for BucketPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketPolicy {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(BucketPolicy::None),
            "public" => Ok(BucketPolicy::Public),
            "upload" => Ok(BucketPolicy::Upload),
            "download" => Ok(BucketPolicy::Download),
            _ => Err(ApiError::precondition(format!("invalid bucket policy: {s}"))),
        }
    }
}

/// Scope of an access key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Read and write
    ReadWrite,
    /// Read only
    ReadOnly,
    /// Write only
    WriteOnly,
}

impl KeyPolicy {
    /// Every key policy, in display order
    pub const ALL: [KeyPolicy; 3] = [KeyPolicy::ReadWrite, KeyPolicy::ReadOnly, KeyPolicy::WriteOnly];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyPolicy::ReadWrite => "readwrite",
            KeyPolicy::ReadOnly => "readonly",
            KeyPolicy::WriteOnly => "writeonly",
        }
    }

    /// Two letter abbreviation used in listings
    pub fn short(&self) -> &'static str {
        match self {
            KeyPolicy::ReadWrite => "rw",
            KeyPolicy::ReadOnly => "ro",
            KeyPolicy::WriteOnly => "wo",
        }
    }
}

impl Display for KeyPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyPolicy {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "readwrite" | "rw" => Ok(KeyPolicy::ReadWrite),
            "readonly" | "ro" => Ok(KeyPolicy::ReadOnly),
            "writeonly" | "wo" => Ok(KeyPolicy::WriteOnly),
            _ => Err(ApiError::precondition(format!("invalid key policy: {s}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{BucketPolicy, KeyPolicy};

    #[test]
    fn wire_names() {
        for policy in BucketPolicy::ALL {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{}\"", policy.as_str()));
            assert_eq!(policy.as_str().parse::<BucketPolicy>().unwrap(), policy);
        }
        for policy in KeyPolicy::ALL {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{}\"", policy.as_str()));
            assert_eq!(policy.short().parse::<KeyPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn out_of_set_is_a_precondition_error() {
        let err = "private".parse::<BucketPolicy>().unwrap_err();
        assert!(err.is_precondition());
        let err = "admin".parse::<KeyPolicy>().unwrap_err();
        assert!(err.is_precondition());
        assert!(serde_json::from_str::<KeyPolicy>("\"admin\"").is_err());
    }
}
