use super::{
    policy::{BucketPolicy, KeyPolicy},
    time::EpochTime,
};
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::fmt::{self, Debug, Formatter};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Pool Definition, as described by the registrar
pub struct PoolDescriptor {
    /// The unique identifier of the pool
    pub pool_name: String,
    /// Directory on the host that holds the buckets
    pub buckets_directory: String,
    /// Unix user owning the pool
    pub owner_uid: String,
    /// Unix group owning the pool
    pub owner_gid: String,
    /// Groups the owner may choose from
    #[serde(default)]
    pub groups: Vec<String>,
    /// Buckets of the pool, in server order
    #[serde(default)]
    pub buckets: Vec<BucketEntry>,
    /// Access keys of the pool, in server order
    #[serde(default, alias = "access_keys")]
    pub secrets: Vec<AccessKeyEntry>,
    /// Access key the service uses for probing the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe_key: Option<String>,
    /// When the pool expires
    #[serde(default)]
    pub expiration_time: EpochTime,
    /// When the pool was last modified
    #[serde(default)]
    pub modification_time: EpochTime,
    /// Whether the owner is enabled
    #[serde(default, deserialize_with = "flag")]
    pub user_enabled_status: bool,
    /// Whether the pool is online
    #[serde(default, deserialize_with = "flag")]
    pub online_status: bool,
    /// State of the backing MinIO process
    #[serde(default)]
    pub minio_state: String,
    /// Why the backing MinIO process is in that state
    #[serde(default)]
    pub minio_reason: String,
}

impl PoolDescriptor {
    /// Buckets with a given policy
    pub fn buckets_with(&self, policy: BucketPolicy) -> impl Iterator<Item = &BucketEntry> {
        self.buckets.iter().filter(move |b| b.bkt_policy == policy)
    }

    /// Access keys with a given policy
    pub fn secrets_with(&self, policy: KeyPolicy) -> impl Iterator<Item = &AccessKeyEntry> {
        self.secrets.iter().filter(move |k| k.key_policy == policy)
    }

    /// Find a bucket by name
    pub fn bucket(&self, name: &str) -> Option<&BucketEntry> {
        self.buckets.iter().find(|b| b.name == name)
    }

    /// Find an access key by its id
    pub fn secret(&self, access_key: &str) -> Option<&AccessKeyEntry> {
        self.secrets.iter().find(|k| k.access_key == access_key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Bucket Definition
pub struct BucketEntry {
    /// Bucket name, unique within its pool
    pub name: String,
    /// Anonymous access policy
    pub bkt_policy: BucketPolicy,
    /// Pool the bucket belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
    /// When the bucket was last modified
    #[serde(default)]
    pub modification_time: EpochTime,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Access Key Definition
pub struct AccessKeyEntry {
    /// Access key id
    pub access_key: String,
    /// Secret part of the credential. Only ever displayed, never derived.
    pub secret_key: String,
    /// Scope of the credential
    pub key_policy: KeyPolicy,
    /// When the credential stops working
    #[serde(default)]
    pub expiration_time: EpochTime,
    /// Pool the key belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// When the key was last modified
    #[serde(default)]
    pub modification_time: EpochTime,
}

impl Debug for AccessKeyEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessKeyEntry")
            .field("access_key", &self.access_key)
            .field("key_policy", &self.key_policy)
            .field("expiration_time", &self.expiration_time)
            .finish_non_exhaustive()
    }
}

/// The registrar has served these flags both as JSON booleans and as strings
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean or \"true\"/\"false\"")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            match v.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" | "" => Ok(false),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }

        fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}
