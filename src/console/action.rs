use super::state::ViewState;
use crate::api::{
    error::ApiError,
    models::{BucketPolicy, EpochTime, KeyPolicy, PoolDescriptor},
    requests::{
        AnyRequest, CreateBucket, CreatePool, CreateSecret, DeleteBucket, DeletePool,
        DeleteSecret, GetPool, GetUserInfo, ListPools,
    },
};

/// Everything a user can ask the console to do
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Fetch the user, then the pool list
    FetchUserInfo,
    /// Refresh the pool list
    ListPools,
    /// Select the i-th listed pool for editing
    EditPool(usize),
    /// Fetch the i-th listed pool afresh and select it
    GetPool(usize),
    /// Make a pool
    CreatePool {
        /// Directory holding the buckets
        buckets_directory: String,
        /// Owning group
        owner_gid: String,
    },
    /// Delete the i-th listed pool
    DeletePool(usize),
    /// Add a bucket to the selected pool
    CreateBucket {
        /// Bucket name
        name: String,
        /// Anonymous access policy
        policy: BucketPolicy,
    },
    /// Remove a bucket from the selected pool
    DeleteBucket {
        /// Bucket name
        name: String,
    },
    /// Issue an access key on the selected pool
    CreateSecret {
        /// Scope
        policy: KeyPolicy,
        /// When the key stops working
        expiration_time: EpochTime,
    },
    /// Revoke an access key of the selected pool
    DeleteSecret {
        /// Access key id
        access_key: String,
    },
}

/// What performing an action takes
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Step {
    /// Nothing to send, reconcile this descriptor directly
    Local(PoolDescriptor),
    /// One exchange with the registrar
    Remote(AnyRequest),
}

impl Action {
    /// Short human readable name, used in status messages
    pub fn label(&self) -> &'static str {
        match self {
            Action::FetchUserInfo => "get user info",
            Action::ListPools => "list pools",
            Action::EditPool(_) => "edit pool",
            Action::GetPool(_) => "get pool",
            Action::CreatePool { .. } => "make pool",
            Action::DeletePool(_) => "delete pool",
            Action::CreateBucket { .. } => "make bucket",
            Action::DeleteBucket { .. } => "delete bucket",
            Action::CreateSecret { .. } => "make secret",
            Action::DeleteSecret { .. } => "delete access-key",
        }
    }

    /// Turn the action into a request, using the current state for the
    /// pool it applies to
    pub(crate) fn prepare(&self, state: &ViewState) -> Result<Step, ApiError> {
        let step = match self {
            Action::FetchUserInfo => Step::Remote(AnyRequest::GetUserInfo(GetUserInfo)),
            Action::ListPools => Step::Remote(AnyRequest::ListPools(ListPools)),
            Action::EditPool(index) => Step::Local(listed_pool(state, *index)?.clone()),
            Action::GetPool(index) => Step::Remote(AnyRequest::GetPool(GetPool {
                pool_name: listed_pool(state, *index)?.pool_name.clone(),
            })),
            Action::CreatePool {
                buckets_directory,
                owner_gid,
            } => {
                if buckets_directory.is_empty() {
                    return Err(ApiError::precondition("buckets directory is empty"));
                }
                Step::Remote(AnyRequest::CreatePool(CreatePool {
                    buckets_directory: buckets_directory.clone(),
                    owner_gid: owner_gid.clone(),
                }))
            }
            Action::DeletePool(index) => Step::Remote(AnyRequest::DeletePool(DeletePool {
                pool_name: listed_pool(state, *index)?.pool_name.clone(),
            })),
            Action::CreateBucket { name, policy } => {
                Step::Remote(AnyRequest::CreateBucket(CreateBucket {
                    pool_name: selected_pool(state)?.pool_name.clone(),
                    name: name.clone(),
                    bkt_policy: *policy,
                }))
            }
            Action::DeleteBucket { name } => {
                let desc = selected_pool(state)?;
                if desc.bucket(name).is_none() {
                    return Err(ApiError::precondition(format!("no bucket named {name}")));
                }
                Step::Remote(AnyRequest::DeleteBucket(DeleteBucket {
                    pool_name: desc.pool_name.clone(),
                    name: name.clone(),
                }))
            }
            Action::CreateSecret {
                policy,
                expiration_time,
            } => Step::Remote(AnyRequest::CreateSecret(CreateSecret {
                pool_name: selected_pool(state)?.pool_name.clone(),
                key_policy: *policy,
                expiration_time: *expiration_time,
            })),
            Action::DeleteSecret { access_key } => {
                let desc = selected_pool(state)?;
                if desc.secret(access_key).is_none() {
                    return Err(ApiError::precondition(format!("no access key {access_key}")));
                }
                Step::Remote(AnyRequest::DeleteSecret(DeleteSecret {
                    pool_name: desc.pool_name.clone(),
                    access_key: access_key.clone(),
                }))
            }
        };
        Ok(step)
    }
}

fn listed_pool(state: &ViewState, index: usize) -> Result<&PoolDescriptor, ApiError> {
    state
        .pool_list
        .get(index)
        .ok_or_else(|| ApiError::precondition(format!("no pool at index {index}")))
}

fn selected_pool(state: &ViewState) -> Result<&PoolDescriptor, ApiError> {
    match &state.selected {
        Some(desc) if !desc.pool_name.is_empty() => Ok(desc),
        _ => Err(ApiError::precondition("no pool is selected")),
    }
}
