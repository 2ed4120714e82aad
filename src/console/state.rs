use crate::api::models::{AccessKeyEntry, EpochTime, KeyPolicy, PoolDescriptor, UserInfo};

/// Last status reported to the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerResponse {
    /// "success", "error", or empty when nothing came back
    pub status: String,
    /// Reason given by the registrar, or a local failure description
    pub reason: String,
    /// When the registrar answered
    pub time: EpochTime,
    /// Progress message for the last action
    pub message: String,
}

/// The one mutable view-state of the console.
///
/// Only the reconciler writes to it; everyone else reads [`ViewSnapshot`]s.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub(crate) user_info: Option<UserInfo>,
    pub(crate) owner: String,
    pub(crate) group_choices: Vec<String>,
    pub(crate) pool_list: Vec<PoolDescriptor>,
    pub(crate) selected: Option<PoolDescriptor>,
    pub(crate) access_keys_rw: Vec<AccessKeyEntry>,
    pub(crate) access_keys_ro: Vec<AccessKeyEntry>,
    pub(crate) access_keys_wo: Vec<AccessKeyEntry>,
    pub(crate) csrf_token: Option<String>,
    pub(crate) response: ServerResponse,
}

impl ViewState {
    /// Token to send with the next request
    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    /// Read-only copy for renderers
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            user_info: self.user_info.clone(),
            owner: self.owner.clone(),
            group_choices: self.group_choices.clone(),
            pool_list: self.pool_list.clone(),
            selected: self.selected.clone(),
            access_keys_rw: self.access_keys_rw.clone(),
            access_keys_ro: self.access_keys_ro.clone(),
            access_keys_wo: self.access_keys_wo.clone(),
            response: self.response.clone(),
        }
    }
}

/// What a renderer gets to see. Carries no CSRF token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSnapshot {
    /// User as reported by the registrar
    pub user_info: Option<UserInfo>,
    /// Unix user owning new pools
    pub owner: String,
    /// Groups a new pool may belong to
    pub group_choices: Vec<String>,
    /// Every pool of the user
    pub pool_list: Vec<PoolDescriptor>,
    /// The pool in edit, if any
    pub selected: Option<PoolDescriptor>,
    /// Read-write keys of the selected pool
    pub access_keys_rw: Vec<AccessKeyEntry>,
    /// Read-only keys of the selected pool
    pub access_keys_ro: Vec<AccessKeyEntry>,
    /// Write-only keys of the selected pool
    pub access_keys_wo: Vec<AccessKeyEntry>,
    /// Last status
    pub response: ServerResponse,
}

impl ViewSnapshot {
    /// Keys of the selected pool with a given policy
    pub fn access_keys(&self, policy: KeyPolicy) -> &[AccessKeyEntry] {
        match policy {
            KeyPolicy::ReadWrite => &self.access_keys_rw,
            KeyPolicy::ReadOnly => &self.access_keys_ro,
            KeyPolicy::WriteOnly => &self.access_keys_wo,
        }
    }
}
