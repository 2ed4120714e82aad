//! Folds registrar responses into the view-state.
//!
//! The registrar is the only source of truth: a pool descriptor always
//! replaces the selected pool wholesale, and a pool list always replaces the
//! list wholesale. The only state derived locally is the split of access keys
//! by policy.

use super::{action::Action, state::ViewState};
use crate::api::{
    error::ApiError,
    models::{EpochTime, KeyPolicy, PoolDescriptor},
    response::{Payload, Reply, ResponseStatus},
};
use tracing::{debug, info, warn};

/// Apply a successful reply. Returns the action that has to follow, if any.
pub fn reconcile_success(
    state: &mut ViewState,
    action: &Action,
    reply: Reply,
) -> Result<Option<Action>, ApiError> {
    // Rotate on every exchange, not only on expiry
    if let Some(token) = reply.status.csrf_token() {
        debug!("csrf token rotated");
        state.csrf_token = Some(token.to_string());
    }

    if let Payload::UserInfo(info) = &reply.payload {
        info.check_api_version()?;
    }

    record_status(state, &reply.status, format!("{} ... done", action.label()));

    let follow_up = match reply.payload {
        Payload::UserInfo(info) => {
            info!(uid = %info.uid, api_version = %info.api_version, "user info");
            state.owner = info.uid.clone();
            state.group_choices = info.groups.clone();
            state.user_info = Some(info);
            Some(Action::ListPools)
        }
        Payload::PoolList(pool_list) => {
            info!(count = pool_list.len(), "pool list");
            state.pool_list = pool_list;
            clear_selection(state);
            None
        }
        Payload::PoolDesc(desc) => {
            select_pool(state, desc);
            None
        }
        Payload::Acknowledged => match action {
            Action::CreatePool { .. } | Action::DeletePool(_) => Some(Action::ListPools),
            _ => None,
        },
    };

    Ok(follow_up)
}

/// Record a failed action. Domain data stays as it was, but a token carried
/// by the response still replaces the held one, even when its payload could
/// not be read.
pub fn reconcile_failure(state: &mut ViewState, action: &Action, error: &ApiError) {
    if let Some(token) = error.csrf_token() {
        debug!("csrf token rotated");
        state.csrf_token = Some(token.to_string());
    }

    match error.response_status() {
        Some(status) => {
            warn!(
                action = action.label(),
                code = ?error.status_code(),
                status = %status.status,
                reason = %status.reason,
                "refused"
            );
            let message = format!("{} ... error: {}", action.label(), status.reason);
            record_status(state, status, message);
        }
        None => {
            warn!(action = action.label(), code = ?error.status_code(), error = %error, "failed");
            state.response.status = String::new();
            state.response.reason = String::new();
            state.response.time = EpochTime::UNSET;
            state.response.message = format!("{} ... failed: {}", action.label(), error);
        }
    }
}

/// Select a pool for editing from a descriptor we already hold
pub fn reconcile_local(state: &mut ViewState, desc: PoolDescriptor) {
    select_pool(state, desc);
    state.response = Default::default();
    state.response.message = "editing".to_string();
}

fn select_pool(state: &mut ViewState, desc: PoolDescriptor) {
    debug!(pool = %desc.pool_name, "pool selected");
    state.access_keys_rw = desc.secrets_with(KeyPolicy::ReadWrite).cloned().collect();
    state.access_keys_ro = desc.secrets_with(KeyPolicy::ReadOnly).cloned().collect();
    state.access_keys_wo = desc.secrets_with(KeyPolicy::WriteOnly).cloned().collect();
    state.owner = desc.owner_uid.clone();
    if !desc.groups.is_empty() {
        state.group_choices = desc.groups.clone();
    }
    state.selected = Some(desc);
}

fn clear_selection(state: &mut ViewState) {
    state.selected = None;
    state.access_keys_rw.clear();
    state.access_keys_ro.clear();
    state.access_keys_wo.clear();
}

fn record_status(state: &mut ViewState, status: &ResponseStatus, message: String) {
    state.response.status = status.status.clone();
    state.response.reason = status.reason.clone();
    state.response.time = status.time.unwrap_or_default();
    state.response.message = message;
}
