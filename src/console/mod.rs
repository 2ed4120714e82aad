/// User actions and the requests they map to
pub mod action;
/// Single owner of the view-state
pub mod coordinator;
/// Response reconciliation
pub mod reconciler;
/// Text projections of snapshots
pub mod render;
/// View-state and snapshots
pub mod state;

pub use action::Action;
pub use coordinator::{Console, ConsoleHandle, PendingAction};
pub use state::{ServerResponse, ViewSnapshot, ViewState};
