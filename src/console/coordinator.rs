use super::{
    action::{Action, Step},
    reconciler::{reconcile_failure, reconcile_local, reconcile_success},
    state::{ViewSnapshot, ViewState},
};
use crate::api::{client::Client, error::ApiError};
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};
use tokio::sync::{
    mpsc::{self, error::TrySendError},
    oneshot, watch,
};
use tracing::{debug, info};

/// How many actions may wait for the console at once
const QUEUE_DEPTH: usize = 16;

type Outcome = Result<ViewSnapshot, ApiError>;

/// Owns the view-state and the client. Every mutation of the view-state
/// happens in [`Console::perform`].
#[derive(Debug)]
pub struct Console {
    client: Client,
    state: ViewState,
    snapshots: watch::Sender<ViewSnapshot>,
}

impl Console {
    /// A console with an empty view-state
    pub fn new(client: Client) -> Self {
        let (snapshots, _) = watch::channel(ViewSnapshot::default());
        Self {
            client,
            state: ViewState::default(),
            snapshots,
        }
    }

    /// The current view-state
    pub fn snapshot(&self) -> ViewSnapshot {
        self.state.snapshot()
    }

    /// Receive a new snapshot after every reconciliation
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.snapshots.subscribe()
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.state.snapshot());
    }

    /// Run an action and whatever follows from it, one request at a time
    pub async fn perform(&mut self, action: Action) -> Outcome {
        info!(action = action.label(), "performing");
        let mut next = Some(action);
        while let Some(action) = next.take() {
            let step = match action.prepare(&self.state) {
                Ok(step) => step,
                Err(err) => return Err(self.fail(&action, err)),
            };
            next = match step {
                Step::Local(desc) => {
                    reconcile_local(&mut self.state, desc);
                    None
                }
                Step::Remote(request) => {
                    let result = self.client.call_any(&request, self.state.csrf_token()).await;
                    match result.and_then(|reply| reconcile_success(&mut self.state, &action, reply)) {
                        Ok(follow_up) => follow_up,
                        Err(err) => return Err(self.fail(&action, err)),
                    }
                }
            };
            self.publish();
        }
        Ok(self.state.snapshot())
    }

    fn fail(&mut self, action: &Action, err: ApiError) -> ApiError {
        reconcile_failure(&mut self.state, action, &err);
        self.publish();
        err
    }

    /// Move the console onto its own task
    pub fn spawn(mut self) -> ConsoleHandle {
        let (sender, mut receiver) = mpsc::channel::<Submission>(QUEUE_DEPTH);
        let pending = Arc::new(Mutex::new(HashSet::new()));
        let handle = ConsoleHandle {
            sender,
            pending: pending.clone(),
            snapshots: self.subscribe(),
        };

        tokio::spawn(async move {
            while let Some(Submission { action, reply }) = receiver.recv().await {
                let outcome = self.perform(action.clone()).await;
                if let Ok(mut pending) = pending.lock() {
                    pending.remove(&action);
                }
                // The submitter may have stopped waiting
                let _ = reply.send(outcome);
            }
            debug!("console task finished");
        });

        handle
    }
}

#[derive(Debug)]
struct Submission {
    action: Action,
    reply: oneshot::Sender<Outcome>,
}

/// An action accepted by the console
#[derive(Debug)]
pub struct PendingAction {
    receiver: oneshot::Receiver<Outcome>,
}

impl PendingAction {
    /// Wait for the action and its follow-ups to finish
    pub async fn outcome(self) -> Outcome {
        self.receiver.await.map_err(|_| ApiError::closed())?
    }
}

/// Cheap handle to a spawned [`Console`]
#[derive(Debug, Clone)]
pub struct ConsoleHandle {
    sender: mpsc::Sender<Submission>,
    pending: Arc<Mutex<HashSet<Action>>>,
    snapshots: watch::Receiver<ViewSnapshot>,
}

impl ConsoleHandle {
    /// Queue an action. An action equal to one still queued or running is
    /// refused as busy.
    pub fn submit(&self, action: Action) -> Result<PendingAction, ApiError> {
        let mut pending = self.pending.lock().map_err(|_| ApiError::closed())?;
        if pending.contains(&action) {
            return Err(ApiError::busy(action.label()));
        }

        let (reply, receiver) = oneshot::channel();
        let submission = Submission {
            action: action.clone(),
            reply,
        };
        match self.sender.try_send(submission) {
            Ok(()) => {
                pending.insert(action);
                Ok(PendingAction { receiver })
            }
            Err(TrySendError::Full(_)) => Err(ApiError::busy(action.label())),
            Err(TrySendError::Closed(_)) => Err(ApiError::closed()),
        }
    }

    /// Submit an action and wait for its outcome
    pub async fn run(&self, action: Action) -> Outcome {
        self.submit(action)?.outcome().await
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> ViewSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Follow snapshots as they are published
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.snapshots.clone()
    }
}
