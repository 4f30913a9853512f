//! Intervention orchestrator.
//!
//! Drives a single "tempted" session: presents at most one coping sub-flow
//! at a time, opens the community link, and notifies the caller exactly
//! once when the session completed through a sub-flow.
//!
//! Nothing here is allowed to fail outward: presentation and link-opening
//! problems are logged and swallowed, so the worst observable behavior is
//! "nothing happens".

use std::sync::Arc;

use tokio::sync::{oneshot, Mutex};
use tracing::{debug, info, info_span, warn, Instrument};
use url::Url;

use ip_core::config::AppConfig;
use ip_core::intervention::{
    InterventionAction, InterventionEvent, InterventionState, InterventionStateMachine,
};
use ip_core::ports::{InterventionUiPort, LinkOpenerPort};

/// Orchestrator for one intervention session.
pub struct InterventionOrchestrator {
    state: Mutex<InterventionState>,
    /// Serializes dispatch calls; action order within a transition is part
    /// of the contract (dismiss before notify).
    dispatch_lock: Mutex<()>,
    /// Armed by [`begin`](Self::begin); fired 0 or 1 times per session.
    completion: Mutex<Option<oneshot::Sender<()>>>,

    ui: Arc<dyn InterventionUiPort>,
    links: Arc<dyn LinkOpenerPort>,
    community_link: String,
}

impl InterventionOrchestrator {
    pub fn new(
        ui: Arc<dyn InterventionUiPort>,
        links: Arc<dyn LinkOpenerPort>,
        config: &AppConfig,
    ) -> Self {
        Self {
            state: Mutex::new(InterventionState::Idle),
            dispatch_lock: Mutex::new(()),
            completion: Mutex::new(None),
            ui,
            links,
            community_link: config.community_link.clone(),
        }
    }

    /// Start a session and arm the single-shot completion notifier.
    ///
    /// The returned receiver resolves with `Ok(())` only when a sub-flow ran
    /// to completion; a closed session drops the sender instead.
    pub async fn begin(&self) -> oneshot::Receiver<()> {
        let _guard = self.dispatch_lock.lock().await;
        *self.state.lock().await = InterventionState::Idle;

        let (tx, rx) = oneshot::channel();
        *self.completion.lock().await = Some(tx);
        rx
    }

    /// The user chose the breathing exercise.
    pub async fn choose_breathing(&self) -> InterventionState {
        self.dispatch(InterventionEvent::BreathingSelected).await
    }

    /// The user chose the dhikr counter.
    pub async fn choose_dhikr(&self) -> InterventionState {
        self.dispatch(InterventionEvent::DhikrSelected).await
    }

    /// The active sub-flow reported completion.
    pub async fn sub_flow_completed(&self) -> InterventionState {
        self.dispatch(InterventionEvent::SubFlowCompleted).await
    }

    /// The user chose the community link.
    pub async fn open_community(&self) -> InterventionState {
        self.dispatch(InterventionEvent::CommunitySelected).await
    }

    /// Dismiss the whole flow. Never fires the completion notifier.
    pub async fn close(&self) -> InterventionState {
        let state = self.dispatch(InterventionEvent::CloseRequested).await;
        // A dismissed session never notifies; dropping the sender lets the
        // caller observe the session ended without completing.
        self.completion.lock().await.take();
        state
    }

    pub async fn current_state(&self) -> InterventionState {
        *self.state.lock().await
    }

    async fn dispatch(&self, event: InterventionEvent) -> InterventionState {
        let _dispatch_guard = self.dispatch_lock.lock().await;

        let span = info_span!("usecase.intervention_orchestrator.dispatch", event = ?event);
        async {
            let from = *self.state.lock().await;
            let (next, actions) = InterventionStateMachine::transition(from, event);
            info!(from = ?from, to = ?next, event = ?event, "intervention transition");

            self.execute_actions(actions).await;
            *self.state.lock().await = next;
            next
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<InterventionAction>) {
        for action in actions {
            debug!(?action, "intervention executing action");
            match action {
                InterventionAction::PresentBreathing => {
                    if let Err(err) = self.ui.present_breathing().await {
                        warn!(error = %err, "breathing presentation failed");
                    }
                }
                InterventionAction::PresentDhikr => {
                    if let Err(err) = self.ui.present_dhikr().await {
                        warn!(error = %err, "dhikr presentation failed");
                    }
                }
                InterventionAction::DismissSubFlow => {
                    if let Err(err) = self.ui.dismiss_sub_flow().await {
                        warn!(error = %err, "sub-flow dismissal failed");
                    }
                }
                InterventionAction::DismissFlow => {
                    if let Err(err) = self.ui.dismiss_flow().await {
                        warn!(error = %err, "flow dismissal failed");
                    }
                }
                InterventionAction::NotifyCompletion => {
                    if let Some(tx) = self.completion.lock().await.take() {
                        // Receiver may be gone; that is the caller's choice.
                        let _ = tx.send(());
                    }
                }
                InterventionAction::OpenCommunityLink => {
                    self.open_community_link().await;
                }
            }
        }
    }

    async fn open_community_link(&self) {
        let url = match Url::parse(&self.community_link) {
            Ok(url) => url,
            Err(err) => {
                warn!(error = %err, link = %self.community_link, "community link malformed, ignoring");
                return;
            }
        };

        if let Err(err) = self.links.open_external(url.as_str()).await {
            warn!(error = %err, link = %url, "failed to open community link");
        }
    }
}
