//! Navigation orchestrator.
//!
//! Coordinates the navigation state machine with persistence and the
//! subscription feed, and tells the shell which top-level screen to render.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, Instrument};

use ip_core::navigation::{
    AppScreen, NavigationAction, NavigationEvent, NavigationFlags, NavigationStateMachine,
};
use ip_core::ports::{
    NavigationEventPort, OnboardingStatePort, SubscriptionPort, UserRepositoryPort,
};

use crate::usecases::navigation::context::NavigationContext;
use crate::usecases::onboarding::CompleteOnboarding;
use crate::usecases::user::{CompleteTutorial, GetDisplayName};

/// Errors produced by the navigation orchestrator.
///
/// Only persistence can fail here; when it does, the in-memory flags are
/// left untouched so the shell keeps showing a consistent screen.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("persist onboarding state failed: {0}")]
    PersistOnboarding(#[source] anyhow::Error),
    #[error("persist tutorial flag failed: {0}")]
    PersistTutorial(#[source] anyhow::Error),
    #[error("subscription feed unavailable: {0}")]
    SubscriptionFeed(#[source] anyhow::Error),
}

/// Orchestrator that drives the app-mode flags and screen selection.
pub struct NavigationOrchestrator {
    context: Arc<NavigationContext>,
    seeded: AtomicBool,

    complete_onboarding: Arc<CompleteOnboarding>,
    complete_tutorial: Arc<CompleteTutorial>,
    get_display_name: Arc<GetDisplayName>,
    onboarding_state: Arc<dyn OnboardingStatePort>,
    users: Arc<dyn UserRepositoryPort>,
    subscription: Arc<dyn SubscriptionPort>,
    navigation_events: Arc<dyn NavigationEventPort>,
}

impl NavigationOrchestrator {
    pub fn new(
        complete_onboarding: Arc<CompleteOnboarding>,
        complete_tutorial: Arc<CompleteTutorial>,
        get_display_name: Arc<GetDisplayName>,
        onboarding_state: Arc<dyn OnboardingStatePort>,
        users: Arc<dyn UserRepositoryPort>,
        subscription: Arc<dyn SubscriptionPort>,
        navigation_events: Arc<dyn NavigationEventPort>,
    ) -> Self {
        Self {
            context: NavigationContext::default().arc(),
            seeded: AtomicBool::new(false),
            complete_onboarding,
            complete_tutorial,
            get_display_name,
            onboarding_state,
            users,
            subscription,
            navigation_events,
        }
    }

    /// The onboarding flow reached its terminal step.
    pub async fn onboarding_completed(&self) -> Result<AppScreen, NavigationError> {
        self.dispatch(NavigationEvent::OnboardingCompleted).await
    }

    /// The user tapped "continue" on the pre-paywall screen.
    pub async fn continue_to_paywall(&self) -> Result<AppScreen, NavigationError> {
        self.dispatch(NavigationEvent::ContinueToPaywall).await
    }

    /// The subscription service reported a new entitlement value.
    pub async fn subscription_changed(
        &self,
        subscribed: bool,
    ) -> Result<AppScreen, NavigationError> {
        self.dispatch(NavigationEvent::SubscriptionChanged { subscribed })
            .await
    }

    /// The user finished the one-time tutorial.
    pub async fn tutorial_completed(&self) -> Result<AppScreen, NavigationError> {
        self.dispatch(NavigationEvent::TutorialCompleted).await
    }

    /// Screen for the current flags, seeding them from storage on first use.
    pub async fn current_screen(&self) -> AppScreen {
        self.seed_flags_from_storage().await;
        self.context.get_flags().await.resolve()
    }

    /// Display name for the pre-paywall greeting ("" when no record exists).
    pub async fn display_name(&self) -> String {
        self.get_display_name.execute().await
    }

    /// Forward entitlement changes into dispatch until the feed closes.
    ///
    /// The watcher is the only background task in this layer; it feeds
    /// events in, it never mutates flags itself.
    pub async fn spawn_subscription_watcher(
        self: Arc<Self>,
    ) -> Result<JoinHandle<()>, NavigationError> {
        let mut rx = self
            .subscription
            .subscribe()
            .await
            .map_err(NavigationError::SubscriptionFeed)?;
        let orchestrator = Arc::clone(&self);

        Ok(tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                let subscribed = event.is_subscribed();
                if let Err(err) = orchestrator.subscription_changed(subscribed).await {
                    error!(error = %err, "subscription change dispatch failed");
                }
            }
        }))
    }

    async fn dispatch(&self, event: NavigationEvent) -> Result<AppScreen, NavigationError> {
        self.seed_flags_from_storage().await;
        // Serialize concurrent dispatch calls: the whole transition,
        // action execution, and emission must not interleave.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.navigation_orchestrator.dispatch", event = ?event);
        async {
            let from = self.context.get_flags().await;
            let (next, actions) = NavigationStateMachine::transition(from, event.clone());
            info!(from = ?from, to = ?next, event = ?event, "navigation transition");

            self.execute_actions(actions).await?;
            self.context.set_flags(next).await;

            let screen = next.resolve();
            self.navigation_events.emit_screen_changed(screen).await;
            Ok(screen)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        actions: Vec<NavigationAction>,
    ) -> Result<(), NavigationError> {
        for action in actions {
            debug!(?action, "navigation executing action");
            match action {
                NavigationAction::PersistPrepaywallSeen => {
                    self.complete_onboarding
                        .execute()
                        .await
                        .map_err(NavigationError::PersistOnboarding)?;
                }
                NavigationAction::MarkTutorialComplete => {
                    self.complete_tutorial
                        .execute()
                        .await
                        .map_err(NavigationError::PersistTutorial)?;
                }
            }
        }
        Ok(())
    }

    async fn seed_flags_from_storage(&self) {
        if self.seeded.swap(true, Ordering::SeqCst) {
            return;
        }

        let has_seen_prepaywall = match self.onboarding_state.get_state().await {
            Ok(state) => state.has_seen_prepaywall,
            Err(err) => {
                error!(error = %err, "failed to load onboarding state");
                false
            }
        };

        // Absence of a record means the tutorial was never seen.
        let has_seen_tutorial = match self.users.current().await {
            Ok(record) => record.map(|r| r.has_seen_tutorial).unwrap_or(false),
            Err(err) => {
                error!(error = %err, "failed to load user record");
                false
            }
        };

        let is_subscribed = self.subscription.is_subscribed().await;

        self.context
            .set_flags(NavigationFlags {
                has_seen_prepaywall,
                is_subscribed,
                has_seen_tutorial,
                show_paywall_screen: false,
            })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use ip_core::onboarding::OnboardingState;
    use ip_core::ports::ClockPort;
    use ip_core::subscription::SubscriptionEvent;
    use ip_core::user::UserRecord;
    use std::sync::atomic::AtomicBool;
    use std::sync::Mutex as StdMutex;
    use tokio::sync::mpsc;
    use tokio::time::{sleep, Duration, Instant};

    struct MockOnboardingStatePort {
        state: StdMutex<OnboardingState>,
        fail_writes: bool,
    }

    impl MockOnboardingStatePort {
        fn new(state: OnboardingState) -> Self {
            Self {
                state: StdMutex::new(state),
                fail_writes: false,
            }
        }

        fn failing_writes() -> Self {
            Self {
                state: StdMutex::new(OnboardingState::default()),
                fail_writes: true,
            }
        }
    }

    #[async_trait]
    impl OnboardingStatePort for MockOnboardingStatePort {
        async fn get_state(&self) -> anyhow::Result<OnboardingState> {
            Ok(self.state.lock().unwrap().clone())
        }

        async fn set_state(&self, state: &OnboardingState) -> anyhow::Result<()> {
            if self.fail_writes {
                anyhow::bail!("disk full");
            }
            *self.state.lock().unwrap() = state.clone();
            Ok(())
        }

        async fn reset(&self) -> anyhow::Result<()> {
            *self.state.lock().unwrap() = OnboardingState::default();
            Ok(())
        }
    }

    struct MockUserRepository {
        record: StdMutex<Option<UserRecord>>,
    }

    impl MockUserRepository {
        fn new(record: Option<UserRecord>) -> Self {
            Self {
                record: StdMutex::new(record),
            }
        }
    }

    #[async_trait]
    impl UserRepositoryPort for MockUserRepository {
        async fn current(&self) -> anyhow::Result<Option<UserRecord>> {
            Ok(self.record.lock().unwrap().clone())
        }

        async fn upsert(&self, record: &UserRecord) -> anyhow::Result<()> {
            *self.record.lock().unwrap() = Some(record.clone());
            Ok(())
        }

        async fn reset(&self) -> anyhow::Result<()> {
            *self.record.lock().unwrap() = None;
            Ok(())
        }
    }

    struct MockSubscriptionPort {
        subscribed: AtomicBool,
        sender: StdMutex<Option<mpsc::Sender<SubscriptionEvent>>>,
    }

    impl MockSubscriptionPort {
        fn new(subscribed: bool) -> Self {
            Self {
                subscribed: AtomicBool::new(subscribed),
                sender: StdMutex::new(None),
            }
        }

        fn sender(&self) -> mpsc::Sender<SubscriptionEvent> {
            self.sender.lock().unwrap().clone().expect("no subscriber")
        }
    }

    #[async_trait]
    impl SubscriptionPort for MockSubscriptionPort {
        async fn is_subscribed(&self) -> bool {
            self.subscribed.load(Ordering::SeqCst)
        }

        async fn subscribe(&self) -> anyhow::Result<mpsc::Receiver<SubscriptionEvent>> {
            let (tx, rx) = mpsc::channel(8);
            *self.sender.lock().unwrap() = Some(tx);
            Ok(rx)
        }
    }

    #[derive(Default)]
    struct MockNavigationEventPort {
        emitted: tokio::sync::Mutex<Vec<AppScreen>>,
    }

    impl MockNavigationEventPort {
        async fn snapshot(&self) -> Vec<AppScreen> {
            self.emitted.lock().await.clone()
        }
    }

    #[async_trait]
    impl NavigationEventPort for MockNavigationEventPort {
        async fn emit_screen_changed(&self, screen: AppScreen) {
            self.emitted.lock().await.push(screen);
        }
    }

    struct TestClock;

    impl ClockPort for TestClock {
        fn now(&self) -> chrono::DateTime<Utc> {
            Utc::now()
        }
    }

    struct Harness {
        orchestrator: Arc<NavigationOrchestrator>,
        onboarding: Arc<MockOnboardingStatePort>,
        users: Arc<MockUserRepository>,
        subscription: Arc<MockSubscriptionPort>,
        events: Arc<MockNavigationEventPort>,
    }

    fn build_harness(
        onboarding: Arc<MockOnboardingStatePort>,
        users: Arc<MockUserRepository>,
        subscription: Arc<MockSubscriptionPort>,
    ) -> Harness {
        let events = Arc::new(MockNavigationEventPort::default());
        let clock = Arc::new(TestClock);
        let orchestrator = Arc::new(NavigationOrchestrator::new(
            Arc::new(CompleteOnboarding::new(onboarding.clone())),
            Arc::new(CompleteTutorial::new(users.clone(), clock)),
            Arc::new(GetDisplayName::new(users.clone())),
            onboarding.clone(),
            users.clone(),
            subscription.clone(),
            events.clone(),
        ));
        Harness {
            orchestrator,
            onboarding,
            users,
            subscription,
            events,
        }
    }

    fn fresh_install() -> Harness {
        build_harness(
            Arc::new(MockOnboardingStatePort::new(OnboardingState::default())),
            Arc::new(MockUserRepository::new(None)),
            Arc::new(MockSubscriptionPort::new(false)),
        )
    }

    #[tokio::test]
    async fn first_launch_shows_onboarding() {
        let harness = fresh_install();

        assert_eq!(
            harness.orchestrator.current_screen().await,
            AppScreen::Onboarding
        );
    }

    #[tokio::test]
    async fn onboarding_completion_persists_flag_and_shows_prepaywall() {
        let harness = fresh_install();

        let screen = harness.orchestrator.onboarding_completed().await.unwrap();

        assert_eq!(screen, AppScreen::PrePaywall);
        assert!(
            harness
                .onboarding
                .get_state()
                .await
                .unwrap()
                .has_seen_prepaywall
        );
        assert_eq!(harness.events.snapshot().await, vec![AppScreen::PrePaywall]);
    }

    #[tokio::test]
    async fn continue_action_advances_to_paywall() {
        let harness = fresh_install();

        harness.orchestrator.onboarding_completed().await.unwrap();
        let screen = harness.orchestrator.continue_to_paywall().await.unwrap();

        assert_eq!(screen, AppScreen::Paywall);
    }

    #[tokio::test]
    async fn activation_on_paywall_resets_flag_and_shows_tutorial() {
        let harness = fresh_install();

        harness.orchestrator.onboarding_completed().await.unwrap();
        harness.orchestrator.continue_to_paywall().await.unwrap();
        let screen = harness
            .orchestrator
            .subscription_changed(true)
            .await
            .unwrap();

        assert_eq!(screen, AppScreen::Tutorial);
        assert!(!harness.orchestrator.context.get_flags().await.show_paywall_screen);
    }

    #[tokio::test]
    async fn lapse_after_activation_returns_to_prepaywall_not_paywall() {
        let harness = fresh_install();

        harness.orchestrator.onboarding_completed().await.unwrap();
        harness.orchestrator.continue_to_paywall().await.unwrap();
        harness
            .orchestrator
            .subscription_changed(true)
            .await
            .unwrap();

        let screen = harness
            .orchestrator
            .subscription_changed(false)
            .await
            .unwrap();

        assert_eq!(screen, AppScreen::PrePaywall);
    }

    #[tokio::test]
    async fn tutorial_completion_marks_record_and_lands_home() {
        let harness = fresh_install();

        harness.orchestrator.onboarding_completed().await.unwrap();
        harness.orchestrator.continue_to_paywall().await.unwrap();
        harness
            .orchestrator
            .subscription_changed(true)
            .await
            .unwrap();
        let screen = harness.orchestrator.tutorial_completed().await.unwrap();

        assert_eq!(screen, AppScreen::Home);
        let record = harness.users.current().await.unwrap().unwrap();
        assert!(record.has_seen_tutorial);
    }

    #[tokio::test]
    async fn seeds_from_persisted_state_for_returning_subscriber() {
        let mut record = UserRecord::new("Omar", Utc::now());
        record.has_seen_tutorial = true;
        let harness = build_harness(
            Arc::new(MockOnboardingStatePort::new(OnboardingState {
                has_seen_prepaywall: true,
            })),
            Arc::new(MockUserRepository::new(Some(record))),
            Arc::new(MockSubscriptionPort::new(true)),
        );

        assert_eq!(harness.orchestrator.current_screen().await, AppScreen::Home);
        assert_eq!(harness.orchestrator.display_name().await, "Omar");
    }

    #[tokio::test]
    async fn seed_treats_missing_record_as_tutorial_not_seen() {
        let harness = build_harness(
            Arc::new(MockOnboardingStatePort::new(OnboardingState {
                has_seen_prepaywall: true,
            })),
            Arc::new(MockUserRepository::new(None)),
            Arc::new(MockSubscriptionPort::new(true)),
        );

        assert_eq!(
            harness.orchestrator.current_screen().await,
            AppScreen::Tutorial
        );
        assert_eq!(harness.orchestrator.display_name().await, "");
    }

    #[tokio::test]
    async fn persistence_failure_leaves_flags_untouched() {
        let harness = build_harness(
            Arc::new(MockOnboardingStatePort::failing_writes()),
            Arc::new(MockUserRepository::new(None)),
            Arc::new(MockSubscriptionPort::new(false)),
        );

        let result = harness.orchestrator.onboarding_completed().await;

        assert!(matches!(result, Err(NavigationError::PersistOnboarding(_))));
        assert_eq!(
            harness.orchestrator.current_screen().await,
            AppScreen::Onboarding
        );
        assert!(harness.events.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn watcher_forwards_entitlement_changes() {
        let harness = fresh_install();
        harness.orchestrator.onboarding_completed().await.unwrap();
        harness.orchestrator.continue_to_paywall().await.unwrap();

        let _watcher = Arc::clone(&harness.orchestrator)
            .spawn_subscription_watcher()
            .await
            .unwrap();
        harness
            .subscription
            .sender()
            .send(SubscriptionEvent::Activated)
            .await
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(1);
        loop {
            if harness
                .events
                .snapshot()
                .await
                .contains(&AppScreen::Tutorial)
            {
                break;
            }
            assert!(
                Instant::now() < deadline,
                "screen change from subscription event timed out"
            );
            sleep(Duration::from_millis(10)).await;
        }
    }
}
