//! Navigation state machine.
//!
//! Defines a pure transition function over the session flag tuple. Screen
//! selection itself lives in [`NavigationFlags::resolve`]; the machine only
//! evolves the flags and names the side effects the application layer must
//! run.

use crate::navigation::action::NavigationAction;
use crate::navigation::event::NavigationEvent;
use crate::navigation::state::NavigationFlags;

/// Pure navigation state machine: no side effects.
pub struct NavigationStateMachine;

impl NavigationStateMachine {
    pub fn transition(
        flags: NavigationFlags,
        event: NavigationEvent,
    ) -> (NavigationFlags, Vec<NavigationAction>) {
        match event {
            NavigationEvent::OnboardingCompleted => {
                if flags.has_seen_prepaywall {
                    // Monotonic flag, nothing left to persist.
                    return (flags, Vec::new());
                }
                (
                    NavigationFlags {
                        has_seen_prepaywall: true,
                        ..flags
                    },
                    vec![NavigationAction::PersistPrepaywallSeen],
                )
            }
            // Flag-driven on purpose: no guard on which screen is showing.
            NavigationEvent::ContinueToPaywall => (
                NavigationFlags {
                    show_paywall_screen: true,
                    ..flags
                },
                Vec::new(),
            ),
            NavigationEvent::SubscriptionChanged { subscribed: true } => (
                // Resetting the paywall flag here keeps a later
                // unsubscribe/resubscribe in the same session out of the
                // paywall state.
                NavigationFlags {
                    is_subscribed: true,
                    show_paywall_screen: false,
                    ..flags
                },
                Vec::new(),
            ),
            NavigationEvent::SubscriptionChanged { subscribed: false } => (
                NavigationFlags {
                    is_subscribed: false,
                    ..flags
                },
                Vec::new(),
            ),
            NavigationEvent::TutorialCompleted => {
                if flags.has_seen_tutorial {
                    return (flags, Vec::new());
                }
                (
                    NavigationFlags {
                        has_seen_tutorial: true,
                        ..flags
                    },
                    vec![NavigationAction::MarkTutorialComplete],
                )
            }
        }
    }
}
