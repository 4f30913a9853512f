use serde::{Deserialize, Serialize};

/// Top-level screens the app can present. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppScreen {
    /// Introductory onboarding, shown until its terminal step completes.
    Onboarding,
    /// Conversion-context screen shown to non-subscribers before the paywall.
    PrePaywall,
    /// Purchase/restore offer.
    Paywall,
    /// One-time post-subscription feature tour.
    Tutorial,
    Home,
}

/// The session flag tuple the resolver selects a screen from.
///
/// `has_seen_prepaywall`, `is_subscribed`, and `has_seen_tutorial` are
/// mutated only on behalf of their designated owners (onboarding terminal
/// step, subscription service, tutorial-complete action).
/// `show_paywall_screen` is session-local and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationFlags {
    pub has_seen_prepaywall: bool,
    pub is_subscribed: bool,
    pub has_seen_tutorial: bool,
    pub show_paywall_screen: bool,
}

impl NavigationFlags {
    /// Select the screen for the current flags.
    ///
    /// This is a priority list, not independent conditions: the first
    /// matching branch wins.
    pub fn resolve(&self) -> AppScreen {
        if !self.has_seen_prepaywall {
            return AppScreen::Onboarding;
        }
        if !self.is_subscribed {
            if !self.show_paywall_screen {
                return AppScreen::PrePaywall;
            }
            return AppScreen::Paywall;
        }
        if !self.has_seen_tutorial {
            return AppScreen::Tutorial;
        }
        AppScreen::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(
        has_seen_prepaywall: bool,
        is_subscribed: bool,
        has_seen_tutorial: bool,
        show_paywall_screen: bool,
    ) -> NavigationFlags {
        NavigationFlags {
            has_seen_prepaywall,
            is_subscribed,
            has_seen_tutorial,
            show_paywall_screen,
        }
    }

    #[test]
    fn onboarding_wins_regardless_of_other_flags() {
        for subscribed in [false, true] {
            for tutorial in [false, true] {
                for paywall in [false, true] {
                    assert_eq!(
                        flags(false, subscribed, tutorial, paywall).resolve(),
                        AppScreen::Onboarding
                    );
                }
            }
        }
    }

    #[test]
    fn unsubscribed_without_paywall_flag_resolves_prepaywall() {
        for tutorial in [false, true] {
            assert_eq!(
                flags(true, false, tutorial, false).resolve(),
                AppScreen::PrePaywall
            );
        }
    }

    #[test]
    fn unsubscribed_with_paywall_flag_resolves_paywall() {
        for tutorial in [false, true] {
            assert_eq!(
                flags(true, false, tutorial, true).resolve(),
                AppScreen::Paywall
            );
        }
    }

    #[test]
    fn subscribed_without_tutorial_resolves_tutorial() {
        for paywall in [false, true] {
            assert_eq!(
                flags(true, true, false, paywall).resolve(),
                AppScreen::Tutorial
            );
        }
    }

    #[test]
    fn subscribed_with_tutorial_resolves_home() {
        assert_eq!(flags(true, true, true, false).resolve(), AppScreen::Home);
    }
}
