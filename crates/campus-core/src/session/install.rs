//! Progressive web app install prompt tracking.

use tracing::info;

/// What the user chose when shown the install prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Accepted,
    Dismissed,
}

/// Install state for one page session.
///
/// The browser hands over a deferred prompt at most once per page load; it can be
/// shown once and is gone afterwards regardless of the outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallState {
    prompt_available: bool,
    installed: bool,
}

impl InstallState {
    /// `standalone` is true when the page already runs as an installed app.
    pub fn new(standalone: bool) -> Self {
        Self {
            prompt_available: false,
            installed: standalone,
        }
    }

    /// The browser offered an install prompt and it was deferred.
    pub fn prompt_deferred(&mut self) {
        self.prompt_available = true;
    }

    /// Whether the install button should be visible.
    pub fn can_offer_install(&self) -> bool {
        self.prompt_available && !self.installed
    }

    /// Show the held prompt. Returns false when there is nothing to show.
    pub fn take_prompt(&mut self) -> bool {
        std::mem::take(&mut self.prompt_available)
    }

    /// Record the user's answer to the prompt that was just shown.
    pub fn record_outcome(&mut self, outcome: PromptOutcome) {
        info!("Install prompt outcome: {:?}", outcome);
        self.prompt_available = false;
    }

    /// The `appinstalled` event fired.
    pub fn mark_installed(&mut self) {
        self.installed = true;
        self.prompt_available = false;
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_needs_prompt() {
        let mut state = InstallState::new(false);
        assert!(!state.can_offer_install());
        state.prompt_deferred();
        assert!(state.can_offer_install());
    }

    #[test]
    fn test_prompt_is_single_use() {
        let mut state = InstallState::new(false);
        state.prompt_deferred();
        assert!(state.take_prompt());
        state.record_outcome(PromptOutcome::Dismissed);
        assert!(!state.take_prompt());
        assert!(!state.can_offer_install());
    }

    #[test]
    fn test_standalone_never_offers_install() {
        let mut state = InstallState::new(true);
        state.prompt_deferred();
        assert!(!state.can_offer_install());
        assert!(state.is_installed());
    }

    #[test]
    fn test_installed_event_hides_button() {
        let mut state = InstallState::new(false);
        state.prompt_deferred();
        state.mark_installed();
        assert!(!state.can_offer_install());
    }
}
