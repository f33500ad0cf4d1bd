//! Shared "something is loading" flag
//!
//! `LoadingProvider` owns the flag for its subtree; descendants reach it
//! through `use_loading()`. Writes are last-write-wins: there is no count of
//! nested operations, so two independent loads that overlap will clear each
//! other's flag unless the caller coordinates them.

use dioxus::prelude::*;

/// The two states of the shared loading flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingPhase {
    #[default]
    Idle,
    Loading,
}

impl LoadingPhase {
    pub fn from_flag(is_loading: bool) -> Self {
        if is_loading {
            LoadingPhase::Loading
        } else {
            LoadingPhase::Idle
        }
    }

    pub fn is_loading(self) -> bool {
        self == LoadingPhase::Loading
    }

    /// Phase reached by setting the flag to `is_loading`, or `None` when the
    /// flag already has that value.
    pub fn transition(self, is_loading: bool) -> Option<Self> {
        let next = LoadingPhase::from_flag(is_loading);
        (next != self).then_some(next)
    }
}

/// Errors from the loading accessor
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadingContextError {
    #[error("use_loading must be used within a LoadingProvider")]
    InvalidContextUsage,
}

/// Handle to the flag owned by the nearest `LoadingProvider`
#[derive(Clone, Copy, PartialEq)]
pub struct LoadingContext {
    phase: Signal<LoadingPhase>,
}

impl LoadingContext {
    /// Current phase. Subscribes the calling component.
    pub fn phase(&self) -> LoadingPhase {
        *self.phase.read()
    }

    /// Whether something is loading. Subscribes the calling component.
    pub fn is_loading(&self) -> bool {
        self.phase().is_loading()
    }

    /// Set the flag. Only writes when the value changes, so repeated calls
    /// with the same value don't re-render consumers.
    pub fn set_loading(&self, is_loading: bool) {
        let mut phase = self.phase;
        let current = *phase.peek();
        if let Some(next) = current.transition(is_loading) {
            tracing::debug!("Loading flag {:?} -> {:?}", current, next);
            phase.set(next);
        }
    }

    pub fn start_loading(&self) {
        self.set_loading(true);
    }

    pub fn stop_loading(&self) {
        self.set_loading(false);
    }
}

/// Provider component for the shared loading flag
#[component]
pub fn LoadingProvider(
    /// Initial value of the flag (default: idle)
    #[props(default)]
    initial: bool,
    children: Element,
) -> Element {
    let phase = use_signal(|| LoadingPhase::from_flag(initial));

    use_context_provider(|| LoadingContext { phase });

    rsx! {
        {children}
    }
}

/// Access the loading flag of the nearest `LoadingProvider`.
///
/// Returns `InvalidContextUsage` when no provider wraps the calling component.
/// That is a composition bug in the caller, not something to retry.
pub fn use_loading() -> Result<LoadingContext, LoadingContextError> {
    match try_use_context::<LoadingContext>() {
        Some(ctx) => Ok(ctx),
        None => {
            tracing::warn!("use_loading called outside of a LoadingProvider");
            Err(LoadingContextError::InvalidContextUsage)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phase_is_idle() {
        assert_eq!(LoadingPhase::default(), LoadingPhase::Idle);
        assert!(!LoadingPhase::default().is_loading());
    }

    #[test]
    fn from_flag_maps_both_values() {
        assert_eq!(LoadingPhase::from_flag(true), LoadingPhase::Loading);
        assert_eq!(LoadingPhase::from_flag(false), LoadingPhase::Idle);
    }

    #[test]
    fn transition_changes_phase() {
        assert_eq!(
            LoadingPhase::Idle.transition(true),
            Some(LoadingPhase::Loading)
        );
        assert_eq!(
            LoadingPhase::Loading.transition(false),
            Some(LoadingPhase::Idle)
        );
    }

    #[test]
    fn transition_to_same_value_is_noop() {
        assert_eq!(LoadingPhase::Loading.transition(true), None);
        assert_eq!(LoadingPhase::Idle.transition(false), None);
    }

    #[test]
    fn start_then_stop_ends_idle() {
        let mut phase = LoadingPhase::Idle;
        for flag in [true, false] {
            if let Some(next) = phase.transition(flag) {
                phase = next;
            }
        }
        assert_eq!(phase, LoadingPhase::Idle);
    }

    #[test]
    fn setting_true_twice_transitions_once() {
        let mut phase = LoadingPhase::Idle;
        let mut transitions = 0;
        for _ in 0..2 {
            if let Some(next) = phase.transition(true) {
                phase = next;
                transitions += 1;
            }
        }
        assert_eq!(phase, LoadingPhase::Loading);
        assert_eq!(transitions, 1);
    }

    #[test]
    fn error_message_names_provider() {
        assert_eq!(
            LoadingContextError::InvalidContextUsage.to_string(),
            "use_loading must be used within a LoadingProvider"
        );
    }
}
