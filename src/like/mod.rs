use crate::api::{ApiErrorKind, ApiResult};
use crate::config::EnvConfig;
use crate::models::{LikeButtonState, LikeResponse};
use leptos::logging::error;

/// What a finished like request means for the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LikeEffect {
    RefreshCount(String),
    NoChange,
    LockOut { message: String },
    ReportFailure { message: String, notify: bool },
}

pub fn effect_for(result: ApiResult<LikeResponse>, notify_on_network_error: bool) -> LikeEffect {
    match result {
        Ok(data) => match data.count_text() {
            Some(count) => LikeEffect::RefreshCount(count),
            None => LikeEffect::NoChange,
        },
        Err(e) if e.kind == ApiErrorKind::Rejected => LikeEffect::LockOut { message: e.message },
        Err(e) => LikeEffect::ReportFailure {
            message: e.message,
            notify: notify_on_network_error,
        },
    }
}

impl LikeButtonState {
    /// Only a rejection disables; once disabled, nothing re-enables.
    pub fn after(self, effect: &LikeEffect) -> Self {
        match (self, effect) {
            (Self::Disabled, _) => Self::Disabled,
            (Self::Enabled, LikeEffect::LockOut { .. }) => Self::Disabled,
            (Self::Enabled, _) => Self::Enabled,
        }
    }
}

/// A surface a like effect can be rendered onto (raw DOM or reactive component).
pub trait LikeTarget {
    /// Overwrite the enclosing post's interest count.
    fn set_count(&self, text: &str);
    /// Permanently disable the button and relabel it.
    fn lock_out(&self, label: &str);
    /// Blocking user notification.
    fn notify(&self, message: &str);
}

pub fn apply_effect(effect: &LikeEffect, target: &impl LikeTarget, config: &EnvConfig) {
    match effect {
        LikeEffect::RefreshCount(count) => target.set_count(count),
        LikeEffect::NoChange => {}
        LikeEffect::LockOut { message } => {
            target.notify(message);
            target.lock_out(&config.forbidden_label);
        }
        LikeEffect::ReportFailure { message, notify } => {
            error!("Error updating interest count: {}", message);
            if *notify {
                target.notify(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct SpyTarget {
        counts: RefCell<Vec<String>>,
        lockouts: RefCell<Vec<String>>,
        alerts: RefCell<Vec<String>>,
    }

    impl LikeTarget for SpyTarget {
        fn set_count(&self, text: &str) {
            self.counts.borrow_mut().push(text.to_string());
        }
        fn lock_out(&self, label: &str) {
            self.lockouts.borrow_mut().push(label.to_string());
        }
        fn notify(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn ok(json: &str) -> ApiResult<LikeResponse> {
        Ok(serde_json::from_str(json).expect("fixture should parse"))
    }

    fn network_error() -> ApiResult<LikeResponse> {
        Err(ApiError {
            kind: ApiErrorKind::Network,
            message: "error sending request".to_string(),
        })
    }

    #[test]
    fn test_success_with_count_refreshes() {
        let effect = effect_for(ok(r#"{"new_count": 7}"#), false);
        assert_eq!(effect, LikeEffect::RefreshCount("7".to_string()));

        let spy = SpyTarget::default();
        apply_effect(&effect, &spy, &EnvConfig::default());
        assert_eq!(*spy.counts.borrow(), vec!["7".to_string()]);
        assert!(spy.alerts.borrow().is_empty());
        assert!(spy.lockouts.borrow().is_empty());
    }

    #[test]
    fn test_success_without_count_mutates_nothing() {
        let effect = effect_for(ok(r#"{"status": "ok"}"#), false);
        assert_eq!(effect, LikeEffect::NoChange);

        let spy = SpyTarget::default();
        apply_effect(&effect, &spy, &EnvConfig::default());
        assert!(spy.counts.borrow().is_empty());
        assert!(spy.alerts.borrow().is_empty());
        assert!(spy.lockouts.borrow().is_empty());
    }

    #[test]
    fn test_rejection_alerts_verbatim_and_locks_out() {
        let effect = effect_for(Err(ApiError::rejected("Already liked")), false);
        let spy = SpyTarget::default();
        apply_effect(&effect, &spy, &EnvConfig::default());

        assert_eq!(*spy.alerts.borrow(), vec!["Already liked".to_string()]);
        assert_eq!(*spy.lockouts.borrow(), vec!["Forbidden to like!".to_string()]);
        assert!(spy.counts.borrow().is_empty());
    }

    #[test]
    fn test_rejection_uses_configured_label() {
        let cfg = EnvConfig {
            forbidden_label: "Liked already".to_string(),
            ..EnvConfig::default()
        };
        let spy = SpyTarget::default();
        apply_effect(
            &effect_for(Err(ApiError::rejected("nope")), false),
            &spy,
            &cfg,
        );
        assert_eq!(*spy.lockouts.borrow(), vec!["Liked already".to_string()]);
    }

    #[test]
    fn test_network_failure_is_silent_by_default() {
        let effect = effect_for(network_error(), false);
        assert!(matches!(effect, LikeEffect::ReportFailure { notify: false, .. }));

        let spy = SpyTarget::default();
        apply_effect(&effect, &spy, &EnvConfig::default());
        assert!(spy.alerts.borrow().is_empty());
        assert!(spy.lockouts.borrow().is_empty());
        assert!(spy.counts.borrow().is_empty());
    }

    #[test]
    fn test_network_failure_notifies_when_configured() {
        let effect = effect_for(network_error(), true);
        let spy = SpyTarget::default();
        apply_effect(&effect, &spy, &EnvConfig::default());
        assert_eq!(spy.alerts.borrow().len(), 1);
        assert!(spy.lockouts.borrow().is_empty());
    }

    #[test]
    fn test_parse_failure_is_reported_not_rejected() {
        let effect = effect_for(Err(ApiError::parse("expected value")), false);
        assert!(matches!(effect, LikeEffect::ReportFailure { .. }));
        assert_eq!(LikeButtonState::Enabled.after(&effect), LikeButtonState::Enabled);
    }

    #[test]
    fn test_server_error_page_stays_retryable() {
        let err = crate::api::rejection_error(500, "<html>");
        assert_eq!(err.kind, ApiErrorKind::Parse);

        let effect = effect_for(Err(err), false);
        assert!(matches!(effect, LikeEffect::ReportFailure { notify: false, .. }));
        assert_eq!(LikeButtonState::Enabled.after(&effect), LikeButtonState::Enabled);

        let spy = SpyTarget::default();
        apply_effect(&effect, &spy, &EnvConfig::default());
        assert!(spy.alerts.borrow().is_empty());
        assert!(spy.lockouts.borrow().is_empty());
    }

    #[test]
    fn test_state_machine_transitions() {
        let enabled = LikeButtonState::Enabled;
        let lock = LikeEffect::LockOut {
            message: "x".to_string(),
        };

        assert_eq!(
            enabled.after(&LikeEffect::RefreshCount("1".to_string())),
            LikeButtonState::Enabled
        );
        assert_eq!(enabled.after(&LikeEffect::NoChange), LikeButtonState::Enabled);
        assert_eq!(enabled.after(&lock), LikeButtonState::Disabled);
    }

    #[test]
    fn test_disabled_is_terminal() {
        let disabled = LikeButtonState::Disabled;
        for effect in [
            LikeEffect::RefreshCount("9".to_string()),
            LikeEffect::NoChange,
            LikeEffect::ReportFailure {
                message: "offline".to_string(),
                notify: false,
            },
        ] {
            assert_eq!(disabled.after(&effect), LikeButtonState::Disabled);
        }
    }
}
