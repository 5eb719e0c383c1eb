// src/forms.rs

//! Lead-capture form controller.
//!
//! Validation is presence-only: `name`, `email`, and `phone` must be
//! non-empty. After a valid submit the form is always cleared and a
//! transient success banner is shown, even when remote persistence failed;
//! the submission sink is expected to persist locally in that case. The
//! true sink outcome is still reported on [`SubmitReport`] and logged, so
//! callers can surface failures without changing the happy path.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{Config, FormState};

/// Lead-submission collaborator.
///
/// Returns whether *remote* persistence succeeded. `Ok(false)` still counts
/// as an accepted submission (the sink persisted locally instead).
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn submit(&self, lead: &FormState) -> Result<bool>;
}

/// Transient post-submit success indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessBanner {
    shown_at: Instant,
    duration: Duration,
}

impl SuccessBanner {
    fn new(duration: Duration) -> Self {
        Self {
            shown_at: Instant::now(),
            duration,
        }
    }

    /// Whether the banner is still visible at `now`.
    pub fn is_visible(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) < self.duration
    }
}

/// Result of one accepted submission.
#[derive(Debug, Clone, Copy)]
pub struct SubmitReport {
    /// Whether the sink persisted the lead remotely
    pub remote_ok: bool,
    /// Auto-expiring success indicator
    pub banner: SuccessBanner,
}

/// Holds the form state and runs the submit flow.
pub struct LeadForm {
    state: FormState,
    sink: Arc<dyn LeadSink>,
    banner_duration: Duration,
}

impl LeadForm {
    pub fn new(config: &Config, sink: Arc<dyn LeadSink>) -> Self {
        Self {
            state: FormState::default(),
            sink,
            banner_duration: Duration::from_secs(config.forms.success_banner_secs),
        }
    }

    /// Current form contents.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Mutable access for field edits.
    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// Replace the whole form state.
    pub fn set_state(&mut self, state: FormState) {
        self.state = state;
    }

    /// Validate and submit the current form.
    ///
    /// Missing required fields abort synchronously with a validation error
    /// and leave the state untouched; the sink is never called. A valid
    /// submit always clears the form and returns a visible banner, whatever
    /// the sink reported.
    pub async fn submit(&mut self) -> Result<SubmitReport> {
        let missing = self.state.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "Required fields missing: {}",
                missing.join(", ")
            )));
        }

        let remote_ok = match self.sink.submit(&self.state).await {
            Ok(ok) => ok,
            Err(error) => {
                log::warn!("Lead sink failed: {error}");
                false
            }
        };
        if !remote_ok {
            log::warn!(
                "Lead for {} only persisted locally",
                self.state.email.trim()
            );
        }

        self.state.clear();
        Ok(SubmitReport {
            remote_ok,
            banner: SuccessBanner::new(self.banner_duration),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct StubSink {
        remote_ok: Result<bool>,
        calls: Mutex<Vec<FormState>>,
    }

    impl StubSink {
        fn new(remote_ok: Result<bool>) -> Self {
            Self {
                remote_ok,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LeadSink for StubSink {
        async fn submit(&self, lead: &FormState) -> Result<bool> {
            self.calls.lock().unwrap().push(lead.clone());
            match &self.remote_ok {
                Ok(ok) => Ok(*ok),
                Err(_) => Err(AppError::dispatch("stub", "unreachable")),
            }
        }
    }

    fn filled_state() -> FormState {
        FormState {
            name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
            phone: "+1 555".into(),
            message: String::new(),
        }
    }

    #[tokio::test]
    async fn test_missing_name_rejected_before_sink_call() {
        let sink = Arc::new(StubSink::new(Ok(true)));
        let mut form = LeadForm::new(&Config::default(), Arc::clone(&sink) as Arc<dyn LeadSink>);
        let mut state = filled_state();
        state.name.clear();
        form.set_state(state);

        let err = form.submit().await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(sink.calls.lock().unwrap().is_empty());
        // State untouched on rejection.
        assert!(!form.state().is_empty());
    }

    #[tokio::test]
    async fn test_valid_submit_clears_form_and_shows_banner() {
        let sink = Arc::new(StubSink::new(Ok(true)));
        let mut form = LeadForm::new(&Config::default(), Arc::clone(&sink) as Arc<dyn LeadSink>);
        form.set_state(filled_state());

        let report = form.submit().await.unwrap();

        assert!(report.remote_ok);
        assert!(report.banner.is_visible(Instant::now()));
        assert!(form.state().is_empty());
        assert_eq!(sink.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_sink_false_still_accepted() {
        let sink = Arc::new(StubSink::new(Ok(false)));
        let mut form = LeadForm::new(&Config::default(), Arc::clone(&sink) as Arc<dyn LeadSink>);
        form.set_state(filled_state());

        let report = form.submit().await.unwrap();

        assert!(!report.remote_ok);
        assert!(form.state().is_empty());
        assert!(report.banner.is_visible(Instant::now()));
    }

    #[tokio::test]
    async fn test_sink_error_degrades_to_local_outcome() {
        let sink = Arc::new(StubSink::new(Err(AppError::dispatch("x", "y"))));
        let mut form = LeadForm::new(&Config::default(), Arc::clone(&sink) as Arc<dyn LeadSink>);
        form.set_state(filled_state());

        let report = form.submit().await.unwrap();
        assert!(!report.remote_ok);
        assert!(form.state().is_empty());
    }

    #[test]
    fn test_banner_expires() {
        let banner = SuccessBanner::new(Duration::from_secs(3));
        assert!(banner.is_visible(Instant::now()));
        assert!(!banner.is_visible(Instant::now() + Duration::from_secs(4)));
    }
}
