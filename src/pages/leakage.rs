//! Data leakage demo page

use parking_lot::Mutex;

use super::{Notification, RequestSequence};
use crate::client::{ApiClient, ApiError};
use crate::forms::{EmployeeForm, FieldErrors, FormComponent, LeakyEmployeeForm};
use crate::models::{LeakageResult, LeakageTab, PredictionPayload};

#[derive(Debug, Clone)]
pub struct PendingLeakage {
    pub seq: u64,
    pub payload: PredictionPayload,
}

impl PendingLeakage {
    pub fn tab(&self) -> LeakageTab {
        if self.payload.is_leaky() {
            LeakageTab::Broken
        } else {
            LeakageTab::Fixed
        }
    }
}

/// A leakage result and the model that produced it
#[derive(Debug, Clone)]
pub struct LeakageOutcome {
    pub tab: LeakageTab,
    pub result: LeakageResult,
}

/// Two independent forms, one per tab. Switching tabs clears the result
/// but keeps both forms.
#[derive(Debug, Default)]
pub struct LeakagePage {
    active_tab: LeakageTab,
    broken_form: LeakyEmployeeForm,
    fixed_form: EmployeeForm,
    broken_errors: FieldErrors,
    fixed_errors: FieldErrors,
    is_loading: bool,
    result: Option<LeakageOutcome>,
    notification: Option<Notification>,
    sequence: RequestSequence,
}

impl LeakagePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> LeakageTab {
        self.active_tab
    }

    /// Responses still in flight are retired along with the result
    pub fn switch_tab(&mut self, tab: LeakageTab) {
        self.active_tab = tab;
        self.result = None;
        self.is_loading = false;
        self.sequence.next();
    }

    pub fn broken_form(&self) -> &LeakyEmployeeForm {
        &self.broken_form
    }

    pub fn broken_form_mut(&mut self) -> &mut LeakyEmployeeForm {
        &mut self.broken_form
    }

    pub fn fixed_form(&self) -> &EmployeeForm {
        &self.fixed_form
    }

    pub fn fixed_form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.fixed_form
    }

    pub fn errors(&self, tab: LeakageTab) -> &FieldErrors {
        match tab {
            LeakageTab::Broken => &self.broken_errors,
            LeakageTab::Fixed => &self.fixed_errors,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn result(&self) -> Option<&LeakageOutcome> {
        self.result.as_ref()
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// Validate the form of the given model and start a submission
    pub fn begin_submit(&mut self, is_broken: bool) -> Option<PendingLeakage> {
        let payload = if is_broken {
            self.broken_form.build_payload().map(PredictionPayload::Leaky)
        } else {
            self.fixed_form.build_payload().map(PredictionPayload::Plain)
        };

        let errors = if is_broken { &mut self.broken_errors } else { &mut self.fixed_errors };

        match payload {
            Err(e) => {
                tracing::debug!("Leakage form blocked: {} invalid field(s)", e.len());
                *errors = e;
                None
            }
            Ok(payload) => {
                *errors = FieldErrors::default();
                // A post from a stale page brings its own tab forward
                self.active_tab = if is_broken { LeakageTab::Broken } else { LeakageTab::Fixed };
                self.is_loading = true;
                self.result = None;

                Some(PendingLeakage {
                    seq: self.sequence.next(),
                    payload,
                })
            }
        }
    }

    pub fn complete(
        &mut self,
        seq: u64,
        tab: LeakageTab,
        outcome: Result<LeakageResult, ApiError>,
    ) -> bool {
        if !self.sequence.is_current(seq) {
            tracing::debug!(
                "Discarding stale leakage response #{} (latest #{})",
                seq,
                self.sequence.latest()
            );
            return false;
        }

        self.is_loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(LeakageOutcome { tab, result });
                self.notification = Some(Notification::success(
                    "Prediction Complete",
                    format!("Result from {} model.", tab.display_name()),
                ));
            }
            Err(e) => {
                tracing::warn!("Leakage prediction failed: {}", e);
                self.result = None;
                self.notification = Some(Notification::error(e.to_string()));
            }
        }
        true
    }
}

/// Run a full submission against the broken (`is_broken`) or fixed model
pub async fn submit(page: &Mutex<LeakagePage>, api: &ApiClient, is_broken: bool) -> bool {
    let pending = page.lock().begin_submit(is_broken);
    let Some(pending) = pending else {
        return false;
    };

    let tab = pending.tab();
    tracing::info!("Leakage submission #{} -> {} model", pending.seq, tab.as_str());

    let outcome = api.predict_leakage(&pending.payload).await;
    page.lock().complete(pending.seq, tab, outcome);
    true
}
