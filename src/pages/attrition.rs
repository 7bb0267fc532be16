//! Attrition prediction page

use parking_lot::Mutex;

use super::{Notification, RequestSequence};
use crate::client::{ApiClient, ApiError, Endpoint};
use crate::forms::{EmployeeForm, FieldErrors, FormComponent};
use crate::models::{AttritionModel, AttritionResult, EmployeeRecord};

/// A validated submission waiting for the backend
#[derive(Debug, Clone)]
pub struct PendingAttrition {
    pub seq: u64,
    pub model: AttritionModel,
    pub record: EmployeeRecord,
}

/// Result together with the model that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct AttritionOutcome {
    pub model: AttritionModel,
    pub result: AttritionResult,
}

#[derive(Debug, Default)]
pub struct AttritionPage {
    model: AttritionModel,
    form: EmployeeForm,
    errors: FieldErrors,
    is_loading: bool,
    result: Option<AttritionOutcome>,
    notification: Option<Notification>,
    sequence: RequestSequence,
}

impl AttritionPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> AttritionModel {
        self.model
    }

    /// Choose the backend variant for future submissions
    pub fn select_model(&mut self, model: AttritionModel) {
        self.model = model;
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn result(&self) -> Option<&AttritionOutcome> {
        self.result.as_ref()
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// Validate the form and start a submission.
    ///
    /// Returns `None` when validation fails; the field messages are kept for
    /// rendering and no request must be sent.
    pub fn begin_submit(&mut self) -> Option<PendingAttrition> {
        match self.form.build_payload() {
            Err(errors) => {
                tracing::debug!("Attrition form blocked: {} invalid field(s)", errors.len());
                self.errors = errors;
                None
            }
            Ok(record) => {
                self.errors = FieldErrors::default();
                self.is_loading = true;
                self.result = None;

                Some(PendingAttrition {
                    seq: self.sequence.next(),
                    model: self.model,
                    record,
                })
            }
        }
    }

    /// Apply a backend outcome. Returns false if a newer submission exists
    /// and the outcome was discarded.
    pub fn complete(
        &mut self,
        seq: u64,
        model: AttritionModel,
        outcome: Result<AttritionResult, ApiError>,
    ) -> bool {
        if !self.sequence.is_current(seq) {
            tracing::debug!(
                "Discarding stale attrition response #{} (latest #{})",
                seq,
                self.sequence.latest()
            );
            return false;
        }

        self.is_loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(AttritionOutcome { model, result });
                self.notification = Some(Notification::success(
                    "Analysis Complete",
                    format!("Prediction generated using {} model.", model.display_name()),
                ));
            }
            Err(e) => {
                tracing::warn!("Attrition prediction failed: {}", e);
                self.result = None;
                self.notification = Some(Notification::error(e.to_string()));
            }
        }
        true
    }
}

/// Run a full submission: validate, call the selected model, apply the
/// outcome. The lock is released while the request is in flight.
///
/// Returns false when validation blocked the submission.
pub async fn submit(page: &Mutex<AttritionPage>, api: &ApiClient) -> bool {
    let pending = page.lock().begin_submit();
    let Some(pending) = pending else {
        return false;
    };

    tracing::info!(
        "Attrition submission #{} -> {}",
        pending.seq,
        api.url(Endpoint::for_model(pending.model))
    );

    let outcome = api.predict_attrition(pending.model, &pending.record).await;
    page.lock().complete(pending.seq, pending.model, outcome);
    true
}
