//! Contact form submission.
//!
//! [`ContactFormController`] owns the reactive form state and hands each
//! submission to a [`MessageDelivery`] collaborator. Only one submission is
//! in flight at a time, and every submission ends within the deadline.

use std::future::Future;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::{error, log};
use leptos::prelude::*;

use crate::config::{CONTACT_ENDPOINT, SIMULATED_DELIVERY_MS, SUBMIT_TIMEOUT_MS};
use crate::core::error::DeliveryError;
use crate::models::{ContactForm, ContactMessage, FormField, Notice, NoticeKind};
use crate::utils::{race_with_deadline, RaceResult};

// ============================================================================
// Delivery
// ============================================================================

/// Sends a contact message somewhere.
pub trait MessageDelivery {
    fn deliver(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), DeliveryError>>;
}

/// Settles every message after a fixed delay without sending anything.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedDelivery {
    pub latency_ms: u32,
    /// Outcome reported for every message.
    pub accept: bool,
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        Self {
            latency_ms: SIMULATED_DELIVERY_MS,
            accept: true,
        }
    }
}

impl MessageDelivery for SimulatedDelivery {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        TimeoutFuture::new(self.latency_ms).await;
        if !self.accept {
            return Err(DeliveryError::Rejected("simulated rejection".to_string()));
        }
        log!("[contact] simulated delivery for {}", message.email);
        Ok(())
    }
}

/// Posts the message as JSON to a form endpoint.
#[derive(Clone, Debug)]
pub struct HttpDelivery {
    endpoint: String,
}

impl HttpDelivery {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl MessageDelivery for HttpDelivery {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(message)
            .map_err(|e| DeliveryError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(DeliveryError::Http(response.status()));
        }
        Ok(())
    }
}

/// Delivery selected at build time by `CONTACT_ENDPOINT`.
#[derive(Clone, Debug)]
pub enum Delivery {
    Simulated(SimulatedDelivery),
    Http(HttpDelivery),
}

impl Delivery {
    pub fn from_config() -> Self {
        match CONTACT_ENDPOINT {
            Some(endpoint) if !endpoint.trim().is_empty() => Self::Http(HttpDelivery::new(endpoint)),
            _ => Self::Simulated(SimulatedDelivery::default()),
        }
    }
}

impl MessageDelivery for Delivery {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        match self {
            Self::Simulated(delivery) => delivery.deliver(message).await,
            Self::Http(delivery) => delivery.deliver(message).await,
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Reactive contact form controller.
///
/// `Copy` because every field is an arena handle.
pub struct ContactFormController<D: 'static = Delivery> {
    pub form: RwSignal<ContactForm>,
    pub notice: RwSignal<Option<Notice>>,
    delivery: StoredValue<D>,
    next_seq: StoredValue<u64>,
}

impl<D: 'static> Clone for ContactFormController<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: 'static> Copy for ContactFormController<D> {}

impl<D> ContactFormController<D>
where
    D: MessageDelivery + Clone + Send + Sync + 'static,
{
    pub fn new(delivery: D) -> Self {
        Self {
            form: RwSignal::new(ContactForm::new()),
            notice: RwSignal::new(None),
            delivery: StoredValue::new(delivery),
            next_seq: StoredValue::new(0),
        }
    }

    pub fn update_field(&self, field: FormField, value: String) {
        self.form.update(|form| form.update_field(field, value));
    }

    pub fn is_submitting(&self) -> bool {
        self.form.with(|form| form.is_submitting())
    }

    /// Submit with the configured timeout.
    pub async fn submit(&self) -> Option<NoticeKind> {
        self.submit_with_deadline(TimeoutFuture::new(SUBMIT_TIMEOUT_MS))
            .await
    }

    /// Submit the current fields, reporting failure if `deadline` fires first.
    ///
    /// Returns `None` without contacting the collaborator if a submission is
    /// already in flight.
    pub async fn submit_with_deadline(
        &self,
        deadline: impl Future<Output = ()>,
    ) -> Option<NoticeKind> {
        let message = self.form.try_update(|form| form.begin_submit()).flatten()?;
        let delivery = self.delivery.try_get_value()?;

        let outcome = match race_with_deadline(delivery.deliver(&message), deadline).await {
            RaceResult::Completed(outcome) => outcome,
            RaceResult::TimedOut => Err(DeliveryError::Timeout),
        };
        if let Err(e) = &outcome {
            error!("[contact] {}", e);
        }

        let kind = self
            .form
            .try_update(|form| form.finish_submit(outcome.is_ok()))?;
        self.raise(kind);
        Some(kind)
    }

    fn raise(&self, kind: NoticeKind) {
        let Some(seq) = self.next_seq.try_update_value(|seq| {
            *seq += 1;
            *seq
        }) else {
            return;
        };
        self.notice.set(Some(Notice { seq, kind }));
    }

    /// Clear the notice if it is still the one raised as `seq`.
    pub fn dismiss(&self, seq: u64) {
        self.notice.update(|notice| {
            if notice.is_some_and(|n| n.seq == seq) {
                *notice = None;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::future::{pending, ready};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Clone, Default)]
    struct Scripted {
        fail: bool,
        hang: bool,
        calls: Arc<AtomicUsize>,
    }

    impl MessageDelivery for Scripted {
        async fn deliver(&self, _message: &ContactMessage) -> Result<(), DeliveryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.hang {
                pending::<()>().await;
            }
            tokio::task::yield_now().await;
            if self.fail {
                Err(DeliveryError::Rejected("scripted".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn controller(delivery: Scripted) -> ContactFormController<Scripted> {
        let ctrl = ContactFormController::new(delivery);
        ctrl.update_field(FormField::Name, "Jane".to_string());
        ctrl.update_field(FormField::Email, "jane@x.com".to_string());
        ctrl.update_field(FormField::Message, "Hi".to_string());
        ctrl
    }

    #[tokio::test]
    async fn test_successful_submit_clears_form() {
        let ctrl = controller(Scripted::default());
        let kind = ctrl.submit_with_deadline(pending()).await;

        assert_eq!(kind, Some(NoticeKind::Success));
        let form = ctrl.form.get_untracked();
        assert_eq!(form, ContactForm::new());
        assert_eq!(
            ctrl.notice.get_untracked().map(|n| n.kind),
            Some(NoticeKind::Success)
        );
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_fields() {
        let ctrl = controller(Scripted {
            fail: true,
            ..Scripted::default()
        });
        let kind = ctrl.submit_with_deadline(pending()).await;

        assert_eq!(kind, Some(NoticeKind::Failure));
        let form = ctrl.form.get_untracked();
        assert_eq!(form.name, "Jane");
        assert_eq!(form.email, "jane@x.com");
        assert_eq!(form.message, "Hi");
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_timeout_is_failure() {
        let ctrl = controller(Scripted {
            hang: true,
            ..Scripted::default()
        });
        let kind = ctrl.submit_with_deadline(ready(())).await;

        assert_eq!(kind, Some(NoticeKind::Failure));
        assert!(!ctrl.is_submitting());
        assert_eq!(ctrl.form.get_untracked().message, "Hi");
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_ignored() {
        let delivery = Scripted::default();
        let calls = Arc::clone(&delivery.calls);
        let ctrl = controller(delivery);

        let (first, second) = tokio::join!(
            ctrl.submit_with_deadline(pending()),
            ctrl.submit_with_deadline(pending())
        );

        assert_eq!(first, Some(NoticeKind::Success));
        assert_eq!(second, None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_can_submit_again_after_completion() {
        let delivery = Scripted {
            fail: true,
            ..Scripted::default()
        };
        let calls = Arc::clone(&delivery.calls);
        let ctrl = controller(delivery);

        ctrl.submit_with_deadline(pending()).await;
        ctrl.submit_with_deadline(pending()).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_dismiss_only_clears_own_notice() {
        let ctrl = controller(Scripted {
            fail: true,
            ..Scripted::default()
        });
        ctrl.submit_with_deadline(pending()).await;
        let first = ctrl.notice.get_untracked().unwrap().seq;
        ctrl.submit_with_deadline(pending()).await;
        let second = ctrl.notice.get_untracked().unwrap().seq;
        assert_ne!(first, second);

        ctrl.dismiss(first);
        assert!(ctrl.notice.get_untracked().is_some());
        ctrl.dismiss(second);
        assert!(ctrl.notice.get_untracked().is_none());
    }
}
