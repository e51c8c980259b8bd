//! Enrollment flow controller
//!
//! Drives one visit to a course's enrollment page: authentication gate,
//! free/paid branching, the mocked card payment and the final
//! `POST /api/enroll`. The page's transient flags live in a
//! [`SubmissionState`] that observers can follow through [`EnrollmentFlow::subscribe`].

use std::time::Duration;

use tokio::sync::watch;

use super::delay;
use crate::{
    error::{ErrorKind, Result},
    interface::{AuthState, EnrollApi, Navigator},
    model::{
        dtos::EnrollParams,
        structs::{CardDetails, Course, SubmissionState},
    },
    routes,
};

/// Simulated payment-gateway round trip.
pub const PAYMENT_DELAY: Duration = Duration::from_millis(1000);

pub const MISSING_CARD_DETAILS: &str = "Please fill all card details";
pub const PAYMENT_FAILED: &str = "Payment processing failed";
pub const ENROLLMENT_FAILED: &str = "Enrollment failed";

/// Where a successfully handled operation left the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Not signed in; redirected to the sign-in page.
    SignInRequired,
    /// Paid course; the card form is now shown.
    PaymentRequired,
    /// Enrolled and redirected to the course content.
    Enrolled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingPaymentDetails,
    Submitting,
}

pub struct EnrollmentFlow<C, A, N> {
    course: Course,
    api: C,
    auth: A,
    navigator: N,
    payment_delay: Duration,
    state: watch::Sender<SubmissionState>,
}

/// Holds `loading` up for one operation and clears it on every exit path.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<SubmissionState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|s| s.loading = false);
    }
}

impl<C, A, N> EnrollmentFlow<C, A, N>
where
    C: EnrollApi,
    A: AuthState,
    N: Navigator,
{
    pub fn new(course: Course, api: C, auth: A, navigator: N) -> Self {
        let (state, _) = watch::channel(SubmissionState::default());
        Self {
            course,
            api,
            auth,
            navigator,
            payment_delay: PAYMENT_DELAY,
            state,
        }
    }

    pub fn with_payment_delay(mut self, delay: Duration) -> Self {
        self.payment_delay = delay;
        self
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    /// Snapshot of the current flags.
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    pub fn phase(&self) -> Phase {
        let state = self.state.borrow();
        if state.loading {
            Phase::Submitting
        } else if state.show_payment_form {
            Phase::AwaitingPaymentDetails
        } else {
            Phase::Idle
        }
    }

    /// Entry point of the "Enroll" / "Purchase" button.
    pub async fn begin_enrollment(&self) -> Result<Step> {
        if !self.auth.is_authenticated() {
            log::info!("Enrollment in {} requires sign-in", self.course.id);
            self.navigator.navigate(routes::SIGN_IN);
            return Ok(Step::SignInRequired);
        }

        let _guard = self.start()?;

        if self.course.is_paid() {
            log::debug!(
                "Course {} costs {}, collecting card details",
                self.course.id,
                self.course.price
            );
            self.state.send_modify(|s| s.show_payment_form = true);
            return Ok(Step::PaymentRequired);
        }

        self.enroll(ENROLLMENT_FAILED).await
    }

    /// Submits the mocked card payment, then enrolls.
    ///
    /// No charge is made; the card is only checked for empty fields and the
    /// gateway is simulated by a fixed delay.
    pub async fn submit_payment(&self, card: &CardDetails) -> Result<Step> {
        let form_open = self.state.borrow().show_payment_form;
        if !form_open {
            return Err(ErrorKind::InvalidState("payment form is not open".to_string()).into());
        }

        let _guard = self.start()?;

        if !card.is_complete() {
            self.fail(MISSING_CARD_DETAILS);
            return Err(ErrorKind::ValidationError(MISSING_CARD_DETAILS.to_string()).into());
        }

        delay::sleep(self.payment_delay).await;
        log::info!(
            "Mock payment of {} for course {} processed with {:?}",
            self.course.price,
            self.course.id,
            card
        );

        self.enroll(PAYMENT_FAILED).await
    }

    /// Back to the pre-payment view. Leaves `loading` and `error` alone.
    pub fn cancel_payment(&self) {
        self.state.send_modify(|s| s.show_payment_form = false);
    }

    /// Marks an operation as in flight, rejecting overlap.
    fn start(&self) -> Result<LoadingGuard<'_>> {
        let acquired = self.state.send_if_modified(|s| {
            if s.loading {
                return false;
            }
            s.loading = true;
            s.error = None;
            true
        });

        if !acquired {
            log::warn!("Ignoring overlapping operation on course {}", self.course.id);
            return Err(ErrorKind::InFlight.into());
        }

        Ok(LoadingGuard { state: &self.state })
    }

    fn fail(&self, message: &str) {
        self.state
            .send_modify(|s| s.error = Some(message.to_string()));
    }

    async fn enroll(&self, fallback: &str) -> Result<Step> {
        let params = EnrollParams {
            course_id: self.course.id.clone(),
        };

        match self.api.enroll(params).await {
            Ok(()) => {
                self.navigator
                    .navigate(&routes::course_content(&self.course.id));
                Ok(Step::Enrolled)
            }
            Err(e) => {
                log::warn!("Enrollment in {} failed: {e}", self.course.id);
                self.fail(&e.user_message(fallback));
                Err(e)
            }
        }
    }
}
