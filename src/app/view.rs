//! Display data for the enrollment page, derived from the course and the
//! current [`SubmissionState`].

use serde::Serialize;

use crate::model::structs::{Course, SubmissionState};

const BASE_FEATURES: [&str; 3] = ["Full course access", "Certificate of completion", "Q&A support"];
const PREMIUM_FEATURE: &str = "Premium support";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCardHint {
    pub number: &'static str,
    pub expiry: &'static str,
    pub cvc: &'static str,
}

pub const TEST_CARD: TestCardHint = TestCardHint {
    number: "4242 4242 4242 4242",
    expiry: "Any future date",
    cvc: "Any 3 digits",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentView {
    pub heading: String,
    pub price_label: String,
    pub included: Vec<&'static str>,
    pub error: Option<String>,
    /// Enroll/purchase button, present while the card form is hidden
    pub enroll_button: Option<Button>,
    /// Pay button, present while the card form is shown
    pub pay_button: Option<Button>,
    pub test_card: Option<TestCardHint>,
}

pub fn price_label(price: u32) -> String {
    if price > 0 {
        format!("${price}")
    } else {
        "Free".to_string()
    }
}

impl EnrollmentView {
    pub fn new(course: &Course, state: &SubmissionState) -> Self {
        let paid = course.is_paid();

        let mut included = BASE_FEATURES.to_vec();
        if paid {
            included.push(PREMIUM_FEATURE);
        }

        let enroll_button = (!state.show_payment_form).then(|| Button {
            label: if state.loading {
                "Processing...".to_string()
            } else if paid {
                format!("Purchase Course - ${}", course.price)
            } else {
                "Enroll for Free".to_string()
            },
            disabled: state.loading,
        });

        let pay_button = state.show_payment_form.then(|| Button {
            label: if state.loading {
                "Processing Payment...".to_string()
            } else {
                format!("Pay ${}", course.price)
            },
            disabled: state.loading,
        });

        Self {
            heading: format!("Enroll in {}", course.title),
            price_label: price_label(course.price),
            included,
            error: state.error.clone(),
            enroll_button,
            pay_button,
            test_card: (paid && !state.show_payment_form).then_some(TEST_CARD),
        }
    }
}
