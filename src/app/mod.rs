//! Application module - the enrollment page logic
//!
//! This module provides the enrollment flow controller and the view model
//! the page renders from. The flow runs on both WASM and no-WASM targets;
//! only the payment delay is platform specific.

mod delay;
pub mod enrollment;
pub mod view;

pub use enrollment::{EnrollmentFlow, Phase, Step, PAYMENT_DELAY};
pub use view::EnrollmentView;
