//! Runtime configuration for the enrollment driver, read from the environment.

use envconfig::Envconfig;
use std::time::Duration;

use crate::error::Result;

#[derive(Envconfig, Debug, Clone)]
pub struct AppConfig {
    /// Origin serving `/api/enroll`
    #[envconfig(from = "ENROLL_API_BASE_URL", default = "http://127.0.0.1:3000")]
    pub api_base_url: String,

    /// Simulated payment-gateway latency
    #[envconfig(from = "ENROLL_PAYMENT_DELAY_MS", default = "1000")]
    pub payment_delay_ms: u64,

    /// Stand-in for the session's sign-in state
    #[envconfig(from = "ENROLL_AUTHENTICATED", default = "true")]
    pub authenticated: bool,

    /// Course to enroll in; unset means the enrollment page's stand-in course
    #[envconfig(from = "ENROLL_COURSE_ID")]
    pub course_id: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Ok(Self::init_from_env()?)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }
}
