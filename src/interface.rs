#![allow(async_fn_in_trait)] // 允许在内部 trait 中使用 async fn

use crate::error::Result;
use crate::model::dtos::EnrollParams;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance rooted at `base_url`
    async fn new(base_url: &str) -> Result<Self>
    where
        Self: Sized;
}

/// The enrollment endpoint
pub trait EnrollApi {
    /// `POST /api/enroll`; any 2xx is success
    async fn enroll(&self, params: EnrollParams) -> Result<()>;
}

/// Authentication collaborator
pub trait AuthState {
    fn is_authenticated(&self) -> bool;
}

/// Navigation collaborator
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl AuthState for bool {
    fn is_authenticated(&self) -> bool {
        *self
    }
}

impl<T: EnrollApi> EnrollApi for &T {
    async fn enroll(&self, params: EnrollParams) -> Result<()> {
        (**self).enroll(params).await
    }
}

impl<T: AuthState + ?Sized> AuthState for &T {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}
