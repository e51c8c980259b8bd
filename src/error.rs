pub type Result<T> = core::result::Result<T, Error>;

pub struct Error {
    pub inner: Box<ErrorKind>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(kind),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.inner
    }

    /// Message reported by the enrollment endpoint, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match *self.inner {
            ErrorKind::RequestFailed { ref message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text shown to the user: the server message when present, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

#[cfg(feature = "no-wasm")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::new(ErrorKind::ReqwestError(e))
    }
}

#[cfg(feature = "wasm")]
impl From<gloo_net::Error> for Error {
    fn from(e: gloo_net::Error) -> Error {
        Error::new(ErrorKind::GlooNetError(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::new(ErrorKind::SerdeJsonError(e))
    }
}

impl From<envconfig::Error> for Error {
    fn from(e: envconfig::Error) -> Error {
        Error::new(ErrorKind::ConfigError(e.to_string()))
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(e: log::SetLoggerError) -> Error {
        Error::new(ErrorKind::ConfigError(e.to_string()))
    }
}

pub enum ErrorKind {
    #[cfg(feature = "no-wasm")]
    ReqwestError(reqwest::Error),
    #[cfg(feature = "wasm")]
    GlooNetError(gloo_net::Error),
    SerdeJsonError(serde_json::Error),
    ConfigError(String),
    /// Client-side check failed; never reaches the network.
    ValidationError(String),
    /// The enrollment endpoint answered with a non-2xx status.
    RequestFailed {
        status: u16,
        message: Option<String>,
    },
    /// No course with this id in the catalog.
    CourseNotFound(String),
    /// Another enrollment operation is still in flight.
    InFlight,
    InvalidState(String),
}

impl std::fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "ReqwestError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "GlooNetError: {e:?}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e:?}"),
            ErrorKind::ConfigError(ref e) => write!(f, "ConfigError: {e:?}"),
            ErrorKind::ValidationError(ref e) => write!(f, "ValidationError: {e:?}"),
            ErrorKind::RequestFailed {
                status,
                ref message,
            } => write!(f, "RequestFailed: status={status} message={message:?}"),
            ErrorKind::CourseNotFound(ref id) => write!(f, "CourseNotFound: {id:?}"),
            ErrorKind::InFlight => write!(f, "InFlight"),
            ErrorKind::InvalidState(ref e) => write!(f, "InvalidState: {e:?}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "request error: {e}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "request error: {e}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "invalid JSON: {e}"),
            ErrorKind::ConfigError(ref e) => write!(f, "configuration error: {e}"),
            ErrorKind::ValidationError(ref e) => write!(f, "{e}"),
            ErrorKind::RequestFailed {
                status,
                message: Some(ref m),
            } => write!(f, "enrollment request failed ({status}): {m}"),
            ErrorKind::RequestFailed {
                status,
                message: None,
            } => write!(f, "enrollment request failed ({status})"),
            ErrorKind::CourseNotFound(ref id) => write!(f, "unknown course id: {id}"),
            ErrorKind::InFlight => write!(f, "an enrollment operation is already in progress"),
            ErrorKind::InvalidState(ref e) => write!(f, "invalid state: {e}"),
        }
    }
}
