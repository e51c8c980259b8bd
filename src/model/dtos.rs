use serde::{Deserialize, Serialize};

/// Parameters for an enrollment request
#[derive(Debug, Clone)]
pub struct EnrollParams {
    pub course_id: String,
}

/// JSON body of `POST /api/enroll`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrollRequestBody {
    #[serde(rename = "courseId")]
    pub course_id: String,
}

impl From<&EnrollParams> for EnrollRequestBody {
    fn from(params: &EnrollParams) -> Self {
        Self {
            course_id: params.course_id.clone(),
        }
    }
}

/// Error payload the endpoint may send back with a non-2xx status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extracts `message` from a raw response body; anything unparsable yields `None`.
    pub fn message_from(text: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(text)
            .ok()
            .and_then(|body| body.message)
    }
}
