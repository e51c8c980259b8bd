//! Navigation destinations used by the enrollment flow.

pub const SIGN_IN: &str = "/signin";
pub const COURSES: &str = "/courses";

pub fn course_content(course_id: &str) -> String {
    format!("{COURSES}/{course_id}/content")
}
