//! Course data provider
//!
//! The landing page lists a fixed set of courses; the enrollment page works
//! on a single stand-in record until a real course service exists. Both can
//! be replaced by building a [`CourseCatalog`] from injected records.

use crate::error::{ErrorKind, Result};
use crate::model::structs::Course;

#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Courses shown on the landing page.
    pub fn landing() -> Self {
        let entries: [(&str, &str, u32, &str); 8] = [
            ("1", "Product Design", 299, "Craft Stunning Websites with Creativity & Code!"),
            ("2", "Web Designing", 249, "Craft Stunning Websites with Creativity & Code!"),
            ("3", "Software Development", 249, "Build Powerful Software for a Digital Future!"),
            ("4", "Copywriting", 299, "Write Words That Sell, Inspire, and Engage!"),
            ("5", "Music Production", 189, "Turn Your Sound into a Masterpiece!"),
            ("6", "Operating System", 199, "Master the Backbone of Modern Computing!"),
            ("7", "UI/UX Designing", 179, "Create Seamless Experiences with Stunning Designs!"),
            ("8", "Video Editing", 145, ""),
        ];

        Self::new(
            entries
                .into_iter()
                .map(|(id, title, price, body)| Course::new(id, title, price).with_body(body))
                .collect(),
        )
    }

    /// The record the enrollment page uses regardless of the requested id.
    pub fn enrollment_stand_in() -> Course {
        Course::new("1", "Web Development Bootcamp", 299)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn find(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn get(&self, id: &str) -> Result<&Course> {
        self.find(id)
            .ok_or_else(|| ErrorKind::CourseNotFound(id.to_string()).into())
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
