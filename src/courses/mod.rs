//! # Courses
//!
//! The course resource. Courses only carry a title; the student count is
//! internal and never leaves the service.

pub mod model;
pub mod service;

pub use model::{coerce_title, Course, CourseQuery, CourseView};
pub use service::CourseService;
