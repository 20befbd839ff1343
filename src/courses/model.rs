//! # Course Model

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::store::Record;

/// A stored course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub title: String,
    /// Internal; not part of the view
    pub students_count: i64,
}

impl Course {
    /// A freshly created course has no students
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            students_count: 0,
        }
    }

    /// Fixed demo catalogue, ids 1-4
    pub fn demo_catalog() -> Vec<Course> {
        [("frontend", 10), ("backend", 4), ("q/a", 9), ("devops", 2)]
            .into_iter()
            .zip(1..)
            .map(|((title, students_count), id)| Course {
                id,
                title: title.to_string(),
                students_count,
            })
            .collect()
    }
}

impl Record for Course {
    fn id(&self) -> i64 {
        self.id
    }
}

/// External representation of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseView {
    pub id: i64,
    pub title: String,
}

impl From<&Course> for CourseView {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
        }
    }
}

/// Query string of `GET /courses`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseQuery {
    /// Case-sensitive substring filter on the title
    #[serde(default)]
    pub title: Option<String>,
}

/// Pull a usable title out of a create/update body.
///
/// Strings are taken as is, numbers and booleans by their textual form.
/// Missing, null, array and object values, and the empty string, give `None`.
pub fn coerce_title(body: Option<&Value>) -> Option<String> {
    let title = match body?.get("title")? {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    (!title.is_empty()).then_some(title)
}

/// Integral floats render without a fraction (`1.0` becomes `"1"`).
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}
