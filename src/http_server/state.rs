//! Shared application state
//!
//! One instance per router. Tests build their own so scenarios never share
//! records.

use std::sync::Arc;

use crate::courses::CourseService;
use crate::errors::ApiResult;
use crate::store::IdGenerator;
use crate::videos::VideoService;

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub courses: CourseService,
    pub videos: VideoService,
}

impl AppState {
    /// Empty collections
    pub fn new() -> Self {
        let ids = Arc::new(IdGenerator::new());
        Self {
            courses: CourseService::in_memory(Arc::clone(&ids)),
            videos: VideoService::in_memory(ids),
        }
    }

    /// Courses start with the demo catalogue, videos empty
    pub fn with_demo_courses() -> Self {
        let ids = Arc::new(IdGenerator::new());
        Self {
            courses: CourseService::with_demo_catalog(Arc::clone(&ids)),
            videos: VideoService::in_memory(ids),
        }
    }

    /// Wipe every collection
    pub fn clear_all(&self) -> ApiResult<()> {
        self.courses.clear()?;
        self.videos.clear()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
