//! # Course Service

use std::sync::Arc;

use serde_json::Value;

use crate::errors::{ApiError, ApiResult};
use crate::observability::{log_event_with_fields, Event};
use crate::store::{parse_id, IdGenerator, InMemoryStore, RecordStore};

use super::model::{coerce_title, Course, CourseView};

const COLLECTION: &str = "courses";

/// Course operations over an injected store
#[derive(Clone)]
pub struct CourseService {
    store: Arc<dyn RecordStore<Course>>,
    ids: Arc<IdGenerator>,
}

impl CourseService {
    pub fn new(store: Arc<dyn RecordStore<Course>>, ids: Arc<IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Service over a fresh, empty in-memory store
    pub fn in_memory(ids: Arc<IdGenerator>) -> Self {
        Self::new(Arc::new(InMemoryStore::new(COLLECTION)), ids)
    }

    /// Service over an in-memory store holding the demo catalogue
    pub fn with_demo_catalog(ids: Arc<IdGenerator>) -> Self {
        let store = InMemoryStore::with_records(COLLECTION, Course::demo_catalog());
        Self::new(Arc::new(store), ids)
    }

    /// Underlying store
    pub fn store(&self) -> &dyn RecordStore<Course> {
        self.store.as_ref()
    }

    /// Courses whose title contains `title` (all when empty or absent)
    pub fn list(&self, title: Option<&str>) -> ApiResult<Vec<CourseView>> {
        let needle = title.unwrap_or_default();
        Ok(self
            .store
            .list()?
            .iter()
            .filter(|c| c.title.contains(needle))
            .map(CourseView::from)
            .collect())
    }

    pub fn get(&self, raw_id: &str) -> ApiResult<CourseView> {
        let id = parse_id(raw_id).ok_or(ApiError::NotFound)?;
        self.store
            .find_by_id(id)?
            .map(|course| CourseView::from(&course))
            .ok_or(ApiError::NotFound)
    }

    pub fn create(&self, body: Option<&Value>) -> ApiResult<CourseView> {
        let title = coerce_title(body).ok_or(ApiError::BadRequest)?;
        let course = Course::new(self.ids.next_id(), title);
        self.store.insert(course.clone())?;

        log_event_with_fields(
            Event::RecordCreated,
            &[("collection", COLLECTION), ("id", &course.id.to_string())],
        );
        Ok(CourseView::from(&course))
    }

    /// Rename a course. The title is checked before the id is resolved.
    pub fn update(&self, raw_id: &str, body: Option<&Value>) -> ApiResult<CourseView> {
        let title = coerce_title(body).ok_or(ApiError::BadRequest)?;
        let id = parse_id(raw_id).ok_or(ApiError::NotFound)?;

        let course = self
            .store
            .update(id, &mut |course: &mut Course| course.title = title.clone())?
            .ok_or(ApiError::NotFound)?;

        log_event_with_fields(
            Event::RecordUpdated,
            &[("collection", COLLECTION), ("id", &id.to_string())],
        );
        Ok(CourseView::from(&course))
    }

    pub fn delete(&self, raw_id: &str) -> ApiResult<()> {
        let id = parse_id(raw_id).ok_or(ApiError::NotFound)?;
        if !self.store.remove_by_id(id)? {
            return Err(ApiError::NotFound);
        }
        log_event_with_fields(
            Event::RecordDeleted,
            &[("collection", COLLECTION), ("id", &id.to_string())],
        );
        Ok(())
    }

    /// Drop every course
    pub fn clear(&self) -> ApiResult<()> {
        self.store.clear()?;
        log_event_with_fields(Event::StoreCleared, &[("collection", COLLECTION)]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> CourseService {
        CourseService::in_memory(Arc::new(IdGenerator::starting_at(100)))
    }

    #[test]
    fn test_create_starts_with_zero_students() {
        let service = service();
        let view = service.create(Some(&json!({"title": "it-incubator course"}))).unwrap();

        assert_eq!(view.title, "it-incubator course");
        let stored = service.store().find_by_id(view.id).unwrap().unwrap();
        assert_eq!(stored.students_count, 0);
    }

    #[test]
    fn test_create_rejects_missing_title() {
        let service = service();
        assert!(matches!(service.create(Some(&json!({"title": ""}))), Err(ApiError::BadRequest)));
        assert!(matches!(service.create(None), Err(ApiError::BadRequest)));
        assert!(service.list(None).unwrap().is_empty());
    }

    #[test]
    fn test_list_filters_by_substring() {
        let service = CourseService::with_demo_catalog(Arc::new(IdGenerator::starting_at(100)));

        let titles = |filter: Option<&str>| -> Vec<String> {
            service.list(filter).unwrap().into_iter().map(|c| c.title).collect()
        };

        assert_eq!(titles(None).len(), 4);
        assert_eq!(titles(Some("")).len(), 4);
        assert_eq!(titles(Some("end")), vec!["frontend", "backend"]);
        assert!(titles(Some("END")).is_empty());
    }

    #[test]
    fn test_update_keeps_students_count() {
        let service = CourseService::with_demo_catalog(Arc::new(IdGenerator::starting_at(100)));
        let view = service.update("1", Some(&json!({"title": "web"}))).unwrap();

        assert_eq!(view, CourseView { id: 1, title: "web".to_string() });
        assert_eq!(service.store().find_by_id(1).unwrap().unwrap().students_count, 10);
    }

    #[test]
    fn test_update_order_of_checks() {
        let service = service();
        assert!(matches!(
            service.update("999999", Some(&json!({"title": ""}))),
            Err(ApiError::BadRequest)
        ));
        assert!(matches!(
            service.update("999999", Some(&json!({"title": "x"}))),
            Err(ApiError::NotFound)
        ));
        assert!(matches!(
            service.update("incorrectId", Some(&json!({"title": "x"}))),
            Err(ApiError::NotFound)
        ));
    }

    #[test]
    fn test_delete_twice() {
        let service = service();
        let view = service.create(Some(&json!({"title": "a"}))).unwrap();
        let id = view.id.to_string();

        service.delete(&id).unwrap();
        assert!(matches!(service.delete(&id), Err(ApiError::NotFound)));
        assert!(matches!(service.get(&id), Err(ApiError::NotFound)));
    }
}
