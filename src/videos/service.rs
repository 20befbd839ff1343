//! # Video Service
//!
//! Resource lifecycle for videos: validate, touch the store, map to views.

use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use serde_json::Value;

use crate::errors::{ApiError, ApiResult};
use crate::observability::{log_event_with_fields, Event};
use crate::store::{parse_id, IdGenerator, InMemoryStore, RecordStore};

use super::model::{Video, VideoView};
use super::validator::{validate_create, validate_update};

const COLLECTION: &str = "videos";

/// Video operations over an injected store
#[derive(Clone)]
pub struct VideoService {
    store: Arc<dyn RecordStore<Video>>,
    ids: Arc<IdGenerator>,
}

impl VideoService {
    pub fn new(store: Arc<dyn RecordStore<Video>>, ids: Arc<IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Service over a fresh, empty in-memory store
    pub fn in_memory(ids: Arc<IdGenerator>) -> Self {
        Self::new(Arc::new(InMemoryStore::new(COLLECTION)), ids)
    }

    /// Underlying store
    pub fn store(&self) -> &dyn RecordStore<Video> {
        self.store.as_ref()
    }

    /// All videos, unfiltered
    pub fn list(&self) -> ApiResult<Vec<VideoView>> {
        Ok(self.store.list()?.iter().map(VideoView::from).collect())
    }

    /// One video by raw path id
    pub fn get(&self, raw_id: &str) -> ApiResult<VideoView> {
        let id = parse_id(raw_id).ok_or(ApiError::NotFound)?;
        self.store
            .find_by_id(id)?
            .map(|video| VideoView::from(&video))
            .ok_or(ApiError::NotFound)
    }

    /// Validate and insert a new video.
    ///
    /// `publicationDate` starts equal to `createdAt`.
    pub fn create(&self, body: &Value) -> ApiResult<VideoView> {
        let input = validate_create(body)?;
        let now = Utc::now().trunc_subsecs(3);

        let video = Video {
            id: self.ids.next_id(),
            title: input.title,
            author: input.author,
            can_be_downloaded: false,
            min_age_restriction: None,
            created_at: now,
            publication_date: now,
            available_resolutions: input.available_resolutions,
        };
        self.store.insert(video.clone())?;

        log_event_with_fields(
            Event::RecordCreated,
            &[("collection", COLLECTION), ("id", &video.id.to_string())],
        );
        Ok(VideoView::from(&video))
    }

    /// Validate, then replace every mutable field. Validation runs before
    /// the lookup, so an invalid body for a missing id is a 400.
    pub fn update(&self, raw_id: &str, body: &Value) -> ApiResult<()> {
        let input = validate_update(body)?;
        let id = parse_id(raw_id).ok_or(ApiError::NotFound)?;

        let updated = self.store.update(id, &mut |video: &mut Video| {
            video.title = input.title.clone();
            video.author = input.author.clone();
            video.available_resolutions = input.available_resolutions.clone();
            video.can_be_downloaded = input.can_be_downloaded;
            video.min_age_restriction = input.min_age_restriction;
            video.publication_date = input.publication_date;
        })?;

        if updated.is_none() {
            return Err(ApiError::NotFound);
        }
        log_event_with_fields(
            Event::RecordUpdated,
            &[("collection", COLLECTION), ("id", &id.to_string())],
        );
        Ok(())
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

    /// Drop every video
    pub fn clear(&self) -> ApiResult<()> {
        self.store.clear()?;
        log_event_with_fields(Event::StoreCleared, &[("collection", COLLECTION)]);
        Ok(())
    }
}
