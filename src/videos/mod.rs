//! # Videos
//!
//! The video resource: model, payload validation and lifecycle service.

pub mod model;
pub mod service;
pub mod validator;

pub use model::{Resolution, Video, VideoView};
pub use service::VideoService;
pub use validator::{
    validate_create, validate_update, CreateVideoInput, FieldError, UpdateVideoInput,
    ValidationErrors,
};
