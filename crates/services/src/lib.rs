#![forbid(unsafe_code)]

pub mod catalog_service;
pub mod error;
pub mod navigation;
pub mod question_service;

pub use api::{AudioAttachment, ImageAttachment};

pub use catalog_service::CatalogService;
pub use error::QuestionServiceError;
pub use navigation::{Command, FetchTag, NavEvent, NavState, Selection, View};
pub use question_service::{QuestionDraft, QuestionService};
