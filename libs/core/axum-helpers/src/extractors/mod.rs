//! Custom extractors for Axum handlers.
//!
//! Both reject with the `{"errors": [...]}` envelope before the handler runs.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
