//! HTTP route handlers for the document translator web application.
//!
//! `/api/*` routes return JSON (or a text attachment for the export);
//! the rest return HTML rendered from Askama templates in the `templates` module.

mod export;
mod pages;
mod translate;
mod upload;

pub use export::export_text;
pub use pages::index;
pub use translate::{translate_api, translate_view};
