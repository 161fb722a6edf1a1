//! Page routes - the landing page.

use axum::extract::State;
use std::sync::Arc;

use crate::state::AppState;
use crate::templates::IndexTemplate;

/// Landing page with upload form.
pub async fn index(State(state): State<Arc<AppState>>) -> IndexTemplate {
    let paging = state.config().paging;
    IndexTemplate::new(paging.chars_per_page, paging.max_pages)
}
