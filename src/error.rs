use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::pages;
use crate::loader::LoadError;

/// Anything that stops a browser navigation from producing a page.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),

    /// The path does not name a chapter or op (non-numeric segment, too deep)
    #[error("no page at {0}")]
    NoSuchPage(String),
}

impl ViewerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ViewerError::Load(e) => e.source.status_code(),
            ViewerError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ViewerError::NoSuchPage(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ViewerError::Load(e) => e.source.user_message(),
            ViewerError::Render(_) => "page could not be rendered".to_string(),
            ViewerError::NoSuchPage(_) => "no such page".to_string(),
        }
    }
}

impl IntoResponse for ViewerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Failed loads were already logged by the loader
        if let ViewerError::Render(e) = &self {
            log::error!("failed to render page: {}", e);
        }
        let page = pages::render_error_page(status, &self.user_message(), &self.to_string());
        (status, page).into_response()
    }
}
