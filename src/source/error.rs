use axum::http::StatusCode;

/// Why a request to the cache server failed.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Connection refused, timed out, or the body could not be read
    #[error("cache server unreachable at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("resource not found: {url}")]
    NotFound { url: String },

    #[error("cache server returned {status} for {url}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON shape the data contract declares
    #[error("unexpected response shape from {url}: {source}")]
    ShapeMismatch {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Unreachable { .. } => "unreachable",
            SourceError::NotFound { .. } => "not_found",
            SourceError::Status { .. } => "status",
            SourceError::ShapeMismatch { .. } => "shape_mismatch",
        }
    }

    /// Status the viewer answers the browser with
    pub fn status_code(&self) -> StatusCode {
        match self {
            SourceError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            SourceError::Unreachable { .. } => "cache server unreachable".to_string(),
            SourceError::NotFound { .. } => "resource not found".to_string(),
            SourceError::Status { status, .. } => format!("cache server returned {}", status),
            SourceError::ShapeMismatch { .. } => "unexpected response shape".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_map_to_distinct_messages() {
        let shape = serde_json::from_str::<u64>("\"x\"").unwrap_err();
        let errors = vec![
            SourceError::Unreachable {
                url: "http://127.0.0.1:8000/chapters".to_string(),
                reason: "connection refused".to_string(),
            },
            SourceError::NotFound {
                url: "http://127.0.0.1:8000/chapters/3".to_string(),
            },
            SourceError::Status {
                url: "http://127.0.0.1:8000/chapters".to_string(),
                status: 500,
            },
            SourceError::ShapeMismatch {
                url: "http://127.0.0.1:8000/chapters".to_string(),
                source: shape,
            },
        ];

        let statuses: Vec<StatusCode> = errors.iter().map(|e| e.status_code()).collect();
        assert_eq!(
            statuses,
            vec![
                StatusCode::BAD_GATEWAY,
                StatusCode::NOT_FOUND,
                StatusCode::BAD_GATEWAY,
                StatusCode::BAD_GATEWAY,
            ]
        );

        let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
        assert_eq!(
            messages,
            vec![
                "cache server unreachable",
                "resource not found",
                "cache server returned 500",
                "unexpected response shape",
            ]
        );

        assert_eq!(
            errors[1].to_string(),
            "resource not found: http://127.0.0.1:8000/chapters/3"
        );
        assert_eq!(errors[3].kind(), "shape_mismatch");
    }
}
