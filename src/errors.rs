use astra::Response;
// errors.rs

/// Errors originating from the server logic
/// (routing, malformed requests, response building).
///
/// Store failures never surface here: the catalog falls back and inquiry
/// failures are rendered back into the form.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
