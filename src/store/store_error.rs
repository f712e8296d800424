#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("remote store is not configured")]
    Unavailable,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Store API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),
}
