pub mod errors;
pub mod html;
pub mod redirect;

pub use errors::{html_error_response, ResultResp};

// Normal HTML response
pub use html::{css_response, html_response, json_response, text_response};
pub use redirect::redirect_response;
