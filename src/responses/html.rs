use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;
use serde::Serialize;

fn with_body(status: u16, content_type: &mime::Mime, body: impl Into<Body>) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", content_type.as_ref())
        .body(body.into())
        .map_err(|_| ServerError::InternalError)
}

pub fn html_response(markup: Markup) -> ResultResp {
    with_body(200, &mime::TEXT_HTML_UTF_8, markup.into_string())
}

pub fn text_response(text: String) -> ResultResp {
    with_body(200, &mime::TEXT_PLAIN_UTF_8, text)
}

pub fn css_response(css: &'static str) -> ResultResp {
    with_body(200, &mime::TEXT_CSS_UTF_8, css)
}

pub fn json_response<T: Serialize>(value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|e| {
        tracing::error!("JSON encoding failed: {e}");
        ServerError::InternalError
    })?;
    with_body(200, &mime::APPLICATION_JSON, body)
}
