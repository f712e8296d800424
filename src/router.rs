use crate::domain::inquiry::SUBMIT_FAILED_MESSAGE;
use crate::domain::{apply_filters, InquiryForm};
use crate::errors::ServerError;
use crate::params::{parse_pairs, PageParams};
use crate::responses::{
    css_response, html_response, json_response, redirect_response, text_response, ResultResp,
};
use crate::state::AppState;
use crate::templates::components::InquiryVm;
use crate::templates::pages::{home_page, HomeVm};
use crate::view::{ViewAction, ViewState};
use astra::Request;
use chrono::Utc;
use std::collections::HashMap;
use std::io::Read;

const MAX_FORM_BYTES: u64 = 64 * 1024;
pub(crate) const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => catalog_page(PageParams::from_query(query.as_deref()), state, None),
        ("POST", "/inquiries") => submit_inquiry(req, state),
        ("GET", "/api/listings") => listings_json(PageParams::from_query(query.as_deref()), state),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        ("GET", "/health") => text_response(format!("ok ({} catalog)", state.catalog.origin().as_str())),
        _ => Err(ServerError::NotFound),
    }
}

/// Render the catalog with whatever overlay `params.view` names.
/// `inquiry` carries input and error back into an open form.
fn catalog_page<'a>(
    params: PageParams,
    state: &'a AppState,
    inquiry: Option<InquiryVm<'a>>,
) -> ResultResp {
    let catalog = &state.catalog;
    let view = params
        .view
        .clone()
        .resolve(|id| catalog.get(id).is_some());
    let params = params.with_view(view);

    let selected = params.view.selected().and_then(|id| catalog.get(id));

    let inquiry = if params.view.inquiry_open() {
        Some(inquiry.unwrap_or_else(|| {
            let title = selected.map(|l| l.title.as_str());
            InquiryVm {
                form: InquiryForm::for_listing(selected.map(|l| l.id.as_str()), title),
                listing_title: title,
                error: None,
            }
        }))
    } else {
        None
    };

    let vm = HomeVm {
        params: &params,
        listings: apply_filters(catalog.listings(), &params.search, &params.criteria),
        property_types: catalog.property_types(),
        selected,
        inquiry,
    };

    html_response(home_page(&vm))
}

fn listings_json(params: PageParams, state: &AppState) -> ResultResp {
    let listings = apply_filters(state.catalog.listings(), &params.search, &params.criteria);
    json_response(&listings)
}

/// Read at most `MAX_FORM_BYTES`. A longer body is rejected, never cut.
fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = req.into_body();
    let mut raw = Vec::new();
    body.reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }

    let raw = String::from_utf8(raw)
        .map_err(|_| ServerError::BadRequest("form body is not valid UTF-8".into()))?;
    Ok(parse_pairs(&raw))
}

fn submit_inquiry(req: Request, state: &AppState) -> ResultResp {
    let fields = read_form(req)?;
    let field = |k: &str| fields.get(k).cloned().unwrap_or_default();

    // The form posts the page's filters alongside its own fields.
    let page = PageParams::from_pairs(&fields);
    let listing = fields
        .get("listing_id")
        .and_then(|id| state.catalog.get(id.trim()));

    let form = InquiryForm {
        listing_id: listing.map(|l| l.id.clone()),
        name: field("name"),
        email: field("email"),
        phone: field("phone"),
        message: field("message"),
    };

    let open_form = page.with_view(ViewState::Inquiry {
        listing: form.listing_id.clone(),
    });
    let rerender = |error: String| {
        let vm = InquiryVm {
            form: form.clone(),
            listing_title: listing.map(|l| l.title.as_str()),
            error: Some(error),
        };
        catalog_page(open_form.clone(), state, Some(vm))
    };

    let record = match form.validate(Utc::now()) {
        Ok(record) => record,
        Err(e) => {
            tracing::debug!("Inquiry rejected by validation: {e}");
            return rerender(e.to_string());
        }
    };

    if let Err(e) = state.store.insert_inquiry(&record) {
        tracing::error!("Error submitting inquiry: {e}");
        return rerender(SUBMIT_FAILED_MESSAGE.to_string());
    }

    tracing::info!(
        listing = record.property_id.as_deref().unwrap_or("-"),
        "Inquiry submitted"
    );

    let done = open_form.view.clone().apply(ViewAction::SubmitSucceeded);
    redirect_response(&page.with_view(done).href())
}
