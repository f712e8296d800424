// rest.rs
use crate::config::StoreCredentials;
use crate::domain::{Listing, NewInquiry};
use crate::store::{ListingStore, StoreError};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use std::time::Duration;
use url::Url;

const LISTINGS_TABLE: &str = "properties";
const INQUIRIES_TABLE: &str = "inquiries";

/// Client for a PostgREST endpoint (`{url}/rest/v1/{table}`).
pub struct RestStore {
    client: Client,
    base: Url,
}

impl RestStore {
    pub fn new(creds: &StoreCredentials) -> Result<Self, StoreError> {
        let client = Client::builder()
            .default_headers(auth_headers(&creds.anon_key)?)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base: creds.url.clone(),
        })
    }

    pub fn listings_url(&self) -> Result<Url, StoreError> {
        let mut url = table_url(&self.base, LISTINGS_TABLE)?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("status", "eq.for_sale")
            .append_pair("order", "created_at.desc");
        Ok(url)
    }

    pub fn inquiries_url(&self) -> Result<Url, StoreError> {
        table_url(&self.base, INQUIRIES_TABLE)
    }
}

fn auth_headers(anon_key: &str) -> Result<HeaderMap, StoreError> {
    let key = HeaderValue::from_str(anon_key)
        .map_err(|_| StoreError::Decode("access key is not a valid header value".into()))?;
    let bearer = HeaderValue::from_str(&format!("Bearer {anon_key}"))
        .map_err(|_| StoreError::Decode("access key is not a valid header value".into()))?;

    let mut headers = HeaderMap::new();
    headers.insert("apikey", key);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn table_url(base: &Url, table: &str) -> Result<Url, StoreError> {
    let root = format!("{}/rest/v1/{table}", base.as_str().trim_end_matches('/'));
    Url::parse(&root).map_err(|e| StoreError::Decode(format!("bad store URL {root}: {e}")))
}

/// Turn a non-2xx response into `StoreError::Api`, keeping the body text.
fn check_status(resp: Response) -> Result<Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
    Err(StoreError::Api {
        status: status.as_u16(),
        body,
    })
}

impl ListingStore for RestStore {
    fn fetch_for_sale(&self) -> Result<Vec<Listing>, StoreError> {
        let resp = self
            .client
            .get(self.listings_url()?)
            .send()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        check_status(resp)?
            .json::<Vec<Listing>>()
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    fn insert_inquiry(&self, inquiry: &NewInquiry) -> Result<(), StoreError> {
        let resp = self
            .client
            .post(self.inquiries_url()?)
            .header("Prefer", "return=minimal")
            .json(inquiry)
            .send()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        check_status(resp)?;
        Ok(())
    }
}
