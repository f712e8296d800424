// src/domain/inquiry.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit inquiry. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    New,
}

/// The record inserted into the `inquiries` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInquiry {
    pub property_id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

/// Raw form input, kept verbatim so it can be re-rendered on failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryForm {
    pub listing_id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InquiryError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a message.")]
    MissingMessage,
}

/// Message placed in the form when it is opened from a listing.
pub fn default_message(listing_title: Option<&str>) -> String {
    match listing_title {
        Some(title) => format!("I'm interested in learning more about {title}."),
        None => String::new(),
    }
}

impl InquiryForm {
    pub fn for_listing(listing_id: Option<&str>, listing_title: Option<&str>) -> Self {
        Self {
            listing_id: listing_id.map(str::to_string),
            message: default_message(listing_title),
            ..Self::default()
        }
    }

    /// Check required fields and build the record to insert.
    /// Nothing is sent anywhere unless this succeeds.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<NewInquiry, InquiryError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(InquiryError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(InquiryError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(InquiryError::InvalidEmail);
        }

        let message = self.message.trim();
        if message.is_empty() {
            return Err(InquiryError::MissingMessage);
        }

        let phone = Some(self.phone.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        let property_id = self
            .listing_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        Ok(NewInquiry {
            property_id,
            name: name.to_string(),
            email: email.to_string(),
            phone,
            message: message.to_string(),
            status: InquiryStatus::New,
            created_at: now,
        })
    }
}

/// One '@' with something on both sides and no whitespace.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
