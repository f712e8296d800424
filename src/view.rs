//! Which overlay is showing on the catalog page.
//!
//! The state travels in the query string (`view`, `listing`) so every link on
//! the page can carry the next state.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Detail {
        listing: String,
    },
    /// `Some(listing)` means the detail view stays open beneath the form.
    Inquiry {
        listing: Option<String>,
    },
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    Select(String),
    RequestInfo,
    OpenContact,
    SubmitSucceeded,
    CloseDetail,
    CloseInquiry,
    CloseSuccess,
}

impl ViewState {
    /// Actions that make no sense in the current state leave it unchanged.
    pub fn apply(self, action: ViewAction) -> ViewState {
        use ViewAction::*;

        match (self, action) {
            (ViewState::Idle | ViewState::Detail { .. }, Select(id)) => {
                ViewState::Detail { listing: id }
            }
            (ViewState::Detail { listing }, RequestInfo | OpenContact) => ViewState::Inquiry {
                listing: Some(listing),
            },
            (ViewState::Inquiry { listing }, OpenContact) => ViewState::Inquiry { listing },
            (_, OpenContact) => ViewState::Inquiry { listing: None },
            (ViewState::Inquiry { .. }, SubmitSucceeded) => ViewState::Success,
            (ViewState::Detail { .. }, CloseDetail) => ViewState::Idle,
            (ViewState::Inquiry { .. }, CloseDetail) => ViewState::Inquiry { listing: None },
            (ViewState::Inquiry { listing: Some(id) }, CloseInquiry) => {
                ViewState::Detail { listing: id }
            }
            (ViewState::Inquiry { listing: None }, CloseInquiry) => ViewState::Idle,
            (ViewState::Success, CloseSuccess) => ViewState::Idle,
            (state, _) => state,
        }
    }

    /// Listing whose detail view is open, if any.
    pub fn selected(&self) -> Option<&str> {
        match self {
            ViewState::Detail { listing } => Some(listing.as_str()),
            ViewState::Inquiry { listing } => listing.as_deref(),
            ViewState::Idle | ViewState::Success => None,
        }
    }

    pub fn inquiry_open(&self) -> bool {
        matches!(self, ViewState::Inquiry { .. })
    }

    pub fn success_open(&self) -> bool {
        matches!(self, ViewState::Success)
    }

    /// Parse the `view` and `listing` query parameters.
    /// Unknown or incomplete combinations fall back to `Idle`.
    pub fn from_params(view: Option<&str>, listing: Option<&str>) -> ViewState {
        let listing = listing
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        match (view.map(str::trim), listing) {
            (Some("detail"), Some(listing)) => ViewState::Detail { listing },
            (Some("inquiry"), listing) => ViewState::Inquiry { listing },
            (Some("success"), _) => ViewState::Success,
            _ => ViewState::Idle,
        }
    }

    /// Inverse of `from_params`; `Idle` has no parameters.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        match self {
            ViewState::Idle => vec![],
            ViewState::Detail { listing } => {
                vec![("view", "detail".to_string()), ("listing", listing.clone())]
            }
            ViewState::Inquiry { listing } => {
                let mut params = vec![("view", "inquiry".to_string())];
                if let Some(listing) = listing {
                    params.push(("listing", listing.clone()));
                }
                params
            }
            ViewState::Success => vec![("view", "success".to_string())],
        }
    }

    /// Drop a selection that does not name a known listing.
    pub fn resolve<F>(self, exists: F) -> ViewState
    where
        F: Fn(&str) -> bool,
    {
        match self {
            ViewState::Detail { listing } if !exists(&listing) => ViewState::Idle,
            ViewState::Inquiry {
                listing: Some(listing),
            } if !exists(&listing) => ViewState::Inquiry { listing: None },
            state => state,
        }
    }
}
