// params.rs
use crate::domain::FilterCriteria;
use crate::view::ViewState;
use std::collections::HashMap;
use url::form_urlencoded;

/// Everything the catalog page needs from its URL: search text,
/// structured filters and the open view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageParams {
    pub search: String,
    pub criteria: FilterCriteria,
    pub view: ViewState,
}

/// Decode an `application/x-www-form-urlencoded` string (query or body).
/// Later duplicates win.
pub fn parse_pairs(encoded: &str) -> HashMap<String, String> {
    form_urlencoded::parse(encoded.as_bytes())
        .into_owned()
        .collect()
}

impl PageParams {
    pub fn from_query(query: Option<&str>) -> Self {
        Self::from_pairs(&parse_pairs(query.unwrap_or("")))
    }

    pub fn from_pairs(map: &HashMap<String, String>) -> Self {
        let get = |k: &str| map.get(k).cloned().unwrap_or_default();

        Self {
            search: get("q"),
            criteria: FilterCriteria {
                min_price: get("min_price"),
                max_price: get("max_price"),
                bedrooms: get("bedrooms"),
                property_type: get("property_type"),
            },
            view: ViewState::from_params(
                map.get("view").map(String::as_str),
                map.get("listing").map(String::as_str),
            ),
        }
    }

    pub fn with_view(&self, view: ViewState) -> Self {
        Self {
            view,
            ..self.clone()
        }
    }

    /// Search and filter pairs, skipping blanks. Used for hidden form fields.
    pub fn filter_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("q", self.search.as_str()),
            ("min_price", self.criteria.min_price.as_str()),
            ("max_price", self.criteria.max_price.as_str()),
            ("bedrooms", self.criteria.bedrooms.as_str()),
            ("property_type", self.criteria.property_type.as_str()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .collect()
    }

    pub fn to_query(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.filter_pairs() {
            ser.append_pair(k, v);
        }
        for (k, v) in self.view.to_params() {
            ser.append_pair(k, &v);
        }
        ser.finish()
    }

    /// Link to the catalog page in this state.
    pub fn href(&self) -> String {
        let query = self.to_query();
        if query.is_empty() {
            "/".to_string()
        } else {
            format!("/?{query}")
        }
    }

    /// Same view, filters cleared.
    pub fn cleared(&self) -> Self {
        Self {
            view: self.view.clone(),
            ..Self::default()
        }
    }
}
