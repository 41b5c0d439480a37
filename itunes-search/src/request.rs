//! Request builder: maps a query and category onto an HTTP request.
//!
//! Building is pure and total. The URL is assembled as text from the
//! endpoint and form-urlencoded pairs, so no parse step can fail here; a
//! malformed configured endpoint surfaces later as a transport error.
//! Validation of the query (e.g. rejecting empty strings) is left to the
//! caller.

use reqwest::Method;
use url::{form_urlencoded, Url};

use crate::error::SearchError;
use crate::types::{Category, SearchRequest};

/// The iTunes Search API endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://itunes.apple.com/search";

/// A fully-formed request descriptor handed to a [`crate::Transport`].
///
/// Carries no body and no headers beyond the transport's defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
}

impl HttpRequest {
    /// Parse [`HttpRequest::url`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Transport`] if the URL is not absolute and
    /// well-formed, which only happens with a bad configured endpoint.
    pub fn parsed_url(&self) -> Result<Url, SearchError> {
        Url::parse(&self.url).map_err(|e| SearchError::Transport(format!("invalid request URL: {e}")))
    }
}

/// Build the request for `query` in `category` against [`DEFAULT_ENDPOINT`].
///
/// # Examples
///
/// ```
/// use itunes_search::{request::build_request, Category};
///
/// let request = build_request("GarageBand", Category::Software);
/// assert_eq!(
///     request.url,
///     "https://itunes.apple.com/search?term=GarageBand&entity=software"
/// );
/// ```
pub fn build_request(query: &str, category: Category) -> HttpRequest {
    build_request_for(DEFAULT_ENDPOINT, query, category)
}

/// Build the request for `query` in `category` against `endpoint`.
///
/// Appends `term` and then `entity` to whatever query pairs `endpoint`
/// already has, using form-urlencoding (spaces become `+`).
pub fn build_request_for(endpoint: &str, query: &str, category: Category) -> HttpRequest {
    let pairs = form_urlencoded::Serializer::new(String::new())
        .append_pair("term", query)
        .append_pair("entity", category.as_str())
        .finish();

    let separator = match endpoint.find('?') {
        None => "?",
        Some(_) if endpoint.ends_with('?') || endpoint.ends_with('&') => "",
        Some(_) => "&",
    };

    HttpRequest {
        method: Method::GET,
        url: format!("{endpoint}{separator}{pairs}"),
    }
}

impl SearchRequest {
    /// Turn this search into an HTTP request against `endpoint`.
    pub fn to_http_request(&self, endpoint: &str) -> HttpRequest {
        build_request_for(endpoint, &self.query, self.category)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn default_endpoint_is_absolute() {
        let url = Url::parse(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(url.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn builds_exact_garageband_url() {
        let request = build_request("GarageBand", Category::Software);
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.url,
            "https://itunes.apple.com/search?term=GarageBand&entity=software"
        );
    }

    #[test]
    fn built_url_parses() {
        let request = build_request("GarageBand", Category::Software);
        let url = request.parsed_url().unwrap();
        assert_eq!(url.host_str(), Some("itunes.apple.com"));
        assert_eq!(url.path(), "/search");
    }

    #[test]
    fn term_precedes_entity() {
        let request = build_request("jazz", Category::Song);
        let pairs: Vec<(String, String)> = request
            .parsed_url()
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("term".to_string(), "jazz".to_string()),
                ("entity".to_string(), "song".to_string()),
            ]
        );
    }

    #[test]
    fn query_is_form_encoded() {
        let request = build_request("rock & roll?", Category::Song);
        assert!(request
            .url
            .ends_with("?term=rock+%26+roll%3F&entity=song"));
    }

    #[test]
    fn unicode_query_round_trips_through_encoding() {
        let request = build_request("Björk café", Category::Song);
        assert!(request.url.is_ascii());
        let term = request
            .parsed_url()
            .unwrap()
            .query_pairs()
            .find(|(k, _)| k == "term")
            .map(|(_, v)| v.into_owned());
        assert_eq!(term.as_deref(), Some("Björk café"));
    }

    #[test]
    fn building_is_deterministic() {
        let a = build_request("GarageBand", Category::Software);
        let b = build_request("GarageBand", Category::Software);
        assert_eq!(a, b);
    }

    #[test]
    fn custom_endpoint_keeps_existing_query() {
        let request = build_request_for(
            "http://127.0.0.1:8080/search?country=us",
            "Pages",
            Category::Software,
        );
        assert_eq!(
            request.url,
            "http://127.0.0.1:8080/search?country=us&term=Pages&entity=software"
        );
    }

    #[test]
    fn endpoint_ending_in_question_mark_gets_no_extra_separator() {
        let request = build_request_for("http://127.0.0.1:8080/search?", "Pages", Category::Software);
        assert_eq!(
            request.url,
            "http://127.0.0.1:8080/search?term=Pages&entity=software"
        );
    }

    #[test]
    fn malformed_endpoint_fails_only_on_parse() {
        let request = build_request_for("not a url", "Pages", Category::Software);
        assert!(matches!(
            request.parsed_url(),
            Err(SearchError::Transport(msg)) if msg.contains("invalid request URL")
        ));
    }

    #[test]
    fn search_request_converts_to_http_request() {
        let search = SearchRequest::new("GarageBand", Category::Software);
        let request = search.to_http_request(DEFAULT_ENDPOINT);
        assert_eq!(request, build_request("GarageBand", Category::Software));
    }
}
