//! Core types for search results and category identification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// A single item returned by the iTunes Search API.
///
/// Only the fields the decoder extracts are kept; everything else in the
/// upstream payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Item name (`trackName` upstream).
    pub title: String,
    /// Artist, developer or publisher (`artistName` upstream).
    pub artist: String,
}

impl SearchResult {
    /// Build a result from its title and artist.
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }
}

/// Entity kinds the search can be filtered by.
///
/// Serialises to the lowercase token the API expects as the `entity`
/// query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Apps for iOS and macOS.
    Software,
    /// Individual music tracks.
    Song,
    /// Feature films.
    Movie,
    /// Podcast shows.
    Podcast,
    /// Books.
    Ebook,
}

impl Category {
    /// Returns the `entity` token sent to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Software => "software",
            Self::Song => "song",
            Self::Movie => "movie",
            Self::Podcast => "podcast",
            Self::Ebook => "ebook",
        }
    }

    /// Returns all available category variants.
    pub fn all() -> &'static [Category] {
        &[
            Self::Software,
            Self::Song,
            Self::Movie,
            Self::Podcast,
            Self::Ebook,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SearchError::Config(format!("unknown category: {wanted}")))
    }
}

/// A single search: what to look for and in which category.
///
/// Built per call and turned into an HTTP request by
/// [`SearchRequest::to_http_request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub category: Category,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, category: Category) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }
}
