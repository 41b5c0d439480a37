//! Response decoder for the iTunes Search API JSON payload.
//!
//! Decoding is all-or-nothing: either every entry of `results` carries a
//! `trackName` and an `artistName` and the whole list is returned, or the
//! payload is rejected. [`decode_results`] turns every rejection into an
//! empty list; [`try_decode_results`] reports why.

use serde::Deserialize;

use crate::error::SearchError;
use crate::types::SearchResult;

/// Top-level response envelope. `resultCount` and any other key are ignored.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<RawResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResult {
    track_name: String,
    artist_name: String,
}

impl From<RawResult> for SearchResult {
    fn from(raw: RawResult) -> Self {
        Self {
            title: raw.track_name,
            artist: raw.artist_name,
        }
    }
}

/// Decode a response body, returning an empty list on any malformation.
///
/// Absent bytes, invalid JSON, a missing or non-array `results` field,
/// and entries without string `trackName`/`artistName` all yield `vec![]`.
/// Result order matches the payload.
pub fn decode_results(bytes: Option<&[u8]>) -> Vec<SearchResult> {
    let Some(bytes) = bytes else {
        tracing::debug!("no response body to decode");
        return Vec::new();
    };

    match try_decode_results(bytes) {
        Ok(results) => results,
        Err(err) => {
            tracing::debug!(error = %err, "discarding undecodable search response");
            Vec::new()
        }
    }
}

/// Decode a response body, reporting malformed payloads as
/// [`SearchError::Decode`].
///
/// # Errors
///
/// Returns [`SearchError::Decode`] if `bytes` is not a JSON object with a
/// `results` array whose entries all carry string `trackName` and
/// `artistName` fields.
pub fn try_decode_results(bytes: &[u8]) -> Result<Vec<SearchResult>, SearchError> {
    let response: SearchResponse =
        serde_json::from_slice(bytes).map_err(|e| SearchError::Decode(e.to_string()))?;

    let results: Vec<SearchResult> = response.results.into_iter().map(Into::into).collect();
    tracing::debug!(count = results.len(), "decoded search results");
    Ok(results)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    const GOOD: &str = r#"{
        "resultCount": 2,
        "results": [
            { "trackName": "GarageBand", "artistName": "Apple", "price": 0.0 },
            { "trackName": "Garage Virtual Drumset Band", "artistName": "Nexogen Private Limited" }
        ]
    }"#;

    #[test]
    fn decodes_entries_in_order() {
        let results = decode_results(Some(GOOD.as_bytes()));
        assert_eq!(
            results,
            vec![
                SearchResult::new("GarageBand", "Apple"),
                SearchResult::new("Garage Virtual Drumset Band", "Nexogen Private Limited"),
            ]
        );
    }

    #[test]
    fn result_count_is_optional() {
        let json = r#"{"results":[{"trackName":"Keynote","artistName":"Apple"}]}"#;
        let results = decode_results(Some(json.as_bytes()));
        assert_eq!(results, vec![SearchResult::new("Keynote", "Apple")]);
    }

    #[test]
    fn empty_results_decode_successfully() {
        let json = br#"{"resultCount":0,"results":[]}"#;
        assert!(try_decode_results(json).unwrap().is_empty());
        assert!(decode_results(Some(json)).is_empty());
    }

    #[test]
    fn absent_bytes_yield_empty() {
        assert!(decode_results(None).is_empty());
    }

    #[test]
    fn invalid_json_yields_empty() {
        assert!(decode_results(Some(b"<html>Service Unavailable</html>")).is_empty());
        assert!(decode_results(Some(b"")).is_empty());
    }

    #[test]
    fn missing_results_field_yields_empty() {
        let json = br#"{"resultCount":3}"#;
        assert!(decode_results(Some(json)).is_empty());
        assert!(matches!(
            try_decode_results(json),
            Err(SearchError::Decode(msg)) if msg.contains("results")
        ));
    }

    #[test]
    fn results_as_object_yields_empty() {
        let json = br#"{"resultCount":1,"results":{"trackName":"GarageBand","artistName":"Apple"}}"#;
        assert!(decode_results(Some(json)).is_empty());
        assert!(try_decode_results(json).is_err());
    }

    #[test]
    fn one_malformed_entry_rejects_the_whole_payload() {
        let json = br#"{"resultCount":2,"results":[
            {"trackName":"GarageBand","artistName":"Apple"},
            {"trackName":"No Artist Here"}
        ]}"#;
        assert!(decode_results(Some(json)).is_empty());
    }

    #[test]
    fn wrong_field_type_yields_empty() {
        let json = br#"{"results":[{"trackName":42,"artistName":"Apple"}]}"#;
        assert!(decode_results(Some(json)).is_empty());
    }

    #[test]
    fn top_level_array_yields_empty() {
        assert!(decode_results(Some(br#"[{"trackName":"a","artistName":"b"}]"#)).is_empty());
    }

    #[test]
    fn odd_result_count_values_do_not_reject_results() {
        for count in ["-1", "2.0", "\"2\"", "null", "{}"] {
            let json = format!(
                r#"{{"resultCount":{count},"results":[{{"trackName":"GarageBand","artistName":"Apple"}}]}}"#
            );
            assert_eq!(
                decode_results(Some(json.as_bytes())),
                vec![SearchResult::new("GarageBand", "Apple")],
                "resultCount = {count}"
            );
        }
    }

    #[test]
    fn result_count_mismatch_is_tolerated() {
        let json = br#"{"resultCount":5,"results":[{"trackName":"a","artistName":"b"}]}"#;
        assert_eq!(decode_results(Some(json)).len(), 1);
    }
}
