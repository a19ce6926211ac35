//! Review aggregation records and shape normalization.
//!
//! The service may answer with a single review object, an array of them,
//! or nothing at all. The raw shape is decoded once, right after the network
//! call, into [`Reviews`]; nothing downstream branches on the wire shape.

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// One review summary as sent by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawReview {
    #[serde(default)]
    pub reviews_message: Option<String>,
    #[serde(default)]
    pub reviews_extended_message: Option<String>,
}

/// Every shape the reviews endpoint has been seen to return.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawReviews {
    Many(Vec<RawReview>),
    One(RawReview),
}

/// Normalized review record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub summary: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Reviews {
    #[default]
    NoReviews,
    Reviews(Vec<ReviewSummary>),
}

impl Reviews {
    pub fn is_empty(&self) -> bool {
        match self {
            Reviews::NoReviews => true,
            Reviews::Reviews(list) => list.is_empty(),
        }
    }

    pub fn summaries(&self) -> &[ReviewSummary] {
        match self {
            Reviews::NoReviews => &[],
            Reviews::Reviews(list) => list,
        }
    }
}

impl RawReview {
    /// `None` when the record carries neither a summary nor details.
    pub fn into_summary(self) -> Option<ReviewSummary> {
        let summary = self.reviews_message.unwrap_or_default();
        let details = self.reviews_extended_message.unwrap_or_default();
        if summary.trim().is_empty() && details.trim().is_empty() {
            return None;
        }
        Some(ReviewSummary { summary, details })
    }
}

/// Normalize an already-decoded raw shape. Entries with neither a summary nor
/// details are dropped; an empty result is `NoReviews`.
pub fn normalize(raw: Option<RawReviews>) -> Reviews {
    let entries = match raw {
        None => return Reviews::NoReviews,
        Some(RawReviews::One(r)) => vec![r],
        Some(RawReviews::Many(list)) => list,
    };
    let list: Vec<ReviewSummary> = entries
        .into_iter()
        .filter_map(RawReview::into_summary)
        .collect();
    if list.is_empty() {
        Reviews::NoReviews
    } else {
        Reviews::Reviews(list)
    }
}

/// Decode a reviews response body. Empty bodies and `null` mean no reviews.
pub fn parse_reviews_body(body: &[u8]) -> Result<Reviews, LookupError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Reviews::NoReviews);
    }
    let raw: Option<RawReviews> = serde_json::from_slice(body)
        .map_err(|e| LookupError::MalformedResponse(format!("reviews: {e}")))?;
    Ok(normalize(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_object_and_one_element_list_are_equivalent() {
        let object = br#"{"reviews_message": "Mostly negative", "reviews_extended_message": "Billing complaints"}"#;
        let list = br#"[{"reviews_message": "Mostly negative", "reviews_extended_message": "Billing complaints"}]"#;
        let a = parse_reviews_body(object).unwrap();
        let b = parse_reviews_body(list).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a,
            Reviews::Reviews(vec![ReviewSummary {
                summary: "Mostly negative".to_string(),
                details: "Billing complaints".to_string(),
            }])
        );
    }

    #[test]
    fn list_keeps_every_entry_in_order() {
        let body = br#"[
            {"reviews_message": "first", "reviews_extended_message": "a"},
            {"reviews_message": "second", "reviews_extended_message": "b"}
        ]"#;
        let reviews = parse_reviews_body(body).unwrap();
        let summaries: Vec<&str> = reviews
            .summaries()
            .iter()
            .map(|r| r.summary.as_str())
            .collect();
        assert_eq!(summaries, vec!["first", "second"]);
    }

    #[test]
    fn absent_shapes_mean_no_reviews() {
        assert_eq!(parse_reviews_body(b"").unwrap(), Reviews::NoReviews);
        assert_eq!(parse_reviews_body(b"  \n").unwrap(), Reviews::NoReviews);
        assert_eq!(parse_reviews_body(b"null").unwrap(), Reviews::NoReviews);
        assert_eq!(parse_reviews_body(b"[]").unwrap(), Reviews::NoReviews);
        assert_eq!(parse_reviews_body(b"{}").unwrap(), Reviews::NoReviews);
    }

    #[test]
    fn missing_extended_message_defaults_to_empty() {
        let reviews = parse_reviews_body(br#"{"reviews_message": "ok"}"#).unwrap();
        assert_eq!(reviews.summaries()[0].details, "");
    }

    #[test]
    fn unexpected_shape_is_malformed() {
        let err = parse_reviews_body(b"42").unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse(_)));
        let err = parse_reviews_body(b"{not json").unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse(_)));
    }
}
