use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AnswerSource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of a successful `/rag/ask` call.
///
/// Unknown fields are ignored and known fields of an unexpected shape read as
/// absent, so a usable `answer` is never lost to a malformed neighbour.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AskResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub improved_answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_steps")]
    pub next_steps: Option<String>,
    #[serde(default, deserialize_with = "lenient_sources")]
    pub sources: Vec<AnswerSource>,
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

/// A single string, or a list whose string items are joined one per line.
fn lenient_steps<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Array(items) => {
            let steps: Vec<String> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(step) => Some(step),
                    _ => None,
                })
                .collect();
            (!steps.is_empty()).then(|| steps.join("\n"))
        }
        _ => None,
    })
}

/// Objects with `title`/`url`, or bare strings taken as urls. Anything else is
/// skipped.
fn lenient_sources<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<AnswerSource>, D::Error> {
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(url) => Some(AnswerSource {
                title: None,
                url: Some(url),
            }),
            Value::Object(_) => serde_json::from_value(item).ok(),
            _ => None,
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlRequest {
    pub domain: String,
    pub depth: u8,
}

/// Body of a successful `/start-crawl` call.
///
/// The count is `docs_updated`; older backends sent it as `docs`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CrawlResponse {
    #[serde(alias = "docs")]
    pub docs_updated: u64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct BackendError {
    pub kind: FailureKind,
    pub message: String,
}

impl BackendError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedResponse,
    Io,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Io => write!(f, "io error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_request_omits_missing_user() {
        let body = serde_json::to_value(AskRequest {
            question: "q".to_string(),
            user_id: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "question": "q" }));
    }

    #[test]
    fn ask_response_ignores_extra_fields() {
        let parsed: AskResponse = serde_json::from_str(
            r#"{"original_query":"q","is_accurate":true,"answer":"a","profile_used":{}}"#,
        )
        .unwrap();
        assert_eq!(parsed.answer.as_deref(), Some("a"));
        assert_eq!(parsed.improved_answer, None);
        assert!(parsed.sources.is_empty());
    }

    #[test]
    fn ask_response_accepts_null_fields() {
        let parsed: AskResponse =
            serde_json::from_str(r#"{"improved_answer":null,"answer":"a"}"#).unwrap();
        assert_eq!(parsed.improved_answer, None);
    }

    #[test]
    fn ask_response_tolerates_odd_extra_fields() {
        let parsed: AskResponse = serde_json::from_str(
            r#"{"answer":"a","improved_answer":{"text":"x"},"sources":[{"title":7},"https://b",3],"next_steps":["one",2,"two"]}"#,
        )
        .unwrap();
        assert_eq!(parsed.answer.as_deref(), Some("a"));
        assert_eq!(parsed.improved_answer, None);
        assert_eq!(parsed.next_steps.as_deref(), Some("one\ntwo"));
        assert_eq!(
            parsed.sources,
            vec![AnswerSource {
                title: None,
                url: Some("https://b".to_string()),
            }]
        );
    }

    #[test]
    fn crawl_response_requires_a_count() {
        assert!(serde_json::from_str::<CrawlResponse>(r#"{"status":"completed"}"#).is_err());
    }

    #[test]
    fn error_display_includes_kind() {
        let err = BackendError::new(FailureKind::HttpStatus(500), "boom");
        assert_eq!(err.to_string(), "http status 500: boom");
    }
}
