//! The Success/Failure envelope around transport outcomes.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::Value;
use crate::results::get::GetResult;
use crate::results::query::QueryResult;

/// Message used when an outcome is neither the expected value nor a
/// structured error.
pub const UNKNOWN_ERROR: &str = "Unknown";

/// One entry of a structured API error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(default)]
    pub loc: Vec<Value>,
    #[serde(default)]
    pub msg: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl ValidationError {
    pub fn with_msg(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            ..Self::default()
        }
    }
}

/// A structured error returned by the database API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpValidationError {
    #[serde(default)]
    pub detail: Vec<ValidationError>,
}

impl HttpValidationError {
    /// An error with a single detail carrying `msg`.
    pub fn with_msg(msg: impl Into<String>) -> Self {
        Self::default().add_detail(ValidationError::with_msg(msg))
    }

    pub fn add_detail(mut self, detail: ValidationError) -> Self {
        self.detail.push(detail);
        self
    }

    /// Messages of every detail, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.detail.iter().map(|d| d.msg.as_str())
    }
}

impl fmt::Display for HttpValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.messages().collect();
        write!(f, "HttpValidationError{{detail=[{}]}}", messages.join(", "))
    }
}

/// What a transport produced for a call.
#[derive(Debug, Clone, PartialEq)]
pub enum RawOutcome {
    /// A decoded JSON value.
    Value(serde_json::Value),
    /// A JSON document still in text form.
    Text(String),
    /// A structured API error.
    Error(HttpValidationError),
    /// No body, as returned by update and upsert.
    Empty,
}

/// Native values a [`RawOutcome`] can carry directly.
pub trait FromJson: Sized {
    fn from_json(value: &serde_json::Value) -> Option<Self>;
}

impl FromJson for bool {
    fn from_json(value: &serde_json::Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromJson for i64 {
    fn from_json(value: &serde_json::Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FromJson for String {
    fn from_json(value: &serde_json::Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromJson for Vec<String> {
    fn from_json(value: &serde_json::Value) -> Option<Self> {
        value
            .as_array()?
            .iter()
            .map(|v| v.as_str().map(str::to_owned))
            .collect()
    }
}

/// Either the expected payload or a structured error.
///
/// Structured errors are values, not `Err`: the caller decides how to react
/// to a rejected request.
#[derive(Debug, Clone, PartialEq)]
pub enum Response<T> {
    Success(T),
    Failure(HttpValidationError),
}

impl<T> Response<T> {
    /// A failure with a single detail carrying `msg`.
    pub fn failed(msg: impl Into<String>) -> Self {
        Response::Failure(HttpValidationError::with_msg(msg))
    }

    fn unknown() -> Self {
        Self::failed(UNKNOWN_ERROR)
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Response::Success(payload) => Some(payload),
            Response::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&HttpValidationError> {
        match self {
            Response::Success(_) => None,
            Response::Failure(error) => Some(error),
        }
    }

    pub fn into_payload(self) -> Option<T> {
        match self {
            Response::Success(payload) => Some(payload),
            Response::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> std::result::Result<T, HttpValidationError> {
        match self {
            Response::Success(payload) => Ok(payload),
            Response::Failure(error) => Err(error),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        match self {
            Response::Success(payload) => Response::Success(f(payload)),
            Response::Failure(error) => Response::Failure(error),
        }
    }
}

impl<T: FromJson> Response<T> {
    /// Wraps an outcome expected to carry a native `T`.
    ///
    /// Anything other than a `T` or a structured error becomes a failure
    /// with the message `Unknown`.
    pub fn of(outcome: RawOutcome) -> Self {
        match outcome {
            RawOutcome::Value(value) => T::from_json(&value)
                .map(Response::Success)
                .unwrap_or_else(Self::unknown),
            RawOutcome::Text(text) => T::from_json(&serde_json::Value::String(text))
                .map(Response::Success)
                .unwrap_or_else(Self::unknown),
            RawOutcome::Error(error) => Response::Failure(error),
            RawOutcome::Empty => Self::unknown(),
        }
    }
}

impl Response<bool> {
    /// Wraps an outcome that carries no body on success.
    pub fn of_nullable(outcome: RawOutcome) -> Self {
        match outcome {
            RawOutcome::Empty => Response::Success(true),
            RawOutcome::Error(error) => Response::Failure(error),
            _ => Self::unknown(),
        }
    }
}

impl Response<QueryResult> {
    /// Wraps a query outcome. A body that does not parse as a
    /// [`QueryResult`] is an `Err`, not a failure.
    pub fn of_query_result(outcome: RawOutcome) -> Result<Self> {
        of_object(outcome)
    }
}

impl Response<GetResult> {
    /// Wraps a get outcome. A body that does not parse as a [`GetResult`]
    /// is an `Err`, not a failure.
    pub fn of_get_result(outcome: RawOutcome) -> Result<Self> {
        of_object(outcome)
    }
}

fn of_object<T: DeserializeOwned>(outcome: RawOutcome) -> Result<Response<T>> {
    let response = match outcome {
        RawOutcome::Value(value) => Response::Success(serde_json::from_value(value)?),
        RawOutcome::Text(text) => Response::Success(serde_json::from_str(&text)?),
        RawOutcome::Error(error) => Response::Failure(error),
        RawOutcome::Empty => Response::unknown(),
    };
    Ok(response)
}

impl<T: fmt::Debug> fmt::Display for Response<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Success(payload) => write!(f, "Success: {{{:?}}}", payload),
            Response::Failure(error) => write!(f, "Failure{{error={}}}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error(msg: &str) -> HttpValidationError {
        HttpValidationError::with_msg(msg)
    }

    #[test]
    fn test_of_string_success() {
        let response: Response<String> = Response::of(RawOutcome::Value(json!("Hello, World!")));
        assert!(response.is_success());
        assert_eq!(response.payload().map(String::as_str), Some("Hello, World!"));
        assert!(response.error().is_none());
    }

    #[test]
    fn test_of_text_as_string() {
        let response: Response<String> = Response::of(RawOutcome::Text("0.4.1".into()));
        assert_eq!(response.into_payload().as_deref(), Some("0.4.1"));
    }

    #[test]
    fn test_of_string_failure() {
        let response: Response<String> = Response::of(RawOutcome::Error(error("Error")));
        assert!(response.is_error());
        assert!(response.payload().is_none());
        assert_eq!(response.error(), Some(&error("Error")));
    }

    #[test]
    fn test_of_integer_and_boolean() {
        let response: Response<i64> = Response::of(RawOutcome::Value(json!(42)));
        assert_eq!(response.payload(), Some(&42));

        let response: Response<bool> = Response::of(RawOutcome::Value(json!(true)));
        assert_eq!(response.payload(), Some(&true));
    }

    #[test]
    fn test_of_wrong_type_is_unknown() {
        let response: Response<String> = Response::of(RawOutcome::Value(json!({"a": 1})));
        let err = response.error().unwrap();
        assert_eq!(err.detail.len(), 1);
        assert_eq!(err.detail[0].msg, UNKNOWN_ERROR);

        let response: Response<bool> = Response::of(RawOutcome::Empty);
        assert!(response.is_error());
    }

    #[test]
    fn test_of_list() {
        let response: Response<Vec<String>> =
            Response::of(RawOutcome::Value(json!(["item1", "item2", "item3"])));
        assert_eq!(response.payload().map(Vec::len), Some(3));

        let response: Response<Vec<String>> = Response::of(RawOutcome::Value(json!(["a", 1])));
        assert!(response.is_error());

        let response: Response<Vec<String>> = Response::of(RawOutcome::Error(error("Error")));
        assert_eq!(response.error(), Some(&error("Error")));
    }

    #[test]
    fn test_of_nullable() {
        let response = Response::of_nullable(RawOutcome::Empty);
        assert_eq!(response, Response::Success(true));

        let response = Response::of_nullable(RawOutcome::Error(error("Error")));
        assert_eq!(response.error(), Some(&error("Error")));

        let response = Response::of_nullable(RawOutcome::Value(json!(1)));
        assert_eq!(response.error().unwrap().detail[0].msg, UNKNOWN_ERROR);
    }

    #[test]
    fn test_failed() {
        let response: Response<String> = Response::failed("Custom error message");
        let err = response.error().unwrap();
        assert_eq!(err.detail.len(), 1);
        assert_eq!(err.detail[0].msg, "Custom error message");
    }

    #[test]
    fn test_of_query_result_from_text() {
        let text = r#"{
            "documents": [["doc1", "doc2"], ["doc3", "doc4"]],
            "embeddings": [[[1.0, 2.0, 3.0]], [[4.0, 5.0, 6.0]]],
            "ids": [["id1", "id2"], ["id3", "id4"]],
            "metadatas": [
                [{"key": "value"}, {"key": "value"}],
                [{"key": "value"}, {"key": "value"}]
            ],
            "distances": [[0.1, 0.2], [0.3, 0.4]]
        }"#;
        let response = Response::of_query_result(RawOutcome::Text(text.into())).unwrap();
        assert!(response.is_success());
        assert_eq!(response.payload().unwrap().ids.len(), 2);
    }

    #[test]
    fn test_of_query_result_from_value() {
        let value = json!({"ids": [["a"]], "distances": [[0.1]]});
        let result = Response::of_query_result(RawOutcome::Value(value))
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(result.distances, vec![vec![0.1]]);
    }

    #[test]
    fn test_of_query_result_failure() {
        let response = Response::of_query_result(RawOutcome::Error(error("Error"))).unwrap();
        assert_eq!(response.error(), Some(&error("Error")));
        assert!(response.to_string().contains("Error"));
    }

    #[test]
    fn test_of_query_result_malformed_is_err() {
        let err = Response::of_query_result(RawOutcome::Text("{not json".into())).unwrap_err();
        assert!(matches!(err, crate::Error::Deserialize(_)));
    }

    #[test]
    fn test_of_get_result() {
        let response = Response::of_get_result(RawOutcome::Error(error("Error"))).unwrap();
        assert!(response.is_error());

        let response =
            Response::of_get_result(RawOutcome::Value(json!({"ids": ["x"]}))).unwrap();
        assert_eq!(response.payload().unwrap().ids, vec!["x".to_string()]);
    }

    #[test]
    fn test_display() {
        let response: Response<String> = Response::Success("Hello, World!".into());
        assert_eq!(response.to_string(), "Success: {\"Hello, World!\"}");

        let response: Response<String> = Response::failed("MyError");
        assert!(response.to_string().contains("MyError"));
    }

    #[test]
    fn test_map_and_into_result() {
        let response: Response<i64> = Response::Success(2);
        assert_eq!(response.map(|n| n * 2).into_result(), Ok(4));

        let response: Response<i64> = Response::failed("nope");
        assert!(response.into_result().is_err());
    }

    #[test]
    fn test_validation_error_wire_shape() {
        let parsed: HttpValidationError = serde_json::from_value(json!({
            "detail": [{"loc": ["body", 0], "msg": "field required", "type": "value_error.missing"}]
        }))
        .unwrap();
        assert_eq!(parsed.detail[0].kind, "value_error.missing");
        assert_eq!(parsed.detail[0].loc.len(), 2);
        assert_eq!(parsed.messages().collect::<Vec<_>>(), vec!["field required"]);
    }
}
