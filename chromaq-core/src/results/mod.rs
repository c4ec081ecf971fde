//! Reading transport outcomes: the response envelope, result shapes and
//! distance-range filtering.

pub mod get;
pub mod query;
pub mod range;
pub mod response;

pub use get::GetResult;
pub use query::QueryResult;
pub use range::DistanceRange;
pub use response::{FromJson, HttpValidationError, RawOutcome, Response, ValidationError};

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
