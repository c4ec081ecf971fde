//! Leaf predicates: comparison operators and their operands.
//!
//! Matchers can only be produced by the constructor functions in this module,
//! so an operator is always paired with an operand of the right shape:
//! ordering operators take numbers, `$in`/`$nin` take homogeneous lists and
//! `$contains`/`$not_contains` only exist as [`DocumentMatcher`]s.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filter::value::Value;

/// The closed set of filter operators and their wire tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Eq,
    Ne,
    In,
    NotIn,
    Gt,
    Gte,
    Lt,
    Lte,
    And,
    Or,
    Contains,
    NotContains,
}

impl Operator {
    /// Returns the wire token, e.g. `$eq`.
    #[inline]
    pub fn token(&self) -> &'static str {
        match self {
            Operator::Eq => "$eq",
            Operator::Ne => "$ne",
            Operator::In => "$in",
            Operator::NotIn => "$nin",
            Operator::Gt => "$gt",
            Operator::Gte => "$gte",
            Operator::Lt => "$lt",
            Operator::Lte => "$lte",
            Operator::And => "$and",
            Operator::Or => "$or",
            Operator::Contains => "$contains",
            Operator::NotContains => "$not_contains",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A single scalar operand for `$eq` and `$ne`.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
}

/// A numeric operand for the ordering operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// A homogeneous list operand for `$in` and `$nin`. Caller order is kept.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarList {
    Str(Vec<String>),
    Int(Vec<i64>),
    Float(Vec<f64>),
}

impl ScalarList {
    pub fn len(&self) -> usize {
        match self {
            ScalarList::Str(v) => v.len(),
            ScalarList::Int(v) => v.len(),
            ScalarList::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl From<Number> for Scalar {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => Scalar::Int(i),
            Number::Float(f) => Scalar::Float(f),
        }
    }
}

macro_rules! impl_scalar_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(n: $t) -> Self {
                    Number::from(n).into()
                }
            }
        )*
    };
}

impl_scalar_from_number!(i64, i32, f64, f32);

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<i32> for Number {
    fn from(i: i32) -> Self {
        Number::Int(i as i64)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl From<f32> for Number {
    fn from(f: f32) -> Self {
        Number::Float(f as f64)
    }
}

macro_rules! impl_scalar_list_from {
    ($variant:ident, $t:ty, $conv:path) => {
        impl From<Vec<$t>> for ScalarList {
            fn from(values: Vec<$t>) -> Self {
                ScalarList::$variant(values.into_iter().map($conv).collect())
            }
        }

        impl<const N: usize> From<[$t; N]> for ScalarList {
            fn from(values: [$t; N]) -> Self {
                ScalarList::$variant(values.into_iter().map($conv).collect())
            }
        }
    };
}

impl_scalar_list_from!(Str, &str, String::from);
impl_scalar_list_from!(Str, String, String::from);
impl_scalar_list_from!(Int, i64, i64::from);
impl_scalar_list_from!(Int, i32, i64::from);
impl_scalar_list_from!(Float, f64, f64::from);
impl_scalar_list_from!(Float, f32, f64::from);

impl From<&Scalar> for Value {
    fn from(s: &Scalar) -> Self {
        match s {
            Scalar::Str(s) => Value::Str(s.clone()),
            Scalar::Int(i) => Value::Int(*i),
            Scalar::Float(f) => Value::Float(*f),
        }
    }
}

impl From<&ScalarList> for Value {
    fn from(list: &ScalarList) -> Self {
        let items = match list {
            ScalarList::Str(v) => v.iter().map(|s| Value::Str(s.clone())).collect(),
            ScalarList::Int(v) => v.iter().map(|i| Value::Int(*i)).collect(),
            ScalarList::Float(v) => v.iter().map(|f| Value::Float(*f)).collect(),
        };
        Value::List(items)
    }
}

/// The operand carried by a [`Comparison`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Scalar(Scalar),
    List(ScalarList),
    Text(String),
}

impl From<&Operand> for Value {
    fn from(operand: &Operand) -> Self {
        match operand {
            Operand::Scalar(s) => s.into(),
            Operand::List(l) => l.into(),
            Operand::Text(t) => Value::Str(t.clone()),
        }
    }
}

/// An operator applied to an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    operator: Operator,
    operand: Operand,
}

impl Comparison {
    fn new(operator: Operator, operand: Operand) -> Self {
        Self { operator, operand }
    }

    #[inline]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[inline]
    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// Materializes as `{ "<token>": <operand> }`.
    pub fn materialize(&self) -> Value {
        Value::single(self.operator.token(), &self.operand)
    }
}

/// A comparison against a metadata field value.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataMatcher(Comparison);

impl MetadataMatcher {
    #[inline]
    pub fn comparison(&self) -> &Comparison {
        &self.0
    }

    pub fn materialize(&self) -> Value {
        self.0.materialize()
    }
}

/// A comparison against the document text.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMatcher(Comparison);

impl DocumentMatcher {
    #[inline]
    pub fn comparison(&self) -> &Comparison {
        &self.0
    }

    pub fn materialize(&self) -> Value {
        self.0.materialize()
    }
}

fn scalar(operator: Operator, value: impl Into<Scalar>) -> MetadataMatcher {
    MetadataMatcher(Comparison::new(operator, Operand::Scalar(value.into())))
}

fn number(operator: Operator, value: impl Into<Number>) -> MetadataMatcher {
    scalar(operator, Scalar::from(value.into()))
}

fn list(operator: Operator, values: impl Into<ScalarList>) -> MetadataMatcher {
    MetadataMatcher(Comparison::new(operator, Operand::List(values.into())))
}

fn text(operator: Operator, value: impl Into<String>) -> DocumentMatcher {
    DocumentMatcher(Comparison::new(operator, Operand::Text(value.into())))
}

/// Field equals value.
pub fn eq(value: impl Into<Scalar>) -> MetadataMatcher {
    scalar(Operator::Eq, value)
}

/// Field does not equal value.
pub fn ne(value: impl Into<Scalar>) -> MetadataMatcher {
    scalar(Operator::Ne, value)
}

/// Field greater than value.
pub fn gt(value: impl Into<Number>) -> MetadataMatcher {
    number(Operator::Gt, value)
}

/// Field greater than or equal to value.
pub fn gte(value: impl Into<Number>) -> MetadataMatcher {
    number(Operator::Gte, value)
}

/// Field less than value.
pub fn lt(value: impl Into<Number>) -> MetadataMatcher {
    number(Operator::Lt, value)
}

/// Field less than or equal to value.
pub fn lte(value: impl Into<Number>) -> MetadataMatcher {
    number(Operator::Lte, value)
}

/// Field value is one of the given values.
pub fn is_in(values: impl Into<ScalarList>) -> MetadataMatcher {
    list(Operator::In, values)
}

/// Field value is none of the given values.
pub fn not_in(values: impl Into<ScalarList>) -> MetadataMatcher {
    list(Operator::NotIn, values)
}

/// Document text contains the given string.
pub fn contains(value: impl Into<String>) -> DocumentMatcher {
    text(Operator::Contains, value)
}

/// Document text does not contain the given string.
pub fn not_contains(value: impl Into<String>) -> DocumentMatcher {
    text(Operator::NotContains, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_json(v: Value) -> serde_json::Value {
        v.into()
    }

    #[test]
    fn test_operator_tokens() {
        assert_eq!(Operator::NotIn.token(), "$nin");
        assert_eq!(Operator::NotContains.to_string(), "$not_contains");
        assert_eq!(Operator::Gte.token(), "$gte");
    }

    #[test]
    fn test_eq_scalars() {
        assert_eq!(to_json(eq("value").materialize()), json!({"$eq": "value"}));
        assert_eq!(to_json(eq(2).materialize()), json!({"$eq": 2}));
        assert_eq!(to_json(ne(2.5).materialize()), json!({"$ne": 2.5}));
    }

    #[test]
    fn test_ordering_operators() {
        assert_eq!(to_json(gt(1).materialize()), json!({"$gt": 1}));
        assert_eq!(to_json(gte(1.5).materialize()), json!({"$gte": 1.5}));
        assert_eq!(to_json(lt(10).materialize()), json!({"$lt": 10}));
        assert_eq!(to_json(lte(0.5f32).materialize()), json!({"$lte": 0.5}));
    }

    #[test]
    fn test_in_preserves_order() {
        let m = is_in(["c", "a", "b"]);
        assert_eq!(to_json(m.materialize()), json!({"$in": ["c", "a", "b"]}));

        let m = not_in(vec![3, 1, 2]);
        assert_eq!(to_json(m.materialize()), json!({"$nin": [3, 1, 2]}));
        assert_eq!(m.comparison().operator(), Operator::NotIn);
    }

    #[test]
    fn test_document_matchers() {
        assert_eq!(
            to_json(contains("text").materialize()),
            json!({"$contains": "text"})
        );
        assert_eq!(
            to_json(not_contains("spam").materialize()),
            json!({"$not_contains": "spam"})
        );
    }

    #[test]
    fn test_scalar_list_len() {
        let list: ScalarList = vec![1.0, 2.0].into();
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert!(ScalarList::from(Vec::<String>::new()).is_empty());
    }
}
