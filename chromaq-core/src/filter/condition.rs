//! Recursive boolean conditions over metadata fields and document text.

use serde::{Serialize, Serializer};

use crate::filter::matcher::{DocumentMatcher, MetadataMatcher, Operator};
use crate::filter::value::Value;

/// Converts a filter node into its wire structure.
pub trait Materialize {
    fn materialize(&self) -> Value;
}

/// Boolean connective of a composite condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logical {
    And,
    Or,
}

impl Logical {
    #[inline]
    pub fn operator(&self) -> Operator {
        match self {
            Logical::And => Operator::And,
            Logical::Or => Operator::Or,
        }
    }
}

/// A metadata leaf: a field name and the matcher applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    field: String,
    matcher: MetadataMatcher,
}

impl FieldMatch {
    pub fn new(field: impl Into<String>, matcher: MetadataMatcher) -> Self {
        Self {
            field: field.into(),
            matcher,
        }
    }

    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[inline]
    pub fn matcher(&self) -> &MetadataMatcher {
        &self.matcher
    }
}

impl Materialize for FieldMatch {
    fn materialize(&self) -> Value {
        Value::single(self.field.clone(), self.matcher.comparison().materialize())
    }
}

impl Materialize for DocumentMatcher {
    fn materialize(&self) -> Value {
        self.comparison().materialize()
    }
}

/// A filter tree: either a single leaf or an AND/OR over child conditions.
///
/// Children keep the order they were given in; they are never sorted or
/// deduplicated, since consumers compare materialized trees literally.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition<L> {
    Leaf(L),
    Composite {
        op: Logical,
        children: Vec<Condition<L>>,
    },
}

/// Condition over metadata fields, sent as `where`.
pub type MetadataCondition = Condition<FieldMatch>;

/// Condition over document text, sent as `where_document`.
pub type DocumentCondition = Condition<DocumentMatcher>;

impl<L> Condition<L> {
    /// Creates a composite with the given connective.
    pub fn composite<I>(op: Logical, children: I) -> Self
    where
        I: IntoIterator<Item = Condition<L>>,
    {
        Condition::Composite {
            op,
            children: children.into_iter().collect(),
        }
    }

    /// Returns true for a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Condition::Leaf(_))
    }

    /// Returns the children of a composite, or an empty slice for a leaf.
    pub fn children(&self) -> &[Condition<L>] {
        match self {
            Condition::Leaf(_) => &[],
            Condition::Composite { children, .. } => children,
        }
    }

    /// Returns the nesting depth; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Condition::Leaf(_) => 1,
            Condition::Composite { children, .. } => {
                1 + children.iter().map(Condition::depth).max().unwrap_or(0)
            }
        }
    }
}

impl<L: Materialize> Materialize for Condition<L> {
    fn materialize(&self) -> Value {
        match self {
            Condition::Leaf(leaf) => leaf.materialize(),
            Condition::Composite { op, children } => Value::single(
                op.operator().token(),
                Value::List(children.iter().map(Materialize::materialize).collect()),
            ),
        }
    }
}

impl<L: Materialize> Serialize for Condition<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.materialize().serialize(serializer)
    }
}

impl From<DocumentMatcher> for DocumentCondition {
    fn from(matcher: DocumentMatcher) -> Self {
        Condition::Leaf(matcher)
    }
}

impl From<FieldMatch> for MetadataCondition {
    fn from(leaf: FieldMatch) -> Self {
        Condition::Leaf(leaf)
    }
}

impl<S: Into<String>> From<(S, MetadataMatcher)> for MetadataCondition {
    fn from((field, matcher): (S, MetadataMatcher)) -> Self {
        cond(field, matcher)
    }
}

/// A bare metadata leaf, `{ field: { op: value } }`.
pub fn cond(field: impl Into<String>, matcher: MetadataMatcher) -> MetadataCondition {
    Condition::Leaf(FieldMatch::new(field, matcher))
}

/// AND over pre-built conditions.
pub fn and<L, I>(children: I) -> Condition<L>
where
    I: IntoIterator<Item = Condition<L>>,
{
    Condition::composite(Logical::And, children)
}

/// OR over pre-built conditions.
pub fn or<L, I>(children: I) -> Condition<L>
where
    I: IntoIterator<Item = Condition<L>>,
{
    Condition::composite(Logical::Or, children)
}

/// `{"$and": [{ field: { op: value } }]}`.
pub fn and_field(field: impl Into<String>, matcher: MetadataMatcher) -> MetadataCondition {
    and([cond(field, matcher)])
}

/// `{"$or": [{ field: { op: value } }]}`.
pub fn or_field(field: impl Into<String>, matcher: MetadataMatcher) -> MetadataCondition {
    or([cond(field, matcher)])
}

/// AND over document matchers.
pub fn and_matchers<I>(matchers: I) -> DocumentCondition
where
    I: IntoIterator<Item = DocumentMatcher>,
{
    and(matchers.into_iter().map(Condition::Leaf))
}

/// OR over document matchers.
pub fn or_matchers<I>(matchers: I) -> DocumentCondition
where
    I: IntoIterator<Item = DocumentMatcher>,
{
    or(matchers.into_iter().map(Condition::Leaf))
}
