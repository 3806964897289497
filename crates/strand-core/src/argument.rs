//! Step argument model.
//!
//! Every value a step can carry is one of the closed [`Argument`] variants,
//! so the encoder's formatting is an exhaustive match. Conversions from
//! plain Rust values go through `From`, and [`IntoArgs`] normalises a single
//! value, a tuple or a list into the ordered argument sequence of a step.

use crate::traversal::Traversal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric argument, rendered in its natural decimal form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::UInt(n) => write!(f, "{}", n),
            Number::Float(n) if n.is_nan() => f.write_str("Double.NaN"),
            Number::Float(n) if n.is_infinite() && n.is_sign_positive() => {
                f.write_str("Double.POSITIVE_INFINITY")
            }
            Number::Float(n) if n.is_infinite() => f.write_str("Double.NEGATIVE_INFINITY"),
            // Debug keeps the fractional part on whole floats (1.0, not 1)
            Number::Float(n) => write!(f, "{:?}", n),
        }
    }
}

macro_rules! number_from {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n.into())
                }
            }
        )*
    };
}

number_from!(Int: i8, i16, i32, i64, u8, u16, u32);
number_from!(Float: f32, f64);

// Only values past i64::MAX need the unsigned variant
impl From<u64> for Number {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Number::UInt(n), Number::Int)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::from(n as u64)
    }
}

/// A bare symbolic token emitted without quotes (`single`, `T.id`, `asc`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Atom(String);

impl Atom {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a vertex or edge. Numeric ids render bare, textual ids quoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementId {
    Number(Number),
    Text(String),
}

macro_rules! numeric_from {
    ($target:ident::$variant:ident: $($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for $target {
                fn from(n: $ty) -> Self {
                    $target::$variant(Number::from(n))
                }
            }
        )*
    };
}

numeric_from!(ElementId::Number: i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, Number);

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        ElementId::Text(s.to_string())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        ElementId::Text(s)
    }
}

impl From<&String> for ElementId {
    fn from(s: &String) -> Self {
        ElementId::Text(s.clone())
    }
}

/// Free-standing reference to a vertex, rendered as `V(id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRef {
    pub id: ElementId,
}

/// Free-standing reference to an edge, rendered as `E(id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRef {
    pub id: ElementId,
}

/// Build a vertex reference usable as a step argument.
///
/// ```
/// use strand_core::{encode, g, vertex};
///
/// let script = encode(&g().add_e("knows").from(vertex(1)).to(vertex("marko"))).unwrap();
/// assert_eq!(script.as_str(), "g.addE('knows').from(V(1)).to(V('marko'))");
/// ```
pub fn vertex(id: impl Into<ElementId>) -> VertexRef {
    VertexRef { id: id.into() }
}

/// Build an edge reference usable as a step argument.
pub fn edge(id: impl Into<ElementId>) -> EdgeRef {
    EdgeRef { id: id.into() }
}

/// A single step argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Argument {
    Null,
    Number(Number),
    Atom(Atom),
    Text(String),
    VertexRef(ElementId),
    EdgeRef(ElementId),
    Traversal(Traversal),
}

impl Argument {
    /// Whether this argument holds a nested traversal
    pub fn is_traversal(&self) -> bool {
        matches!(self, Argument::Traversal(_))
    }
}

numeric_from!(Argument::Number: i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, Number);

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::Text(s.to_string())
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Argument::Text(s)
    }
}

impl From<&String> for Argument {
    fn from(s: &String) -> Self {
        Argument::Text(s.clone())
    }
}

impl From<Atom> for Argument {
    fn from(atom: Atom) -> Self {
        Argument::Atom(atom)
    }
}

impl From<VertexRef> for Argument {
    fn from(v: VertexRef) -> Self {
        Argument::VertexRef(v.id)
    }
}

impl From<&VertexRef> for Argument {
    fn from(v: &VertexRef) -> Self {
        Argument::VertexRef(v.id.clone())
    }
}

impl From<EdgeRef> for Argument {
    fn from(e: EdgeRef) -> Self {
        Argument::EdgeRef(e.id)
    }
}

impl From<&EdgeRef> for Argument {
    fn from(e: &EdgeRef) -> Self {
        Argument::EdgeRef(e.id.clone())
    }
}

impl From<Traversal> for Argument {
    fn from(t: Traversal) -> Self {
        Argument::Traversal(t)
    }
}

impl From<ElementId> for Argument {
    fn from(id: ElementId) -> Self {
        match id {
            ElementId::Number(n) => Argument::Number(n),
            ElementId::Text(s) => Argument::Text(s),
        }
    }
}

/// Normalises step arguments into an ordered sequence.
///
/// A single value becomes a one-element sequence, lists and tuples keep
/// their order, and `()` means no arguments.
pub trait IntoArgs {
    fn into_args(self) -> Vec<Argument>;
}

impl IntoArgs for () {
    fn into_args(self) -> Vec<Argument> {
        Vec::new()
    }
}

macro_rules! single_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoArgs for $ty {
                fn into_args(self) -> Vec<Argument> {
                    vec![Argument::from(self)]
                }
            }
        )*
    };
}

single_arg!(
    i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, Number, &str, String, &String, Atom,
    VertexRef, &VertexRef, EdgeRef, &EdgeRef, Traversal, ElementId,
);

impl IntoArgs for Argument {
    fn into_args(self) -> Vec<Argument> {
        vec![self]
    }
}

impl<T: Into<Argument>> IntoArgs for Option<T> {
    fn into_args(self) -> Vec<Argument> {
        vec![self.map_or(Argument::Null, Into::into)]
    }
}

impl<T: Into<Argument>> IntoArgs for Vec<T> {
    fn into_args(self) -> Vec<Argument> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Argument>, const N: usize> IntoArgs for [T; N] {
    fn into_args(self) -> Vec<Argument> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Argument> + Clone> IntoArgs for &[T] {
    fn into_args(self) -> Vec<Argument> {
        self.iter().cloned().map(Into::into).collect()
    }
}

macro_rules! tuple_args {
    ($($name:ident),+) => {
        impl<$($name: Into<Argument>),+> IntoArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_args(self) -> Vec<Argument> {
                let ($($name,)+) = self;
                vec![$($name.into()),+]
            }
        }
    };
}

tuple_args!(A);
tuple_args!(A, B);
tuple_args!(A, B, C);
tuple_args!(A, B, C, D);
tuple_args!(A, B, C, D, E);
