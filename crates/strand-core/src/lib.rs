//! # Strand Core
//!
//! Builds Gremlin traversals as plain values and encodes them to
//! dot-chained script text for submission to a graph engine.
//!
//! ```
//! use strand_core::{anonymous, encode, g, p, Order};
//!
//! let query = g()
//!     .v(())
//!     .has_label("person")
//!     .has("age", p::gt(30))
//!     .order(())
//!     .by(("age", Order::Desc))
//!     .limit(5)
//!     .coalesce([anonymous().values("nickname"), anonymous().values("name")]);
//!
//! assert_eq!(
//!     encode(&query).unwrap().as_str(),
//!     "g.V().hasLabel('person').has('age', gt(30)).order().by('age', desc).limit(5)\
//!      .coalesce(__.values('nickname'), __.values('name'))"
//! );
//! ```
//!
//! Nothing here executes queries; the encoded [`Script`] is handed to
//! whatever client talks to the server.

pub mod argument;
pub mod encoder;
pub mod error;
mod namespace;
pub mod predicate;
mod steps;
pub mod tokens;
pub mod traversal;

pub use argument::{edge, vertex, Argument, Atom, EdgeRef, ElementId, IntoArgs, Number, VertexRef};
pub use encoder::{encode, escape_quotes, Script, ScriptEncoder};
pub use error::{EncodeError, EncodeResult};
pub use tokens::{Cardinality, Column, Order, Pop, Scope, T};
pub use traversal::{anonymous, g, Step, Traversal, ANONYMOUS_MARKER};

/// Predicate constructors (`p::gt(30)`, `p::within([..])`).
pub use predicate as p;

pub use strand_config::{EncoderConfig, NamespaceConfig, DEFAULT_TRAVERSAL_SOURCE};
