//! Lazyseq - Lazy sequence combinators driven by capability traits.
//!
//! Lazyseq provides filtering, ordering, transforming, type-narrowing and
//! reversing over any [`IntoIterator`], producing new lazily evaluated
//! iterators. It supports:
//!
//! - Capability traits: [`Predicate`], [`Transformer`], [`Comparer`]
//! - Plain functions through [`PredicateAdapter`] and [`ComparerAdapter`]
//! - Exact-type projection of `dyn Any` sequences
//! - Validated entry points for absent arguments in [`checked`]
//!
//! # Quick Start
//!
//! ```rust
//! use lazyseq::{Predicate, Sequence};
//!
//! struct ContainsDigit(char);
//!
//! impl Predicate<i32> for ContainsDigit {
//!     fn is_match(&self, value: &i32) -> bool {
//!         value.to_string().contains(self.0)
//!     }
//! }
//!
//! let matches: Vec<i32> = vec![12, 35, -65, 543, 23]
//!     .filter_by(ContainsDigit('5'))
//!     .collect();
//! assert_eq!(matches, vec![35, -65, 543]);
//!
//! let by_len: Vec<&str> = vec!["qwe", "", "12345", "1"]
//!     .order_according_to_fn(|a: &&str, b: &&str| a.len().cmp(&b.len()))
//!     .collect();
//! assert_eq!(by_len, vec!["", "1", "qwe", "12345"]);
//! ```
//!
//! # Evaluation
//!
//! | Combinator | Buffers | Capability calls |
//! |------------|---------|------------------|
//! | [`filter_by`] | no | one per source element, on pull |
//! | [`transform`] | no | one per source element, on pull |
//! | [`type_of`] | no | one type check per element, on pull |
//! | [`order_according_to`] | whole source, on first pull | during the sort only |
//! | [`reversed`] | whole source, on first pull | none |
//!
//! Order-dependent combinators never finish on unbounded sources.

mod adapter;
mod buffer;
mod capability;
pub mod checked;
mod error;
mod filter;
mod narrow;
mod order;
mod ordering;
mod reverse;
mod sequence;
mod transform;

// Re-export public API
pub use adapter::{ComparerAdapter, PredicateAdapter};
pub use capability::{Comparer, Predicate, Transformer};
pub use error::{Result, SequenceError};
pub use filter::FilterBy;
pub use narrow::{Narrow, TypeOf};
pub use order::OrderAccordingTo;
pub use ordering::Stability;
pub use reverse::Reversed;
pub use sequence::{
    filter_by, filter_by_fn, order_according_to, order_according_to_fn, reversed, transform,
    transform_fn, type_of, Sequence,
};
pub use transform::Transform;
