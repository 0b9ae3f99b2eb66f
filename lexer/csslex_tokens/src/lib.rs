//! Hand-written tokenizers for CSS tokens that the grammar's table-driven
//! lexer cannot express on its own.
//!
//! Three slots, sharing one character classifier:
//!
//! - [`IDENTIFIERS`] tells plain identifiers, custom-property names
//!   (`--foo`) and function-call names (`foo(`) apart — three token classes
//!   that are lexically identical except for one trailing character and
//!   grammar context.
//! - [`DESCENDANT`] inserts the implicit zero-width selector combinator
//!   between selector components separated only by whitespace (`div p`).
//! - [`UNIT_TOKEN`] classifies unit suffixes attached directly to numeric
//!   literals (`10px`, `50%`).
//!
//! Each slot is invoked by the grammar engine exactly at positions it marks
//! as lexically ambiguous. Declining is the normal negative outcome: control
//! returns to the grammar's default lexer with the position unchanged.

use csslex_core::ExternalTokenizer;

pub mod classify;
mod descendant;
mod identifiers;
mod unit;

pub use descendant::{scan_descendant, DESCENDANT};
pub use identifiers::{scan_identifier, IDENTIFIERS};
pub use unit::{scan_unit, UNIT_TOKEN};

/// All external-token slots, in grammar registration order.
pub fn tokenizers() -> [&'static ExternalTokenizer; 3] {
    [&IDENTIFIERS, &DESCENDANT, &UNIT_TOKEN]
}
