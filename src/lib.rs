//! Generator for the `detail::to_tie` C++ header.
//!
//! `to_tie(t)` turns an aggregate into a `std::tie` over its fields. C++ has
//! no way to spell "destructure into however many fields there are", so the
//! header carries one `if constexpr` branch per field count, chosen by the
//! external `aggregate_arity` facility, and a final branch that fails
//! compilation for anything larger.
//!
//! Pipeline: bound → [`ir::Dispatch`] ([`lower`]) → text ([`codegen`]) → file ([`output`]).
pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod ir;
pub mod lower;
pub mod output;

pub use codegen::{produce_case, produce_file};
pub use error::GenerateError;
