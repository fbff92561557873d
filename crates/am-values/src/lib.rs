//! # am-values
//!
//! Layered configuration-value model for the access-management admin tools.
//!
//! The platform emits service configuration as a JSON object with three
//! layers: platform-wide (global) values at the top level, realm-level
//! values nested under `defaults`, and user-level values nested under
//! `dynamic`. This crate wraps such a document in [`JsonValues`], a value
//! type whose construction normalizes the layers into a form the admin
//! tools can edit, and whose [`JsonValues::to_value`] inverts that
//! normalization exactly.
//!
//! All operations are pure: [`JsonValues`] is never mutated in place, and
//! every transforming method returns a new instance.
//!
//! ## Function naming conventions
//!
//! - Transform functions which lose no data use `to_*` / `from_*`.
//! - Modification functions which lose data use `add_*` and `remove_*`.
//! - Utility filters use simple verbs, e.g. `omit_keys`, `pick_by`.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod node;
pub mod schema;
pub mod values;

pub use error::{Error, Result};
pub use schema::JsonSchema;
pub use values::{Diagnostic, JsonValues};
