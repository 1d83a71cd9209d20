//! Bidirectional type renaming for wrapped GraphQL schemas.
//!
//! When a schema is wrapped or proxied, the public type names it exposes may
//! differ from the names the underlying executor knows. A
//! [`transforms::RenameTypes`] policy rewrites the schema once, at build
//! time, and freezes the outcome into a [`transforms::RenamedSchema`], which
//! then keeps the two vocabularies consistent per request:
//!
//! * outbound documents have their type references translated back to the
//!   original names before execution
//!   ([`RenamedSchema::rewrite_request`](transforms::RenamedSchema::rewrite_request)),
//! * inbound results have their `__typename` tags translated forward to the
//!   public names before being returned
//!   ([`RenamedSchema::rewrite_response`](transforms::RenamedSchema::rewrite_response)).
//!
//! The schema rewrite is the only step that can fail; request and response
//! rewriting are total, and a name the policy never touched always passes
//! through unchanged.

#![warn(
    rustdoc::broken_intra_doc_links,
    unreachable_pub,
    unreachable_patterns,
    unused,
    unused_qualifications,
    dead_code,
    while_true,
    unconditional_panic,
    clippy::all
)]

pub mod error;
pub mod graphql;
pub mod json_ext;
pub mod transforms;
mod visit;

pub use crate::error::RenameError;
pub use crate::transforms::RenameTypes;
pub use crate::transforms::RenamedSchema;
