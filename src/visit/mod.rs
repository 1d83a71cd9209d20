//! Generic walkers over schemas and executable documents.
//!
//! Rewriters supply callbacks; the walkers own the traversal and rebuild new
//! structures without touching their inputs. In every callback, `None` means
//! "keep the original".

pub(crate) mod document;
pub(crate) mod schema;

pub(crate) use document::DocumentVisitor;
pub(crate) use schema::SchemaVisitor;
