use apollo_compiler::ast;
use serde_json_bytes::ByteString;
use serde_json_bytes::Map as JsonMap;
use serde_json_bytes::Value;

use crate::json_ext::Object;

/// A GraphQL request paired with its already-parsed query document.
///
/// The rewriters work on parsed structures, so unlike a wire-format request
/// this type carries an [`ast::Document`] rather than a query string and is
/// not serializable. Variables, the operation name and extensions ride along
/// and are never touched by the rewriters.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Request {
    /// The parsed query document.
    pub document: ast::Document,

    /// The (optional) variables in the form of a JSON object.
    pub variables: Object,

    /// The optional GraphQL operation name, if the document contains several.
    pub operation_name: Option<String>,

    /// The optional GraphQL extensions.
    pub extensions: Object,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            document: ast::Document::new(),
            variables: Object::new(),
            operation_name: None,
            extensions: Object::new(),
        }
    }
}

#[buildstructor::buildstructor]
impl Request {
    /// Returns a builder that builds a GraphQL [`Request`] from its components.
    ///
    /// Builder methods:
    ///
    /// * `.document(`[`ast::Document`]`)`
    ///   Required.
    ///   Sets [`Request::document`].
    ///
    /// * `.variables(impl Into<`[`serde_json_bytes::Map`]`<`[`ByteString`]`, `[`Value`]`>>)`
    ///   Optional.
    ///   Sets the entire `variables` JSON object, which defaults to empty.
    ///
    /// * `.variable(impl Into<`[`ByteString`]`>, impl Into<`[`Value`]`>)`
    ///   Optional, may be called multiple times.
    ///   Adds one item to the `variables` JSON object.
    ///
    /// * `.operation_name(impl Into<`[`String`]`>)`
    ///   Optional.
    ///   Sets [`Request::operation_name`].
    ///
    /// * `.extensions(impl Into<`[`serde_json_bytes::Map`]`<`[`ByteString`]`, `[`Value`]`>>)`
    ///   Optional.
    ///   Sets the entire `extensions` JSON object, which defaults to empty.
    ///
    /// * `.extension(impl Into<`[`ByteString`]`>, impl Into<`[`Value`]`>)`
    ///   Optional, may be called multiple times.
    ///   Adds one item to the `extensions` JSON object.
    ///
    /// * `.build()`
    ///   Finishes the builder and returns a GraphQL [`Request`].
    #[builder(visibility = "pub")]
    fn new(
        document: ast::Document,
        // Skip the `Object` type alias in order to use buildstructor's map special-casing
        variables: JsonMap<ByteString, Value>,
        operation_name: Option<String>,
        extensions: JsonMap<ByteString, Value>,
    ) -> Self {
        Self {
            document,
            variables,
            operation_name,
            extensions,
        }
    }
}
