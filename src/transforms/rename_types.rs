use std::fmt;

use apollo_compiler::Name;
use apollo_compiler::Schema;
use apollo_compiler::ast;
use apollo_compiler::collections::IndexMap;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::validation::Valid;
use serde_json_bytes::Value;

use crate::error::RenameError;
use crate::graphql::Request;
use crate::graphql::Response;
use crate::graphql::TYPENAME;
use crate::json_ext::ValueExt;
use crate::visit;
use crate::visit::DocumentVisitor;
use crate::visit::SchemaVisitor;

type Renamer = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// A type renaming policy: a caller-supplied renaming function plus the
/// switches deciding which types are eligible.
///
/// The policy is applied once, by [`RenameTypes::rewrite_schema`], which
/// consumes it and returns the [`RenamedSchema`] used for all later request
/// and response rewriting.
///
/// Eligibility is decided per type, in order: built-in types are exempt
/// unless `rename_builtins` is set (off by default); scalars are exempt when
/// `rename_scalars` is unset (on by default); root operation types are
/// always exempt. A renaming function returning `None`, an empty string, or
/// the unchanged name leaves the type alone.
pub struct RenameTypes {
    renamer: Renamer,
    rename_builtins: bool,
    rename_scalars: bool,
}

#[buildstructor::buildstructor]
impl RenameTypes {
    /// Returns a builder that builds a [`RenameTypes`] policy.
    ///
    /// Builder methods:
    ///
    /// * `.renamer(impl Fn(&str) -> Option<String> + Send + Sync + 'static)`
    ///   Required.
    ///   The renaming function, called with each eligible type's name.
    ///
    /// * `.rename_builtins(bool)`
    ///   Optional, defaults to `false`.
    ///   Makes built-in scalar types eligible for renaming.
    ///
    /// * `.rename_scalars(bool)`
    ///   Optional, defaults to `true`.
    ///   When `false`, exempts every scalar type, custom ones included.
    ///
    /// * `.build()`
    ///   Finishes the builder and returns a [`RenameTypes`] policy.
    #[builder(visibility = "pub")]
    fn new<F>(renamer: F, rename_builtins: Option<bool>, rename_scalars: Option<bool>) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            renamer: Box::new(renamer),
            rename_builtins: rename_builtins.unwrap_or(false),
            rename_scalars: rename_scalars.unwrap_or(true),
        }
    }

    /// Applies the policy to every named type of `schema` and freezes the
    /// outcome into a [`RenamedSchema`].
    ///
    /// Renamed types keep their kind and members; only names change, and
    /// every reference to a renamed type is re-pointed so the result stays
    /// internally consistent. `schema` itself is left untouched.
    ///
    /// The policy is consumed: the rename map cannot change once any
    /// request or response has been rewritten against it.
    pub fn rewrite_schema(mut self, schema: &Valid<Schema>) -> Result<RenamedSchema, RenameError> {
        let (schema, renames) = visit::schema::schema(&mut self, schema)?;
        tracing::debug!(renamed = renames.len(), "rewrote schema type names");
        let originals = renames
            .iter()
            .map(|(original, renamed)| (renamed.clone(), original.clone()))
            .collect();
        Ok(RenamedSchema {
            schema,
            originals,
            renamer: self.renamer,
        })
    }
}

impl SchemaVisitor for RenameTypes {
    fn named_type(
        &mut self,
        name: &Name,
        ty: &ExtendedType,
    ) -> Result<Option<Name>, RenameError> {
        if ty.is_built_in() && !self.rename_builtins {
            return Ok(None);
        }
        if matches!(ty, ExtendedType::Scalar(_)) && !self.rename_scalars {
            return Ok(None);
        }
        match (self.renamer)(name.as_str()) {
            Some(renamed) if !renamed.is_empty() && renamed != name.as_str() => {
                Ok(Some(Name::new(&renamed)?))
            }
            _ => Ok(None),
        }
    }

    fn root_type(
        &mut self,
        _operation: ast::OperationType,
        _name: &Name,
    ) -> Result<Option<Name>, RenameError> {
        // Root operation types keep their names no matter what the policy says.
        Ok(None)
    }
}

impl fmt::Debug for RenameTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenameTypes")
            .field("rename_builtins", &self.rename_builtins)
            .field("rename_scalars", &self.rename_scalars)
            .finish_non_exhaustive()
    }
}

/// A schema rewritten under a [`RenameTypes`] policy, together with the
/// frozen reverse map recording which public name stands for which original
/// type.
///
/// All methods take `&self`; a `RenamedSchema` can be shared across threads
/// and rewrite any number of requests and responses concurrently.
pub struct RenamedSchema {
    schema: Valid<Schema>,
    /// Public name back to the original type name, for exactly the types
    /// the policy renamed.
    originals: IndexMap<Name, Name>,
    renamer: Renamer,
}

impl RenamedSchema {
    /// The rewritten schema, exposing the public type names.
    pub fn schema(&self) -> &Valid<Schema> {
        &self.schema
    }

    /// The original name behind a public type name, if that type was
    /// renamed.
    pub fn original_name(&self, renamed: &str) -> Option<&Name> {
        self.originals.get(renamed)
    }

    /// The renames the policy applied, as (original name, public name)
    /// pairs in schema order.
    pub fn renames(&self) -> impl Iterator<Item = (&Name, &Name)> {
        self.originals
            .iter()
            .map(|(renamed, original)| (original, renamed))
    }

    /// Restores original type names in an outbound request.
    ///
    /// Every type reference in the document (variable definition types,
    /// fragment and inline fragment type conditions) naming a renamed type
    /// is translated back to the original name; everything else, variables
    /// included, passes through untouched. The input request is not
    /// modified.
    pub fn rewrite_request(&self, request: Request) -> Request {
        let document = visit::document::document(self, &request.document);
        Request {
            document,
            ..request
        }
    }

    /// Rewrites runtime type tags in response data to public names.
    ///
    /// Every `__typename` value in `data` goes through the renaming
    /// function directly, whether or not the named type was eligible when
    /// the schema was rewritten; the eligibility switches and the reverse
    /// map play no part here. Everything else, `errors` and `extensions`
    /// included, passes through untouched.
    pub fn rewrite_response(&self, response: Response) -> Response {
        let Some(data) = &response.data else {
            return response;
        };
        let data = data.map_entries(&|key, value| {
            if key.as_str() != TYPENAME {
                return None;
            }
            let tag = value.as_str()?;
            match (self.renamer)(tag) {
                Some(renamed) if !renamed.is_empty() && renamed != tag => {
                    Some(Value::String(renamed.into()))
                }
                _ => None,
            }
        });
        Response {
            data: Some(data),
            ..response
        }
    }
}

impl DocumentVisitor for RenamedSchema {
    fn named_type_reference(&self, name: &Name) -> Option<Name> {
        self.originals.get(name).cloned()
    }
}

impl fmt::Debug for RenamedSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenamedSchema")
            .field("schema", &self.schema)
            .field("originals", &self.originals)
            .finish_non_exhaustive()
    }
}
