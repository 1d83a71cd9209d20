use apollo_compiler::Name;
use apollo_compiler::Schema;
use apollo_compiler::ast;
use apollo_compiler::collections::IndexMap;
use apollo_compiler::collections::IndexSet;
use apollo_compiler::schema::Component;
use apollo_compiler::schema::ComponentName;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::schema::FieldDefinition;
use apollo_compiler::validation::Valid;

use crate::error::RenameError;

/// Observes every named type of a schema and decides replacement names.
pub(crate) trait SchemaVisitor {
    /// Offered each named type that is not a root operation type. Return the
    /// replacement name, or `None` to keep the type as is.
    fn named_type(
        &mut self,
        name: &Name,
        ty: &ExtendedType,
    ) -> Result<Option<Name>, RenameError>;

    /// Offered each root operation type. Same convention as
    /// [`Self::named_type`].
    fn root_type(
        &mut self,
        operation: ast::OperationType,
        name: &Name,
    ) -> Result<Option<Name>, RenameError>;
}

/// Walks every named type of `source`, offering each to `visitor`, and
/// produces the rewritten schema together with the applied old name → new
/// name map.
///
/// Introspection types are never offered. Renamed types are rebuilt around
/// the new name and every reference to them is re-pointed: the `types` map
/// key, field and argument types, input field types, implemented-interface
/// lists, union member lists, directive definition arguments, and root
/// operation bindings. `source` itself is never modified.
///
/// Fails if two types would end up sharing one final name.
pub(crate) fn schema(
    visitor: &mut impl SchemaVisitor,
    source: &Valid<Schema>,
) -> Result<(Valid<Schema>, IndexMap<Name, Name>), RenameError> {
    let mut renames: IndexMap<Name, Name> = IndexMap::default();
    for (name, ty) in &source.types {
        if is_graphql_reserved_name(name) {
            continue;
        }
        let renamed = match root_operation_kind(source, name) {
            Some(operation) => visitor.root_type(operation, name)?,
            None => visitor.named_type(name, ty)?,
        };
        if let Some(renamed) = renamed {
            if renamed != *name {
                renames.insert(name.clone(), renamed);
            }
        }
    }

    let mut final_names: IndexMap<Name, Name> = IndexMap::default();
    for name in source.types.keys() {
        let final_name = renames.get(name).unwrap_or(name);
        if let Some(first) = final_names.insert(final_name.clone(), name.clone()) {
            return Err(RenameError::RenamedTypeCollision {
                target: final_name.clone(),
                first,
                second: name.clone(),
            });
        }
    }

    if renames.is_empty() {
        return Ok((source.clone(), renames));
    }

    let mut schema = source.clone().into_inner();

    let types = std::mem::take(&mut schema.types);
    for (name, mut ty) in types {
        rewrite_definition(&mut ty, &renames);
        let final_name = renames.get(&name).cloned().unwrap_or(name);
        schema.types.insert(final_name, ty);
    }

    for directive in schema.directive_definitions.values_mut() {
        let directive = directive.make_mut();
        for argument in &mut directive.arguments {
            rewrite_type(argument.make_mut().ty.make_mut(), &renames);
        }
    }

    let schema_definition = schema.schema_definition.make_mut();
    for root in [
        &mut schema_definition.query,
        &mut schema_definition.mutation,
        &mut schema_definition.subscription,
    ]
    .into_iter()
    .flatten()
    {
        rename_name(&mut root.name, &renames);
    }

    Ok((Valid::assume_valid(schema), renames))
}

fn is_graphql_reserved_name(name: &str) -> bool {
    name.starts_with("__")
}

fn root_operation_kind(schema: &Schema, name: &Name) -> Option<ast::OperationType> {
    [
        ast::OperationType::Query,
        ast::OperationType::Mutation,
        ast::OperationType::Subscription,
    ]
    .into_iter()
    .find(|operation| {
        schema
            .root_operation(*operation)
            .is_some_and(|root| root == name)
    })
}

/// Renames the definition itself, then every type its members refer to.
fn rewrite_definition(ty: &mut ExtendedType, renames: &IndexMap<Name, Name>) {
    match ty {
        ExtendedType::Scalar(node) => {
            rename_name(&mut node.make_mut().name, renames);
        }
        ExtendedType::Object(node) => {
            let object = node.make_mut();
            rename_name(&mut object.name, renames);
            rewrite_component_names(&mut object.implements_interfaces, renames);
            rewrite_fields(&mut object.fields, renames);
        }
        ExtendedType::Interface(node) => {
            let interface = node.make_mut();
            rename_name(&mut interface.name, renames);
            rewrite_component_names(&mut interface.implements_interfaces, renames);
            rewrite_fields(&mut interface.fields, renames);
        }
        ExtendedType::Union(node) => {
            let union_type = node.make_mut();
            rename_name(&mut union_type.name, renames);
            rewrite_component_names(&mut union_type.members, renames);
        }
        ExtendedType::Enum(node) => {
            rename_name(&mut node.make_mut().name, renames);
        }
        ExtendedType::InputObject(node) => {
            let input_object = node.make_mut();
            rename_name(&mut input_object.name, renames);
            for field in input_object.fields.values_mut() {
                rewrite_type(field.make_mut().ty.make_mut(), renames);
            }
        }
    }
}

fn rewrite_fields(
    fields: &mut IndexMap<Name, Component<FieldDefinition>>,
    renames: &IndexMap<Name, Name>,
) {
    for field in fields.values_mut() {
        let field = field.make_mut();
        rewrite_type(&mut field.ty, renames);
        for argument in &mut field.arguments {
            rewrite_type(argument.make_mut().ty.make_mut(), renames);
        }
    }
}

fn rewrite_component_names(names: &mut IndexSet<ComponentName>, renames: &IndexMap<Name, Name>) {
    *names = std::mem::take(names)
        .into_iter()
        .map(|mut component| {
            rename_name(&mut component.name, renames);
            component
        })
        .collect();
}

fn rewrite_type(ty: &mut ast::Type, renames: &IndexMap<Name, Name>) {
    match ty {
        ast::Type::Named(name) | ast::Type::NonNullNamed(name) => rename_name(name, renames),
        ast::Type::List(inner) | ast::Type::NonNullList(inner) => rewrite_type(inner, renames),
    }
}

fn rename_name(name: &mut Name, renames: &IndexMap<Name, Name>) {
    if let Some(renamed) = renames.get(name) {
        *name = renamed.clone();
    }
}
