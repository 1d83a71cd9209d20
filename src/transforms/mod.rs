//! Transforms applied to a schema and to the requests and responses that
//! cross it.

mod rename_types;

pub use rename_types::RenameTypes;
pub use rename_types::RenamedSchema;
