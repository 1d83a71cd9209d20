use apollo_compiler::InvalidNameError;
use apollo_compiler::Name;
use thiserror::Error;

/// Errors raised while rewriting a schema under a renaming policy.
///
/// Request and response rewriting are total and never fail; everything that
/// can go wrong is caught once, at schema-build time.
#[derive(Error, Debug, PartialEq)]
pub enum RenameError {
    #[error(transparent)]
    InvalidName(#[from] InvalidNameError),
    #[error("`{first}` and `{second}` would both be named `{target}` in the renamed schema")]
    RenamedTypeCollision {
        target: Name,
        first: Name,
        second: Name,
    },
}
