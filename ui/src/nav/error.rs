use thiserror::Error;

/// Errors raised while registering a route table or navigating through a router host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("navigation entry `{name}` has an empty path")]
    EmptyPath { name: String },

    #[error("navigation path `{0}` is declared more than once")]
    DuplicatePath(String),

    #[error("a route provider has already been registered")]
    AlreadyRegistered,

    #[error("no route matches `{path}`: {reason}")]
    UnknownPath { path: String, reason: String },

    #[error("router refused to navigate to `{path}`: {reason}")]
    Refused { path: String, reason: String },
}
