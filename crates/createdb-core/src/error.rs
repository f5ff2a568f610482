//! Error types for the provisioning workflow.

use thiserror::Error;

use crate::admin::AdminError;
use crate::ids::IdField;

/// Comprehensive error type for all provisioning operations.
///
/// Existence-probe failures never appear here: the provisioners treat any
/// lookup failure as "the resource does not exist yet" and move on to the
/// create path.
#[derive(Error, Debug)]
pub enum CreatedbError {
    /// More than one positional argument was supplied
    #[error("too many arguments")]
    TooManyArguments,
    /// A field of the resource identifier is still empty after merging the
    /// path-derived and environment-derived values
    #[error("could not find {0}")]
    MissingId(IdField),
    /// The remote instance create call was rejected
    #[error("could not create instance {name}: {source}")]
    CreateInstance {
        name: String,
        #[source]
        source: AdminError,
    },
    /// The instance creation operation failed while being waited on
    #[error("waiting for instance creation to finish failed: {source}")]
    WaitInstance {
        #[source]
        source: AdminError,
    },
    /// The remote database create call was rejected
    #[error("could not create database {name}: {source}")]
    CreateDatabase {
        name: String,
        #[source]
        source: AdminError,
    },
    /// The database creation operation failed while being waited on
    #[error("waiting for database creation to finish failed: {source}")]
    WaitDatabase {
        #[source]
        source: AdminError,
    },
    /// Acquiring an admin capability failed before any request was made
    #[error("{0}")]
    Admin(#[from] AdminError),
}

/// Result type alias for provisioning operations
pub type Result<T> = std::result::Result<T, CreatedbError>;
