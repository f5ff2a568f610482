//! Core library for the `spanner-createdb` provisioning tool.
//!
//! This crate resolves a partially-qualified
//! `projects/{p}/instances/{i}/databases/{d}` resource path against
//! environment-derived defaults, then idempotently ensures that the instance
//! and the database exist, blocking on each long-running creation operation.
//!
//! The Spanner admin API itself (transport, auth, operation polling) is an
//! external collaborator consumed through the capability traits in [`admin`];
//! this crate contains no transport code and no process-global state. The
//! environment enters exactly once, as an explicit [`EnvDefaults`] record
//! built at the binary boundary.
//!
//! # Quick Start
//!
//! ```rust
//! use createdb_core::{resolve, EnvDefaults};
//!
//! let defaults = EnvDefaults::new(Some("demo-project"), Some("demo-instance"), None);
//! let args = vec!["databases/demo-db".to_string()];
//!
//! let ids = resolve(&args, &defaults)?;
//! assert_eq!(ids.database_name(), "projects/demo-project/instances/demo-instance/databases/demo-db");
//! # Ok::<(), createdb_core::CreatedbError>(())
//! ```

pub mod admin;
pub mod config;
pub mod error;
pub mod ids;
pub mod provision;

// Re-export commonly used types
pub use admin::{
    AdminError, CreateDatabaseParams, CreateInstanceParams, DatabaseAdmin, DatabaseDescriptor,
    InstanceAdmin, InstanceDescriptor, OperationHandle, ResourceState,
};
pub use config::EnvDefaults;
pub use error::{CreatedbError, Result};
pub use ids::{resolve, IdField, ResourceIdentifier};
pub use provision::{ensure_database, ensure_instance, Provisioned};
