//! Contracts for the external Spanner admin capabilities.
//!
//! The admin API itself (transport, auth, long-running operation polling) is
//! an external collaborator. These traits capture exactly the slice of its
//! surface that the provisioning workflow consumes, so the workflow can be
//! exercised against in-memory capabilities in tests and wired to the real
//! client library in the binary.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

/// Opaque failure reported by an admin capability or its transport.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AdminError {
    message: String,
}

impl AdminError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Resource lifecycle state as reported by the service.
///
/// The workflow only branches on READY; every other state is carried
/// verbatim so it can be reported as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    Creating,
    Ready,
    Other(String),
}

impl ResourceState {
    /// Parses the service's upper-case state name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "CREATING" => ResourceState::Creating,
            "READY" => ResourceState::Ready,
            other => ResourceState::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceState::Creating => f.write_str("CREATING"),
            ResourceState::Ready => f.write_str("READY"),
            ResourceState::Other(name) => f.write_str(name),
        }
    }
}

/// Instance attributes observed by the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDescriptor {
    pub name: String,
    pub state: ResourceState,
}

/// Database attributes observed by the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseDescriptor {
    pub name: String,
    pub state: ResourceState,
}

/// Configuration sent with an instance create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateInstanceParams {
    /// Parent resource, `projects/{p}`
    pub parent: String,
    /// Unqualified id of the instance to create
    pub instance_id: String,
    /// Fully-qualified instance configuration name
    pub config: String,
    /// Human-readable display name
    pub display_name: String,
}

/// Configuration sent with a database create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDatabaseParams {
    /// Parent resource, `projects/{p}/instances/{i}`
    pub parent: String,
    /// The `CREATE DATABASE` DDL statement naming the new database
    pub create_statement: String,
}

/// Handle to an in-flight long-running creation.
///
/// Consumed by value: the workflow blocks on it exactly once and never
/// retries. Polling, backoff, and timeouts are the collaborator's business.
#[async_trait]
pub trait OperationHandle<T>: Send {
    /// Blocks until the operation resolves to its final descriptor or fails.
    async fn wait(self: Box<Self>) -> Result<T, AdminError>;
}

/// The instance-admin capability.
#[async_trait]
pub trait InstanceAdmin: Send + Sync {
    /// Looks up an instance by its fully-qualified name.
    async fn get_instance(&self, name: &str) -> Result<InstanceDescriptor, AdminError>;

    /// Requests creation of an instance, returning the long-running handle.
    async fn create_instance(
        &self,
        params: CreateInstanceParams,
    ) -> Result<Box<dyn OperationHandle<InstanceDescriptor>>, AdminError>;
}

/// The database-admin capability.
#[async_trait]
pub trait DatabaseAdmin: Send + Sync {
    /// Looks up a database by its fully-qualified name.
    async fn get_database(&self, name: &str) -> Result<DatabaseDescriptor, AdminError>;

    /// Requests creation of a database, returning the long-running handle.
    async fn create_database(
        &self,
        params: CreateDatabaseParams,
    ) -> Result<Box<dyn OperationHandle<DatabaseDescriptor>>, AdminError>;
}
