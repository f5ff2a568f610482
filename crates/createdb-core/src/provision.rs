//! The create-or-verify provisioners.
//!
//! Both provisioners run the same two-step protocol: probe for the resource,
//! tolerating any probe failure, then create it and block on the resulting
//! long-running operation. The external service remains the arbiter of
//! idempotency under races; the probe only avoids redundant create attempts
//! in the common case.

use log::{debug, warn};

use crate::admin::{
    CreateDatabaseParams, CreateInstanceParams, DatabaseAdmin, InstanceAdmin, ResourceState,
};
use crate::error::{CreatedbError, Result};
use crate::ids::ResourceIdentifier;

/// Outcome of a provisioner run, distinguishing the idempotent short-circuit
/// from an actual creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provisioned {
    /// The resource already existed in state READY; no create was issued.
    AlreadyReady,
    /// The resource was created. `state` is whatever the finished operation
    /// reported, which may still be short of READY.
    Created { state: ResourceState },
}

/// Ensures the instance exists, creating it if necessary and blocking until
/// the creation operation finishes.
///
/// The existence probe tolerates every failure: not-found and transport
/// errors alike mean "create it". Only the create call and the wait surface
/// errors. A final state short of READY is a warning, not a failure; the
/// instance may still be converging.
pub async fn ensure_instance<A>(admin: &A, ids: &ResourceIdentifier) -> Result<Provisioned>
where
    A: InstanceAdmin + ?Sized,
{
    let name = ids.instance_name();

    match admin.get_instance(&name).await {
        Ok(descriptor) if descriptor.state == ResourceState::Ready => {
            return Ok(Provisioned::AlreadyReady);
        }
        Ok(descriptor) => {
            debug!(
                "instance {name} exists in state {}, issuing create anyway",
                descriptor.state
            );
        }
        Err(err) => {
            debug!("instance probe for {name} failed ({err}), treating as absent");
        }
    }

    let operation = admin
        .create_instance(CreateInstanceParams {
            parent: ids.project_name(),
            instance_id: ids.instance.clone(),
            config: format!("projects/{}/instanceConfigs/default", ids.project),
            display_name: ids.instance.clone(),
        })
        .await
        .map_err(|source| CreatedbError::CreateInstance {
            name: name.clone(),
            source,
        })?;

    let descriptor = operation
        .wait()
        .await
        .map_err(|source| CreatedbError::WaitInstance { source })?;

    if descriptor.state != ResourceState::Ready {
        warn!("instance state is not READY yet. Got state {}", descriptor.state);
    }

    Ok(Provisioned::Created {
        state: descriptor.state,
    })
}

/// Ensures the database exists within its instance, creating it with a
/// single `CREATE DATABASE` statement if necessary and blocking until the
/// creation operation finishes.
///
/// Mirrors [`ensure_instance`]: probe failures are swallowed, a non-READY
/// final state is tolerated.
pub async fn ensure_database<A>(admin: &A, ids: &ResourceIdentifier) -> Result<Provisioned>
where
    A: DatabaseAdmin + ?Sized,
{
    let name = ids.database_name();

    match admin.get_database(&name).await {
        Ok(descriptor) if descriptor.state == ResourceState::Ready => {
            return Ok(Provisioned::AlreadyReady);
        }
        Ok(descriptor) => {
            debug!(
                "database {name} exists in state {}, issuing create anyway",
                descriptor.state
            );
        }
        Err(err) => {
            debug!("database probe for {name} failed ({err}), treating as absent");
        }
    }

    let operation = admin
        .create_database(CreateDatabaseParams {
            parent: ids.instance_name(),
            create_statement: format!("CREATE DATABASE `{}`", ids.database),
        })
        .await
        .map_err(|source| CreatedbError::CreateDatabase {
            name: name.clone(),
            source,
        })?;

    let descriptor = operation
        .wait()
        .await
        .map_err(|source| CreatedbError::WaitDatabase { source })?;

    if descriptor.state != ResourceState::Ready {
        warn!("database state is not READY yet. Got state {}", descriptor.state);
    }

    Ok(Provisioned::Created {
        state: descriptor.state,
    })
}
