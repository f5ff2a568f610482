//! Orchestration of the provisioning workflow.

use createdb_core::{ensure_database, ensure_instance, resolve, EnvDefaults, Provisioned, Result};
use log::info;

use crate::gcp;

/// Resolves the identifier, ensures the instance, then ensures the database,
/// stopping at the first failure.
///
/// Each provisioner's admin client lives in its own scope and is released
/// before the next stage starts, on every exit path.
pub async fn create(args: &[String], defaults: &EnvDefaults) -> Result<()> {
    let ids = resolve(args, defaults)?;
    info!("provisioning {}", ids.database_name());

    {
        let admin = gcp::instance_admin().await?;
        match ensure_instance(&admin, &ids).await? {
            Provisioned::AlreadyReady => {
                println!("Instance already created [{}]", ids.instance_name());
            }
            Provisioned::Created { .. } => {
                println!("Created instance [{}]", ids.instance);
            }
        }
    }

    {
        let admin = gcp::database_admin().await?;
        match ensure_database(&admin, &ids).await? {
            Provisioned::AlreadyReady => {
                println!("Database already created [{}]", ids.database);
            }
            Provisioned::Created { .. } => {
                println!("Created database [{}]", ids.database);
            }
        }
    }

    Ok(())
}
