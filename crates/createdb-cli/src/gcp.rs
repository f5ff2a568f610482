//! Cloud Spanner backends for the admin capability traits.
//!
//! The real backend talks to the Spanner admin API through the
//! `google-cloud-spanner` client library and is compiled in with the `gcp`
//! feature. Builds without it keep the full CLI surface but report at
//! connect time that no backend is available.

use createdb_core::AdminError;

#[cfg(feature = "gcp")]
mod spanner {
    use std::future::Future;
    use std::pin::Pin;

    use async_trait::async_trait;
    use createdb_core::{
        AdminError, CreateDatabaseParams, CreateInstanceParams, DatabaseAdmin, DatabaseDescriptor,
        InstanceAdmin, InstanceDescriptor, OperationHandle, ResourceState,
    };
    use google_cloud_googleapis::spanner::admin::database::v1 as databasepb;
    use google_cloud_googleapis::spanner::admin::instance::v1 as instancepb;
    use google_cloud_spanner::admin::client::Client as AdminClient;
    use google_cloud_spanner::admin::database::database_admin_client::DatabaseAdminClient;
    use google_cloud_spanner::admin::instance::instance_admin_client::InstanceAdminClient;
    use google_cloud_spanner::admin::AdminClientConfig;

    async fn admin_config() -> Result<AdminClientConfig, AdminError> {
        AdminClientConfig::default()
            .with_auth()
            .await
            .map_err(|err| AdminError::new(err.to_string()))
    }

    /// A started long-running creation, held as the single wait it permits.
    struct PendingOperation<T> {
        wait: Pin<Box<dyn Future<Output = Result<Option<T>, AdminError>> + Send>>,
    }

    #[async_trait]
    impl OperationHandle<InstanceDescriptor> for PendingOperation<instancepb::Instance> {
        async fn wait(self: Box<Self>) -> Result<InstanceDescriptor, AdminError> {
            let instance = self
                .wait
                .await?
                .ok_or_else(|| AdminError::new("operation finished without a result"))?;
            Ok(instance_descriptor(&instance))
        }
    }

    #[async_trait]
    impl OperationHandle<DatabaseDescriptor> for PendingOperation<databasepb::Database> {
        async fn wait(self: Box<Self>) -> Result<DatabaseDescriptor, AdminError> {
            let database = self
                .wait
                .await?
                .ok_or_else(|| AdminError::new("operation finished without a result"))?;
            Ok(database_descriptor(&database))
        }
    }

    fn instance_descriptor(instance: &instancepb::Instance) -> InstanceDescriptor {
        InstanceDescriptor {
            name: instance.name.clone(),
            state: ResourceState::from_name(instance.state().as_str_name()),
        }
    }

    fn database_descriptor(database: &databasepb::Database) -> DatabaseDescriptor {
        DatabaseDescriptor {
            name: database.name.clone(),
            state: ResourceState::from_name(database.state().as_str_name()),
        }
    }

    /// Instance-admin capability backed by the Spanner instance admin client.
    pub struct SpannerInstanceAdmin {
        client: InstanceAdminClient,
    }

    impl SpannerInstanceAdmin {
        pub async fn connect() -> Result<Self, AdminError> {
            let client = AdminClient::new(admin_config().await?)
                .await
                .map_err(|err| AdminError::new(err.to_string()))?
                .instance()
                .clone();
            Ok(Self { client })
        }
    }

    #[async_trait]
    impl InstanceAdmin for SpannerInstanceAdmin {
        async fn get_instance(&self, name: &str) -> Result<InstanceDescriptor, AdminError> {
            let response = self
                .client
                .get_instance(
                    instancepb::GetInstanceRequest {
                        name: name.to_string(),
                        ..Default::default()
                    },
                    None,
                )
                .await
                .map_err(|err| AdminError::new(err.to_string()))?;
            Ok(instance_descriptor(&response.into_inner()))
        }

        async fn create_instance(
            &self,
            params: CreateInstanceParams,
        ) -> Result<Box<dyn OperationHandle<InstanceDescriptor>>, AdminError> {
            let operation = self
                .client
                .create_instance(
                    instancepb::CreateInstanceRequest {
                        parent: params.parent,
                        instance_id: params.instance_id,
                        instance: Some(instancepb::Instance {
                            config: params.config,
                            display_name: params.display_name,
                            ..Default::default()
                        }),
                    },
                    None,
                )
                .await
                .map_err(|err| AdminError::new(err.to_string()))?;
            Ok(Box::new(PendingOperation {
                wait: Box::pin(async move {
                    let mut operation = operation;
                    operation
                        .wait(None)
                        .await
                        .map_err(|err| AdminError::new(err.to_string()))
                }),
            }))
        }
    }

    /// Database-admin capability backed by the Spanner database admin client.
    pub struct SpannerDatabaseAdmin {
        client: DatabaseAdminClient,
    }

    impl SpannerDatabaseAdmin {
        pub async fn connect() -> Result<Self, AdminError> {
            let client = AdminClient::new(admin_config().await?)
                .await
                .map_err(|err| AdminError::new(err.to_string()))?
                .database()
                .clone();
            Ok(Self { client })
        }
    }

    #[async_trait]
    impl DatabaseAdmin for SpannerDatabaseAdmin {
        async fn get_database(&self, name: &str) -> Result<DatabaseDescriptor, AdminError> {
            let response = self
                .client
                .get_database(
                    databasepb::GetDatabaseRequest {
                        name: name.to_string(),
                    },
                    None,
                )
                .await
                .map_err(|err| AdminError::new(err.to_string()))?;
            Ok(database_descriptor(&response.into_inner()))
        }

        async fn create_database(
            &self,
            params: CreateDatabaseParams,
        ) -> Result<Box<dyn OperationHandle<DatabaseDescriptor>>, AdminError> {
            let operation = self
                .client
                .create_database(
                    databasepb::CreateDatabaseRequest {
                        parent: params.parent,
                        create_statement: params.create_statement,
                        ..Default::default()
                    },
                    None,
                )
                .await
                .map_err(|err| AdminError::new(err.to_string()))?;
            Ok(Box::new(PendingOperation {
                wait: Box::pin(async move {
                    let mut operation = operation;
                    operation
                        .wait(None)
                        .await
                        .map_err(|err| AdminError::new(err.to_string()))
                }),
            }))
        }
    }
}

#[cfg(feature = "gcp")]
pub async fn instance_admin() -> Result<spanner::SpannerInstanceAdmin, AdminError> {
    spanner::SpannerInstanceAdmin::connect().await
}

#[cfg(feature = "gcp")]
pub async fn database_admin() -> Result<spanner::SpannerDatabaseAdmin, AdminError> {
    spanner::SpannerDatabaseAdmin::connect().await
}

#[cfg(not(feature = "gcp"))]
mod unsupported {
    use async_trait::async_trait;
    use createdb_core::{
        AdminError, CreateDatabaseParams, CreateInstanceParams, DatabaseAdmin, DatabaseDescriptor,
        InstanceAdmin, InstanceDescriptor, OperationHandle,
    };

    /// Stand-in admin type for builds without a backend. Uninhabited: the
    /// connectors fail before a value of this type can exist.
    pub enum UnsupportedAdmin {}

    #[async_trait]
    impl InstanceAdmin for UnsupportedAdmin {
        async fn get_instance(&self, _name: &str) -> Result<InstanceDescriptor, AdminError> {
            match *self {}
        }

        async fn create_instance(
            &self,
            _params: CreateInstanceParams,
        ) -> Result<Box<dyn OperationHandle<InstanceDescriptor>>, AdminError> {
            match *self {}
        }
    }

    #[async_trait]
    impl DatabaseAdmin for UnsupportedAdmin {
        async fn get_database(&self, _name: &str) -> Result<DatabaseDescriptor, AdminError> {
            match *self {}
        }

        async fn create_database(
            &self,
            _params: CreateDatabaseParams,
        ) -> Result<Box<dyn OperationHandle<DatabaseDescriptor>>, AdminError> {
            match *self {}
        }
    }
}

#[cfg(not(feature = "gcp"))]
const NO_BACKEND: &str =
    "Cloud Spanner support is not compiled into this binary (rebuild with --features gcp)";

#[cfg(not(feature = "gcp"))]
pub async fn instance_admin() -> Result<unsupported::UnsupportedAdmin, AdminError> {
    Err(AdminError::new(NO_BACKEND))
}

#[cfg(not(feature = "gcp"))]
pub async fn database_admin() -> Result<unsupported::UnsupportedAdmin, AdminError> {
    Err(AdminError::new(NO_BACKEND))
}
