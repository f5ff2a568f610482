//! Usage text rendered after any failure.

/// The six accepted path shapes and the environment variables consulted for
/// per-segment defaults.
pub const USAGE: &str = "\
Usage:
  spanner-createdb {databaseId}
  spanner-createdb databases/{databaseId}
  spanner-createdb {instanceId}/databases/{databaseId}
  spanner-createdb instances/{instanceId}/databases/{databaseId}
  spanner-createdb {projectId}/instances/{instanceId}/databases/{databaseId}
  spanner-createdb projects/{projectId}/instances/{instanceId}/databases/{databaseId}

You can also pass the ids via environment variables:
  SPANNER_PROJECT_ID
  SPANNER_INSTANCE_ID
  SPANNER_DATABASE_ID";
