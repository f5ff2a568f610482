use clap::Parser;

/// Command-line interface for the spanner-createdb provisioning tool
///
/// Takes an optional resource path, qualified at any level of the
/// projects/instances/databases hierarchy, and fills the remaining fields
/// from the SPANNER_PROJECT_ID, SPANNER_INSTANCE_ID and SPANNER_DATABASE_ID
/// environment variables.
#[derive(Parser)]
#[command(version, about, name = "spanner-createdb")]
pub struct Args {
    /// Resource path, from a bare database id up to
    /// projects/{project}/instances/{instance}/databases/{database}.
    ///
    /// Collected as a list so that resolution owns the too-many-arguments
    /// usage error instead of clap reporting a parse failure.
    pub path: Vec<String>,
}
