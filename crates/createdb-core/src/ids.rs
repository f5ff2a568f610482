//! Resource identifier resolution.
//!
//! A resource path may be qualified at any level of the
//! `projects/instances/databases` hierarchy, from a bare database id up to
//! the full `projects/{p}/instances/{i}/databases/{d}` name. Path segments
//! override the environment defaults per field; omitted segments keep them.

use std::fmt;

use crate::config::EnvDefaults;
use crate::error::{CreatedbError, Result};

/// Identifier fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdField {
    Project,
    Instance,
    Database,
}

impl fmt::Display for IdField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdField::Project => f.write_str("ProjectId"),
            IdField::Instance => f.write_str("InstanceId"),
            IdField::Database => f.write_str("DatabaseId"),
        }
    }
}

/// A fully-qualified (project, instance, database) triple.
///
/// All fields are non-empty once resolution has succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdentifier {
    pub project: String,
    pub instance: String,
    pub database: String,
}

impl ResourceIdentifier {
    /// Renders `projects/{p}`.
    pub fn project_name(&self) -> String {
        format!("projects/{}", self.project)
    }

    /// Renders `projects/{p}/instances/{i}`.
    pub fn instance_name(&self) -> String {
        format!("projects/{}/instances/{}", self.project, self.instance)
    }

    /// Renders `projects/{p}/instances/{i}/databases/{d}`.
    pub fn database_name(&self) -> String {
        format!(
            "projects/{}/instances/{}/databases/{}",
            self.project, self.instance, self.database
        )
    }
}

/// Segment values captured from a resource path. Empty segments are dropped
/// so they never override a default.
#[derive(Debug, Default, PartialEq, Eq)]
struct PathSegments<'a> {
    project: Option<&'a str>,
    instance: Option<&'a str>,
    database: Option<&'a str>,
}

/// Resolves the positional arguments and environment defaults into a
/// fully-qualified identifier.
///
/// Accepts at most one positional argument; a supplied path is matched
/// against the six accepted shapes and its non-empty segments override the
/// corresponding defaults. Validation runs project, then instance, then
/// database, and stops at the first missing field.
pub fn resolve(args: &[String], defaults: &EnvDefaults) -> Result<ResourceIdentifier> {
    if args.len() > 1 {
        return Err(CreatedbError::TooManyArguments);
    }

    let mut project = defaults.project.clone();
    let mut instance = defaults.instance.clone();
    let mut database = defaults.database.clone();

    if let Some(path) = args.first() {
        if let Some(segments) = match_path(path) {
            if let Some(value) = segments.project {
                project = Some(value.to_string());
            }
            if let Some(value) = segments.instance {
                instance = Some(value.to_string());
            }
            if let Some(value) = segments.database {
                database = Some(value.to_string());
            }
        }
    }

    let project = project.ok_or(CreatedbError::MissingId(IdField::Project))?;
    let instance = instance.ok_or(CreatedbError::MissingId(IdField::Instance))?;
    let database = database.ok_or(CreatedbError::MissingId(IdField::Database))?;

    Ok(ResourceIdentifier {
        project,
        instance,
        database,
    })
}

/// Matches the six accepted path shapes, anchored on the trailing database
/// segment:
///
/// ```text
/// {d}
/// databases/{d}
/// {i}/databases/{d}
/// instances/{i}/databases/{d}
/// {p}/instances/{i}/databases/{d}
/// projects/{p}/instances/{i}/databases/{d}
/// ```
///
/// Returns `None` when the path fits none of them, in which case the caller
/// keeps its defaults untouched.
fn match_path(path: &str) -> Option<PathSegments<'_>> {
    let segments: Vec<&str> = path.split('/').collect();

    // A single segment is a bare database id; otherwise the last two
    // segments must be the literal "databases" label and the id.
    let (rest, database): (&[&str], &str) = match segments.as_slice() {
        [database] => (&[], *database),
        [rest @ .., "databases", database] => (rest, *database),
        _ => return None,
    };

    let (project, instance) = match rest {
        [] => (None, None),
        [instance] => (None, Some(*instance)),
        ["instances", instance] => (None, Some(*instance)),
        [project, "instances", instance] => (Some(*project), Some(*instance)),
        ["projects", project, "instances", instance] => (Some(*project), Some(*instance)),
        _ => return None,
    };

    Some(PathSegments {
        project: project.filter(|value| !value.is_empty()),
        instance: instance.filter(|value| !value.is_empty()),
        database: non_empty(database),
    })
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments<'a>(
        project: Option<&'a str>,
        instance: Option<&'a str>,
        database: Option<&'a str>,
    ) -> PathSegments<'a> {
        PathSegments {
            project,
            instance,
            database,
        }
    }

    #[test]
    fn matches_all_six_shapes() {
        assert_eq!(match_path("d"), Some(segments(None, None, Some("d"))));
        assert_eq!(
            match_path("databases/d"),
            Some(segments(None, None, Some("d")))
        );
        assert_eq!(
            match_path("i/databases/d"),
            Some(segments(None, Some("i"), Some("d")))
        );
        assert_eq!(
            match_path("instances/i/databases/d"),
            Some(segments(None, Some("i"), Some("d")))
        );
        assert_eq!(
            match_path("p/instances/i/databases/d"),
            Some(segments(Some("p"), Some("i"), Some("d")))
        );
        assert_eq!(
            match_path("projects/p/instances/i/databases/d"),
            Some(segments(Some("p"), Some("i"), Some("d")))
        );
    }

    #[test]
    fn empty_path_captures_nothing() {
        assert_eq!(match_path(""), Some(segments(None, None, None)));
    }

    #[test]
    fn empty_segments_do_not_capture() {
        assert_eq!(match_path("databases/"), Some(segments(None, None, None)));
        assert_eq!(
            match_path("/databases/d"),
            Some(segments(None, None, Some("d")))
        );
        assert_eq!(
            match_path("projects//instances/i/databases/d"),
            Some(segments(None, Some("i"), Some("d")))
        );
    }

    #[test]
    fn a_lone_label_is_a_database_id() {
        // "databases" with no slash is just a database named "databases".
        assert_eq!(
            match_path("databases"),
            Some(segments(None, None, Some("databases")))
        );
    }

    #[test]
    fn label_collisions_resolve_like_the_hierarchy() {
        // An instance that happens to be named "instances".
        assert_eq!(
            match_path("instances/databases/d"),
            Some(segments(None, Some("instances"), Some("d")))
        );
        // A project that happens to be named "projects".
        assert_eq!(
            match_path("projects/instances/i/databases/d"),
            Some(segments(Some("projects"), Some("i"), Some("d")))
        );
    }

    #[test]
    fn malformed_paths_do_not_match() {
        assert_eq!(match_path("a/b"), None);
        assert_eq!(match_path("p/i/databases/d"), None);
        assert_eq!(match_path("projects/p/databases/d"), None);
        assert_eq!(match_path("projects/p/instances/i/d"), None);
        assert_eq!(match_path("x/projects/p/instances/i/databases/d"), None);
    }
}
