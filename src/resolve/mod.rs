//! Name/ID resolution for fetched resource lists.
//!
//! Callers fetch the current resource list (colonies, jobs, offers) from the
//! backend and hand it to [`resolve`] together with the user-supplied string.
//! Resolution is purely functional over that list; nothing is cached.

use thiserror::Error;
use uuid::Uuid;

/// A resource addressable by id or by human-assigned name.
///
/// `id` is an opaque stable identifier; `name` is not guaranteed unique.
pub trait NamedResource {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// Resolution failures, structured for precise user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("{kind} '{query}' not found")]
    NotFound { kind: String, query: String },

    #[error("{kind} name '{name}' is ambiguous; matching ids: {}", .matches.join(", "))]
    Ambiguous {
        kind: String,
        name: String,
        matches: Vec<String>,
    },
}

/// Resolve a user-supplied name-or-id string to a unique resource id.
///
/// UUID-shaped queries (hyphenated or plain hex, any case) are treated as id
/// lookups and compared against ids byte-for-byte. Anything else is matched
/// against names in two short-circuiting passes: exact (case-sensitive)
/// first, then case-insensitive. The exact pass wins outright so that names
/// differing only by case stay individually addressable. Multiple matches in
/// either name pass are [`ResolveError::Ambiguous`] with every candidate id
/// enumerated; the function never silently picks one.
pub fn resolve<R: NamedResource>(
    resources: &[R],
    query: &str,
    kind: &str,
) -> Result<String, ResolveError> {
    if Uuid::parse_str(query).is_ok() {
        return resources
            .iter()
            .find(|r| r.id() == query)
            .map(|r| r.id().to_string())
            .ok_or_else(|| ResolveError::NotFound {
                kind: kind.to_string(),
                query: query.to_string(),
            });
    }

    let exact: Vec<&R> = resources.iter().filter(|r| r.name() == query).collect();
    match exact.as_slice() {
        [single] => return Ok(single.id().to_string()),
        [] => {}
        many => {
            return Err(ResolveError::Ambiguous {
                kind: kind.to_string(),
                name: query.to_string(),
                matches: many.iter().map(|r| r.id().to_string()).collect(),
            });
        }
    }

    let folded = query.to_lowercase();
    let insensitive: Vec<&R> = resources
        .iter()
        .filter(|r| r.name().to_lowercase() == folded)
        .collect();
    match insensitive.as_slice() {
        [single] => Ok(single.id().to_string()),
        [] => Err(ResolveError::NotFound {
            kind: kind.to_string(),
            query: query.to_string(),
        }),
        many => Err(ResolveError::Ambiguous {
            kind: kind.to_string(),
            name: query.to_string(),
            matches: many.iter().map(|r| r.id().to_string()).collect(),
        }),
    }
}
