use exalsius::resolve::{resolve, NamedResource, ResolveError};
use pretty_assertions::assert_eq;

struct ColonySummary {
    id: String,
    name: String,
}

impl ColonySummary {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

impl NamedResource for ColonySummary {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn colonies() -> Vec<ColonySummary> {
    vec![
        ColonySummary::new("u1", "alpha"),
        ColonySummary::new("u2", "beta"),
    ]
}

#[test]
fn resolves_exact_name() {
    assert_eq!(resolve(&colonies(), "beta", "colony").unwrap(), "u2");
}

#[test]
fn resolves_case_insensitive_name() {
    assert_eq!(resolve(&colonies(), "BETA", "colony").unwrap(), "u2");
}

#[test]
fn unknown_name_is_not_found() {
    let err = resolve(&colonies(), "gamma", "colony").unwrap_err();
    assert_eq!(
        err,
        ResolveError::NotFound {
            kind: "colony".to_string(),
            query: "gamma".to_string(),
        }
    );
}

#[test]
fn resolves_by_uuid_id() {
    let colonies = vec![
        ColonySummary::new("7c9e6679-7425-40de-944b-e07fc1f90ae7", "alpha"),
        ColonySummary::new("550e8400-e29b-41d4-a716-446655440000", "beta"),
    ];
    assert_eq!(
        resolve(&colonies, "550e8400-e29b-41d4-a716-446655440000", "colony").unwrap(),
        "550e8400-e29b-41d4-a716-446655440000"
    );
}

#[test]
fn uuid_shaped_query_with_no_id_match_is_not_found() {
    let err = resolve(
        &colonies(),
        "550e8400-e29b-41d4-a716-446655440000",
        "colony",
    )
    .unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { .. }));
}

#[test]
fn duplicate_names_enumerate_all_candidates() {
    let jobs = vec![
        ColonySummary::new("u1", "training-run"),
        ColonySummary::new("u2", "training-run"),
        ColonySummary::new("u3", "eval-run"),
    ];
    let err = resolve(&jobs, "training-run", "job").unwrap_err();
    assert_eq!(
        err,
        ResolveError::Ambiguous {
            kind: "job".to_string(),
            name: "training-run".to_string(),
            matches: vec!["u1".to_string(), "u2".to_string()],
        }
    );
}

#[test]
fn exact_casing_disambiguates_case_colliding_names() {
    let colonies = vec![
        ColonySummary::new("u1", "Foo"),
        ColonySummary::new("u2", "foo"),
    ];
    assert_eq!(resolve(&colonies, "Foo", "colony").unwrap(), "u1");
    assert_eq!(resolve(&colonies, "foo", "colony").unwrap(), "u2");

    let err = resolve(&colonies, "FOO", "colony").unwrap_err();
    assert_eq!(
        err,
        ResolveError::Ambiguous {
            kind: "colony".to_string(),
            name: "FOO".to_string(),
            matches: vec!["u1".to_string(), "u2".to_string()],
        }
    );
}
