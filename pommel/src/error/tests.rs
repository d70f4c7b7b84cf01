use super::{ModelError, Problems, Severity};

#[test]
fn structural_error_names_the_model() {
    let err = ModelError::structural("g:a:1.0", "root is not an object");
    assert_eq!(
        err.to_string(),
        "structural error in model 'g:a:1.0': root is not an object"
    );
}

#[test]
fn identity_error_names_the_uri() {
    let err = ModelError::identity("project/dependencies#collection/dependency", "no artifactId");
    assert!(err.to_string().contains("dependencies#collection"));
}

#[test]
fn problems_accumulate_in_order() {
    let mut problems = Problems::new();
    problems.warn("source failed", Some("project/build/directory"));
    problems.notice("token left verbatim", None);

    assert_eq!(problems.len(), 2);
    let recorded: Vec<_> = problems.iter().collect();
    assert_eq!(recorded[0].severity(), Severity::Warning);
    assert_eq!(recorded[0].uri(), Some("project/build/directory"));
    assert_eq!(recorded[1].severity(), Severity::Notice);
}
