use libdeps_core::config::CandidateOrder;
use libdeps_core::{Configuration, LibraryVersionKey, Version};
use libdeps_resolver::{LibraryIndex, ResolveError, VersionList};

fn parse(spec: &str) -> LibraryVersionKey {
    LibraryVersionKey::parse(spec).unwrap()
}

fn v(text: &str) -> Version {
    Version::parse(text).unwrap()
}

/// Register `lib`, register each pin if it's new, and pin `lib` to it.
fn deps(index: &mut LibraryIndex, lib: &str, pins: &[&str]) -> Result<(), ResolveError> {
    let lib = parse(lib);
    index.add_key(&lib);
    for spec in pins {
        let dep = parse(spec);
        if !index.contains(dep.name.as_str(), &dep.version) {
            index.add_key(&dep);
        }
        index.add_dependency_key(&lib, &dep)?;
    }
    Ok(())
}

fn assert_exact(config: &Configuration, expected: &[&str]) {
    assert_eq!(config.len(), expected.len(), "got {config}");
    for spec in expected {
        assert!(config.contains(&parse(spec)), "{spec} missing from {config}");
    }
}

#[test]
fn test_linear_chain_has_no_extraneous_entries() {
    let mut index = LibraryIndex::new();
    deps(&mut index, "Root:1.0.0", &["A:1.0.0"]).unwrap();
    deps(&mut index, "Elsewhere:2.0.0", &["B:1.0.0"]).unwrap();

    let config = index.resolve("Root").unwrap();
    assert_exact(&config, &["Root:1.0.0", "A:1.0.0"]);
}

#[test]
fn test_circular_dependency_resolves() {
    let mut index = LibraryIndex::new();
    deps(&mut index, "Root:1.0.0", &["A:1.0.0"]).unwrap();
    deps(&mut index, "A:1.0.0", &["Root:1.0.0"]).unwrap();

    let config = index.resolve("Root").unwrap();
    assert_exact(&config, &["Root:1.0.0", "A:1.0.0"]);
}

#[test]
fn test_unmet_circular_dependency_is_unsatisfiable() {
    let mut index = LibraryIndex::new();
    deps(&mut index, "Root:1.0.0", &["A:1.0.0"]).unwrap();
    deps(&mut index, "A:1.0.0", &["Root:1.0.1"]).unwrap();
    deps(&mut index, "Root:1.0.1", &["A:1.0.1"]).unwrap();
    deps(&mut index, "A:1.0.1", &["Root:1.0.0"]).unwrap();

    let err = index.resolve("Root").unwrap_err();
    let ResolveError::UnsatisfiableGraph { name, conflicts } = err else {
        panic!("expected UnsatisfiableGraph");
    };
    assert_eq!(name, "Root");
    let candidates: Vec<String> = conflicts.iter().map(|c| c.candidate.to_string()).collect();
    assert_eq!(candidates, ["1.0.0", "1.0.1"]);

    let err = index
        .resolve_with("Root", CandidateOrder::Descending)
        .unwrap_err();
    assert!(matches!(err, ResolveError::UnsatisfiableGraph { .. }));
}

#[test]
fn test_lower_level_api_with_late_registration() {
    let mut index = LibraryIndex::new();
    let root1 = v("1.0.0");
    let a1 = v("1.0.0");

    index.add_library("Root", &root1);
    let err = index.add_dependency("Root", &root1, "A", &a1);
    assert!(
        matches!(err, Err(ResolveError::UnknownLibrary { ref name, .. }) if name == "A"),
        "should fail because A is unknown"
    );
    assert_eq!(index.edge_count(), 0);

    index.add_library("A", &a1);
    index.add_dependency("Root", &root1, "A", &a1).unwrap();

    assert_eq!(*index.versions("Root"), VersionList::from_iter([root1.clone()]));

    let config = index.resolve("Root").unwrap();
    assert_eq!(config.get("Root"), Some(&root1));

    // A circular pin back to the same root version changes nothing.
    index.add_dependency("A", &a1, "Root", &root1).unwrap();
    let versions = index.versions("Root");
    assert!(versions.contains(&root1));
    assert_eq!(versions.len(), 1);

    let config = index.resolve("Root").unwrap();
    assert_exact(&config, &["Root:1.0.0", "A:1.0.0"]);
}

#[test]
fn test_lower_level_api_divergent_cycle() {
    let mut index = LibraryIndex::new();
    let (root1, a1) = (v("1.0.0"), v("1.0.0"));
    let (root2, a2) = (v("1.0.1"), v("1.0.1"));

    index.add_library("Root", &root1);
    index.add_library("A", &a1);
    index.add_dependency("Root", &root1, "A", &a1).unwrap();
    assert_eq!(index.versions("Root").as_slice(), &[root1.clone()]);

    index.add_library("Root", &root2);
    index.add_library("A", &a2);
    index.add_dependency("Root", &root2, "A", &a2).unwrap();
    index.add_dependency("A", &a1, "Root", &root2).unwrap();
    index.add_dependency("A", &a2, "Root", &root1).unwrap();

    let versions = index.versions("Root");
    assert!(versions.contains(&root1));
    assert!(versions.contains(&root2));
    assert_eq!(versions.len(), 2);

    assert!(matches!(
        index.resolve("Root"),
        Err(ResolveError::UnsatisfiableGraph { .. })
    ));
}

#[test]
fn test_registration_is_idempotent() {
    let mut once = LibraryIndex::new();
    once.add_library("A", &v("1.2.3"));

    let mut twice = LibraryIndex::new();
    twice.add_library("A", &v("1.2.3"));
    twice.add_library("A", &v("1.2.3"));

    assert_eq!(once.versions("A"), twice.versions("A"));
    assert_eq!(once.versions("A").len(), twice.versions("A").len());
    assert_eq!(
        once.contains("A", &v("1.2.3")),
        twice.contains("A", &v("1.2.3"))
    );
}

#[test]
fn test_failed_edge_leaves_index_unchanged() {
    let mut index = LibraryIndex::new();
    deps(&mut index, "Root:1.0.0", &["A:1.0.0"]).unwrap();
    let before = (index.len(), index.edge_count(), index.library_names().len());

    for (from, to) in [
        ("Ghost:1.0.0", "A:1.0.0"),
        ("Root:1.0.0", "Ghost:1.0.0"),
        ("Root:9.9.9", "A:1.0.0"),
        ("Root:1.0.0", "A:9.9.9"),
    ] {
        let err = index
            .add_dependency_key(&parse(from), &parse(to))
            .unwrap_err();
        assert!(matches!(err, ResolveError::UnknownLibrary { .. }));
    }

    let after = (index.len(), index.edge_count(), index.library_names().len());
    assert_eq!(before, after);
    assert!(!index.contains("Ghost", &v("1.0.0")));
    assert_eq!(index.versions("Root").len(), 1);
}

#[test]
fn test_many_versions_reflect_set_membership() {
    let mut index = LibraryIndex::new();
    for text in ["2.0.0", "1.0.0", "1.5.0", "1.0.0", "2.0.0", "1.5.0-beta.1"] {
        index.add_library("Lib", &v(text));
    }
    let versions = index.versions("Lib");
    assert_eq!(versions.len(), 4);
    for text in ["1.0.0", "1.5.0", "2.0.0", "1.5.0-beta.1"] {
        assert!(versions.contains(&v(text)));
    }
    assert!(!versions.contains(&v("3.0.0")));
    let listed: Vec<String> = versions.iter().map(|x| x.to_string()).collect();
    assert_eq!(listed, ["1.0.0", "1.5.0-beta.1", "1.5.0", "2.0.0"]);
}

#[test]
fn test_single_root_version_has_no_choice() {
    let mut index = LibraryIndex::new();
    deps(&mut index, "Root:1.0.0", &["A:1.0.0"]).unwrap();
    let asc = index.resolve_with("Root", CandidateOrder::Ascending).unwrap();
    let desc = index.resolve_with("Root", CandidateOrder::Descending).unwrap();
    assert_eq!(asc, desc);
}

#[test]
fn test_tie_break_is_candidate_order() {
    let mut index = LibraryIndex::new();
    deps(&mut index, "App:1.0.0", &["Log:0.1.0"]).unwrap();
    deps(&mut index, "App:2.0.0", &["Log:0.2.0"]).unwrap();

    let asc = index.resolve("App").unwrap();
    assert_exact(&asc, &["App:1.0.0", "Log:0.1.0"]);

    let desc = index
        .resolve_with("App", CandidateOrder::Descending)
        .unwrap();
    assert_exact(&desc, &["App:2.0.0", "Log:0.2.0"]);
}

#[test]
fn test_no_such_library() {
    let mut index = LibraryIndex::new();
    deps(&mut index, "Root:1.0.0", &[]).unwrap();
    let err = index.resolve("root").unwrap_err();
    assert!(matches!(err, ResolveError::NoSuchLibrary { ref name } if name == "root"));
    assert_eq!(err.to_string(), "No versions of `root` are registered");
}

#[test]
fn test_unsatisfiable_message_lists_conflicts() {
    let mut index = LibraryIndex::new();
    deps(&mut index, "Root:1.0.0", &["A:1.0.0", "B:1.0.0"]).unwrap();
    deps(&mut index, "B:1.0.0", &["A:2.0.0"]).unwrap();
    let msg = index.resolve("Root").unwrap_err().to_string();
    assert!(msg.contains("No consistent configuration exists for `Root`"), "{msg}");
    assert!(
        msg.contains("B:1.0.0 requires A:2.0.0 but A is already 1.0.0"),
        "{msg}"
    );
}

#[test]
fn test_long_cycle_terminates() {
    let mut index = LibraryIndex::new();
    let names: Vec<String> = (0..200).map(|i| format!("L{i}")).collect();
    for i in 0..names.len() {
        let next = &names[(i + 1) % names.len()];
        deps(
            &mut index,
            &format!("{}:1.0.0", names[i]),
            &[format!("{next}:1.0.0").as_str()],
        )
        .unwrap();
    }
    let config = index.resolve("L0").unwrap();
    assert_eq!(config.len(), 200);
}
