//! Route table composition properties.

use gallery_router::routing::{
    CompositionOptions, MatchOptions, RouteEntry, RouteRegistry, Violation, ROOT_GROUP,
};

mod common;

use common::{group, leaf};

#[test]
fn test_order_is_concatenation_of_groups() {
    let groups = vec![
        group("chapter1", vec![leaf("/chapter1/first-scene", "第一个场景"), leaf("/chapter1/control-gui", "交互控制")]),
        group("chapter2", vec![leaf("/chapter2/basic-scene", "基础场景")]),
        group("chapter3", vec![leaf("/chapter3/point-light", "点光源"), leaf("/chapter3/spot-light", "聚光灯")]),
    ];
    let registry = RouteRegistry::compose(&groups, None).unwrap();

    let expected: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.routes().iter().map(RouteEntry::path))
        .collect();
    let actual: Vec<&str> = registry.routes().iter().map(|r| r.path()).collect();
    assert_eq!(actual, expected);

    let declared: Vec<&str> = registry.entries().iter().map(RouteEntry::path).collect();
    assert_eq!(declared, expected);
}

#[test]
fn test_scenario_two_groups() {
    let groups = [group("a", vec![leaf("/a", "A")]), group("b", vec![leaf("/b", "B")])];
    let registry = RouteRegistry::compose(&groups, None).unwrap();

    let table: Vec<(&str, Option<&str>)> = registry.routes().iter().map(|r| (r.path(), r.title())).collect();
    assert_eq!(table, [("/a", Some("A")), ("/b", Some("B"))]);
}

#[test]
fn test_duplicate_path_rejected() {
    let groups = [
        group("chapter1", vec![leaf("/x", "X")]),
        group("chapter2", vec![leaf("/y", "Y"), leaf("/x", "X again")]),
    ];
    let err = RouteRegistry::compose(&groups, None).unwrap_err();

    assert_eq!(
        err.violations(),
        [Violation::DuplicatePath {
            path: "/x".into(),
            first_group: "chapter1".into(),
            second_group: "chapter2".into(),
        }]
    );
    assert!(err.to_string().contains("`/x`"));
}

#[test]
fn test_duplicate_between_root_child_and_group() {
    let root = RouteEntry::redirect("/", "/demo/a", vec![leaf("/demo/a", "A")]);
    let groups = [group("chapter1", vec![leaf("/demo/a", "A")])];
    let err = RouteRegistry::compose(&groups, Some(&root)).unwrap_err();

    assert!(matches!(
        &err.violations()[0],
        Violation::DuplicatePath { first_group, second_group, .. }
            if first_group == ROOT_GROUP && second_group == "chapter1"
    ));
}

#[test]
fn test_redirect_matches_direct_resolution() {
    let root = RouteEntry::redirect("/", "/demo/c", vec![leaf("/demo/a", "A"), leaf("/demo/c", "C")]);
    let registry = RouteRegistry::compose(&[], Some(&root)).unwrap();

    let via_parent = registry.resolve("/").unwrap().route();
    let direct = registry.resolve("/demo/c").unwrap().route();
    assert_eq!(via_parent.view(), direct.view());
    assert_eq!(via_parent.meta(), direct.meta());
}

#[test]
fn test_redirect_parent_is_not_a_leaf() {
    let root = RouteEntry::redirect("/", "/demo/c", vec![leaf("/demo/a", "A"), leaf("/demo/c", "C")]);
    let registry = RouteRegistry::compose(&[], Some(&root)).unwrap();

    assert!(registry.contains("/"));
    assert!(registry.routes().iter().all(|r| r.path() != "/"));
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_composition_is_idempotent() {
    let root = RouteEntry::redirect("/", "/demo/c", vec![leaf("/demo/c", "C")]);
    let groups = [
        group("a", vec![leaf("/a", "A").with_meta("order", 1)]),
        group("b", vec![leaf("/b", "B")]),
    ];

    let first = RouteRegistry::compose(&groups, Some(&root)).unwrap();
    let second = RouteRegistry::compose(&groups, Some(&root)).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.routes().iter().map(|r| r.path()).collect::<Vec<_>>(),
        second.routes().iter().map(|r| r.path()).collect::<Vec<_>>()
    );
}

#[test]
fn test_require_titles() {
    let groups = [group("a", vec![RouteEntry::new("/a", "A")])];
    let options = CompositionOptions {
        require_titles: true,
        ..CompositionOptions::default()
    };

    assert!(RouteRegistry::compose(&groups, None).is_ok());
    let err = RouteRegistry::compose_with(&groups, None, options).unwrap_err();
    assert_eq!(
        err.violations(),
        [Violation::MissingTitle {
            group: "a".into(),
            path: "/a".into()
        }]
    );
}

#[test]
fn test_container_without_title_allowed_with_require_titles() {
    let root = RouteEntry::redirect("/", "/demo/c", vec![leaf("/demo/c", "C")]);
    let options = CompositionOptions {
        require_titles: true,
        ..CompositionOptions::default()
    };
    assert!(RouteRegistry::compose_with(&[], Some(&root), options).is_ok());
}

#[test]
fn test_strict_sensitive_matching() {
    let groups = [group("chapter3", vec![leaf("/chapter3/LensFlares", "镜头光晕")])];
    let lenient = RouteRegistry::compose(&groups, None).unwrap();
    let exact = RouteRegistry::compose_with(
        &groups,
        None,
        CompositionOptions {
            matching: MatchOptions {
                sensitive: true,
                strict: true,
            },
            require_titles: false,
        },
    )
    .unwrap();

    assert!(lenient.contains("/chapter3/lensflares/"));
    assert!(!exact.contains("/chapter3/lensflares"));
    assert!(!exact.contains("/chapter3/LensFlares/"));
    assert!(exact.contains("/chapter3/LensFlares"));
}
