use pathmark_router_rs::{Router, TemplateError, TreeError};

#[test]
fn router_when_empty_template_registered_then_returns_error() {
    let mut router = Router::new();

    let err = router.register("");
    match err.expect_err("expected empty template error") {
        TreeError::Template(TemplateError::Empty) => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_template_not_rooted_then_returns_error() {
    let mut router = Router::new();

    for template in ["h", ":user", ":user/", "home/users", "../home"] {
        let err = router.register(template);
        match err.expect_err("expected invalid template error") {
            TreeError::Template(TemplateError::Invalid { template: t }) => {
                assert_eq!(t, template);
            }
            other => panic!("unexpected error for '{template}': {other:?}"),
        }
    }
}

#[test]
fn router_when_override_marker_has_no_separator_then_returns_error() {
    let mut router = Router::new();

    for template in ["!", "!home"] {
        let err = router.register(template);
        match err.expect_err("expected invalid template error") {
            TreeError::Template(TemplateError::Invalid { .. }) => {}
            other => panic!("unexpected error for '{template}': {other:?}"),
        }
    }
}

#[test]
fn router_when_prefix_marker_not_final_then_returns_error() {
    let mut router = Router::new();

    let err = router.register("/a+b");
    match err.expect_err("expected misplaced prefix error") {
        TreeError::Template(TemplateError::MisplacedPrefix { position, .. }) => {
            assert_eq!(position, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = router.register("/files+/docs");
    match err.expect_err("expected misplaced prefix error") {
        TreeError::Template(TemplateError::MisplacedPrefix { position, .. }) => {
            assert_eq!(position, 6);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_variable_name_is_empty_then_returns_error() {
    let mut router = Router::new();

    let err = router.register("/:");
    match err.expect_err("expected empty variable name error") {
        TreeError::Template(TemplateError::EmptyVariableName { element }) => {
            assert_eq!(element, "/:");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_variable_name_contains_marker_then_returns_error() {
    let mut router = Router::new();

    let err = router.register("/home/:user:alt");
    match err.expect_err("expected invalid variable name error") {
        TreeError::Template(TemplateError::InvalidVariableName { name, .. }) => {
            assert_eq!(name, "user:alt");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_variable_name_contains_wildcards_then_returns_error() {
    let mut router = Router::new();

    for template in ["/:user*", "/:u?er", "/files/:a*b"] {
        let err = router.register(template);
        match err.expect_err("expected wildcard in variable error") {
            TreeError::Template(TemplateError::WildcardInVariable { .. }) => {}
            other => panic!("unexpected error for '{template}': {other:?}"),
        }
    }
}

#[test]
fn router_when_template_registered_twice_then_returns_error() {
    let mut router = Router::new();
    router.register("/").expect("first registration should succeed");

    let err = router.register("/");
    match err.expect_err("expected duplicate template error") {
        TreeError::DuplicateTemplate { template } => {
            assert_eq!(template, "/");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_prefix_variant_shares_terminal_then_returns_error() {
    // "/a" and "/a+" resolve to the same tree node, which holds one
    // template slot.
    let mut router = Router::new();
    router.register("/a").expect("plain template should register");

    let err = router.register("/a+");
    match err.expect_err("expected duplicate template error") {
        TreeError::DuplicateTemplate { template } => {
            assert_eq!(template, "/a+");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_second_variable_registered_on_level_then_returns_error() {
    let mut router = Router::new();
    router
        .register("/edit/:user")
        .expect("variable template should register");

    let err = router.register("/edit/:admin");
    match err.expect_err("expected variable conflict error") {
        TreeError::VariableConflict { element, .. } => {
            assert_eq!(element, "/:admin");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_sibling_registered_on_variable_level_then_returns_error() {
    let mut router = Router::new();
    router
        .register("/edit/:user")
        .expect("variable template should register");

    let err = router.register("/edit/profile");
    match err.expect_err("expected variable conflict error") {
        TreeError::VariableConflict { element, .. } => {
            assert_eq!(element, "/profile");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_variable_registered_on_populated_level_then_returns_error() {
    let mut router = Router::new();
    router
        .register("/edit/profile")
        .expect("plain template should register");

    let err = router.register("/edit/:user");
    match err.expect_err("expected variable conflict error") {
        TreeError::VariableConflict { element, .. } => {
            assert_eq!(element, "/:user");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_variables_registered_on_distinct_levels_then_succeeds() {
    let mut router = Router::new();
    router
        .register("/edit/:user")
        .expect("first level should register");
    router
        .register("/export/:user")
        .expect("parallel level should register");
    router
        .register("/edit/:user/settings")
        .expect("descending through a variable should register");
}

#[test]
fn router_when_registration_fails_then_state_is_unchanged() {
    let mut router = Router::new();
    router.register("/a/:v").expect("template should register");
    let nodes_before = router.num_templates();
    let mut templates_before: Vec<String> = router
        .defined_templates()
        .into_iter()
        .map(str::to_owned)
        .collect();
    templates_before.sort_unstable();

    router
        .register("/a/b/c/d")
        .expect_err("expected variable conflict error");

    assert_eq!(router.num_templates(), nodes_before);
    let mut templates_after = router.defined_templates();
    templates_after.sort_unstable();
    assert_eq!(templates_after, templates_before);

    let (matches, vars, matched) = router.find("/a/x");
    assert!(matched);
    assert_eq!(matches, vec!["/a/:v"]);
    assert_eq!(vars.get("v").copied(), Some("x"));

    let (_, _, matched) = router.find("/a/b/c/d");
    assert!(!matched);
}

#[test]
fn router_when_templates_share_elements_then_nodes_are_counted_once() {
    let mut router = Router::new();
    router
        .register("/home/users")
        .expect("template should register");
    assert_eq!(router.num_templates(), 2);

    router
        .register("/home/users/vedran")
        .expect("extension should register");
    assert_eq!(router.num_templates(), 3);

    router
        .register("/home")
        .expect("shorter template on existing nodes should register");
    assert_eq!(router.num_templates(), 3);
}

#[test]
fn router_when_templates_registered_then_enumeration_is_complete() {
    let templates = [
        "/",
        "/home",
        "/home/+",
        "!/etc",
        "/files/:name",
        "/h*e/u*s",
        "///triple",
    ];
    let mut router = Router::new();
    for template in templates {
        router
            .register(template)
            .unwrap_or_else(|err| panic!("'{template}' should register: {err:?}"));
    }

    let mut defined = router.defined_templates();
    defined.sort_unstable();
    let mut expected: Vec<&str> = templates.to_vec();
    expected.sort_unstable();
    assert_eq!(defined, expected);
}
