//! Integration tests for loading configurations and rendering operations

mod common;

use common::{args_with, init_tracing, load_testdata, testdata_path};
use sqlcond_sdk::*;
use std::sync::Arc;

struct TestCase {
    arg_names: &'static [&'static str],
    expected_sql: &'static str,
}

struct TestFile {
    file_name: &'static str,
    test_cases: &'static [TestCase],
}

const TEST_FILES: &[TestFile] = &[
    TestFile {
        file_name: "basic_00.yaml",
        test_cases: &[
            TestCase {
                arg_names: &["clientID"],
                expected_sql: "(client_id = @clientID)",
            },
            TestCase {
                arg_names: &["orgID"],
                expected_sql: "(consumer_org_id = @orgID)",
            },
            TestCase {
                arg_names: &["userID"],
                expected_sql: "(consumer_id = @userID)",
            },
            TestCase {
                arg_names: &["orgID", "userID"],
                expected_sql: "(consumer_org_id = @orgID OR consumer_id = @userID)",
            },
        ],
    },
    TestFile {
        file_name: "basic_01.yaml",
        test_cases: &[TestCase {
            arg_names: &["orgID"],
            expected_sql: "(consumer_org_id = @orgID) AND (r.audiences = 'student' OR \
                           (r.audiences LIKE '%teacher%' AND r.audiences LIKE '%student%'))",
        }],
    },
];

// =============================================================================
// Reference Document Tests
// =============================================================================

#[test]
fn test_reference_documents() {
    for test_file in TEST_FILES {
        let config = load_testdata(test_file.file_name);

        for tc in test_file.test_cases {
            let variant = config
                .get_operation("get-resources", Some(&["default"]))
                .unwrap_or_else(|e| panic!("{}: {}", test_file.file_name, e));
            let expr = variant.expression().expect("parsed at load");

            let got = render(expr, Some(&args_with(tc.arg_names))).unwrap();
            assert_eq!(got, tc.expected_sql, "file {} args {:?}", test_file.file_name, tc.arg_names);
        }
    }
}

#[test]
fn test_render_operation_returns_joins() -> anyhow::Result<()> {
    let config = load_testdata("basic_01.yaml");

    let rendered = config.render("get-resources", Some(&["student"]), &args_with(&["orgID"]))?;
    assert_eq!(
        rendered.joins,
        vec!["LEFT JOIN resource_audiences r ON r.resource_id = res.id".to_string()]
    );
    assert!(rendered.sql.starts_with("(consumer_org_id = @orgID) AND"));

    let admin = config.render("get-resources", Some(&["admin"]), &FilterArgs::new())?;
    assert!(admin.joins.is_empty());
    assert_eq!(admin.sql, "");
    Ok(())
}

#[test]
fn test_no_tags_equals_default_tag() {
    let config = load_testdata("basic_01.yaml");

    let implicit = config.get_operation("get-resources", None).unwrap();
    let explicit = config.get_operation("get-resources", Some(&["default"])).unwrap();
    assert!(std::ptr::eq(implicit, explicit));
}

#[test]
fn test_unknown_operation_and_tag() {
    let config = load_testdata("basic_00.yaml");

    assert!(matches!(
        config.get_operation("delete-resources", None),
        Err(SdkError::NotFound(_))
    ));
    assert!(matches!(
        config.get_operation("get-resources", Some(&["admin"])),
        Err(SdkError::NotFound(_))
    ));
}

#[test]
fn test_render_without_arguments_fails() {
    let config = load_testdata("basic_00.yaml");
    let variant = config.get_operation("get-resources", None).unwrap();

    let err = render(variant.expression().unwrap(), None).unwrap_err();
    assert_eq!(err, sqlcond_core::RenderError::MissingArguments);
}

#[test]
fn test_describe_lists_operations() {
    let config = load_testdata("basic_01.yaml");
    let text = config.describe();

    assert!(text.contains(" get-resources:"));
    assert!(text.contains("   tags : default student"));
    assert!(text.contains("   tags : admin"));
    assert!(text.contains("if_present consumer_org_id = @orgID"));
}

// =============================================================================
// Load Failure Tests
// =============================================================================

#[test]
fn test_variant_without_condition_fails_load() {
    init_tracing();
    let yaml = r#"
version: 1
operations:
  get-resources:
    variants:
      "default":
        joins: ["JOIN x ON x.id = y.id"]
"#;
    let err = load_configuration(yaml.as_bytes()).unwrap_err();
    assert!(matches!(err, SdkError::ConfigError(_)));
    assert!(err.to_string().contains("get-resources"));
}

#[test]
fn test_grammar_error_fails_load() {
    let yaml = r#"
operations:
  get-resources:
    variants:
      "default":
        condition:
          - "("
          - "client_id @clientID"
          - ")"
"#;
    match load_configuration(yaml.as_bytes()) {
        Err(SdkError::ParseError {
            operation, variant, ..
        }) => {
            assert_eq!(operation, "get-resources");
            assert_eq!(variant, "default");
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_unhandled_token_fails_load() {
    let yaml = r#"
operations:
  get-resources:
    variants:
      "default":
        condition:
          - { column: client_id }
"#;
    let err = load_configuration(yaml.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("unhandled token type mapping"));
}

#[test]
fn test_unhandled_token_names_operation_and_variant() {
    let yaml = r#"
operations:
  get-resources:
    variants:
      "default": { condition: ["a = @a"] }
      admin: { condition: ["(", ["b = @b", 7], ")"] }
"#;
    match load_configuration(yaml.as_bytes()) {
        Err(err @ SdkError::ParseError { .. }) => {
            assert_eq!(
                err.to_string(),
                "Parse error in operation 'get-resources' variant 'admin': \
                 Token #1.1: unhandled token type number"
            );
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_nested_grammar_error_is_located() {
    let yaml = r#"
operations:
  get-resources:
    variants:
      "default":
        condition: ["a = @a", ["(", "OR b @b", ")"]]
"#;
    let err = load_configuration(yaml.as_bytes()).unwrap_err();
    assert!(matches!(err, SdkError::ParseError { .. }));
    assert!(err.to_string().contains("Token #1.1 <OR b @b>"), "{}", err);
}

#[test]
fn test_document_without_operations_loads_empty() -> anyhow::Result<()> {
    for yaml in ["version: 1\n", "operations:\n", "operations:\n  op:\n", "operations:\n  op: {}\n"] {
        let config = load_configuration(yaml.as_bytes())?;
        assert!(matches!(
            config.get_operation("op", None),
            Err(SdkError::NotFound(_))
        ));
    }
    Ok(())
}

#[test]
fn test_strict_fields() {
    let yaml = r#"
operations:
  get-resources:
    variants:
      "default":
        condition: ["client_id = @clientID"]
        join: []
"#;
    assert!(load_configuration(yaml.as_bytes()).is_ok());

    let strict = ConfigurationLoader::new(LoaderOptions::new().strict_fields(true));
    assert!(matches!(strict.load_str(yaml), Err(SdkError::LoadError(_))));
}

#[test]
fn test_load_file_from_tempdir() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("conditions.yaml");
    std::fs::copy(testdata_path("basic_00.yaml"), &path)?;

    let config = ConfigurationLoader::default().load_file(&path)?;
    assert_eq!(config.operation_names().collect::<Vec<_>>(), vec!["get-resources"]);
    Ok(())
}

// =============================================================================
// Programmatic Configuration Tests
// =============================================================================

#[test]
fn test_configuration_declared_in_code() -> anyhow::Result<()> {
    let op = OperationConfig::new()
        .with_variant(
            "teacher",
            OperationVariant::new(RawToken::texts(["teacher_id = @userID"])),
        )
        .with_variant(
            "default student",
            OperationVariant::new(vec![
                RawToken::text("("),
                RawToken::text("if_present consumer_id = @userID"),
                RawToken::list(RawToken::texts(["AND", "published = @published"])),
                RawToken::text(")"),
            ])
            .with_joins(["JOIN courses c ON c.id = res.course_id"]),
        );

    let mut config = Configuration::new(2).with_operation("list-courses", op);
    config.parse()?;

    let rendered = config.render("list-courses", None, &args_with(&["published"]))?;
    assert_eq!(rendered.sql, "( AND published = @published)");

    let rendered = config.render(
        "list-courses",
        Some(&["student"]),
        &args_with(&["userID", "published"]),
    )?;
    assert_eq!(rendered.sql, "(consumer_id = @userID AND published = @published)");

    let rendered = config.render("list-courses", Some(&["teacher", "student"]), &FilterArgs::new())?;
    assert_eq!(rendered.sql, "teacher_id = @userID");
    Ok(())
}

#[test]
fn test_duplicate_operation_name_first_wins() -> anyhow::Result<()> {
    let first = OperationConfig::new().with_variant("default", OperationVariant::new(RawToken::texts(["a = @a"])));
    let second = OperationConfig::new().with_variant("default", OperationVariant::new(RawToken::texts(["b = @b"])));

    let mut config = Configuration::new(1)
        .with_operation("op", first)
        .with_operation("op", second);
    config.parse()?;

    assert_eq!(config.render("op", None, &FilterArgs::new())?.sql, "a = @a");
    Ok(())
}

#[test]
fn test_declaration_order_resolution_is_deterministic() {
    let yaml = r#"
operations:
  op:
    variants:
      "b shared": { condition: ["b = @b"] }
      "a shared": { condition: ["a = @a"] }
"#;
    for _ in 0..16 {
        let config = load_configuration(yaml.as_bytes()).unwrap();
        let rendered = config
            .render("op", Some(&["shared"]), &FilterArgs::new())
            .unwrap();
        assert_eq!(rendered.sql, "b = @b");
    }
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_rendering_from_shared_configuration() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Configuration>();

    let config = Arc::new(load_testdata("basic_00.yaml"));
    let cases = [
        ("clientID", "(client_id = @clientID)"),
        ("orgID", "(consumer_org_id = @orgID)"),
        ("userID", "(consumer_id = @userID)"),
    ];

    std::thread::scope(|scope| {
        for (arg, expected) in cases {
            let config = Arc::clone(&config);
            scope.spawn(move || {
                for _ in 0..100 {
                    let rendered = config
                        .render("get-resources", None, &args_with(&[arg]))
                        .unwrap();
                    assert_eq!(rendered.sql, expected);
                }
            });
        }
    });
}
