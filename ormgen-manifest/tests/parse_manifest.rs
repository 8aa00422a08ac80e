//! Parsing and validation of ormgen.toml manifests.

use std::{fs, str::FromStr};

use ormgen_core::ClassNameProvider;
use ormgen_manifest::{ColumnType, DEFAULT_BASE_CLASS, Error, Language, Manifest, OrmToml};
use tempfile::TempDir;

const MANIFEST: &str = r#"
[generator]
language = "php"
output = "generated/model"

[tables.user]
class = "Model.Base.User"
interface = "App\\Auditable"
columns = { active = "boolean", email = "string" }

[tables.book]
base_class = "Orm\\ActiveRecord"
package = "generated/library"

[tables.book.columns]
title = "string"
published_at = "timestamp"
"#;

#[test]
fn test_parse_generator() {
    let manifest = Manifest::from_str(MANIFEST).unwrap();
    assert_eq!(manifest.generator.language, Language::Php);
    assert_eq!(manifest.generator.output, "generated/model");
    assert_eq!(manifest.generator.extension(), ".php");
    assert_eq!(manifest.generator.base_class, DEFAULT_BASE_CLASS);
}

#[test]
fn test_tables_keep_declaration_order() {
    let manifest = Manifest::from_str(MANIFEST).unwrap();
    let names: Vec<_> = manifest.entries().map(|e| e.name).collect();
    assert_eq!(names, vec!["user", "book"]);

    let book = manifest.table("book").unwrap();
    let columns: Vec<_> = book.table.columns.iter().collect();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].0, "title");
    assert_eq!(*columns[1].1, ColumnType::Timestamp);
}

#[test]
fn test_table_entries_answer_class_names() {
    let manifest = Manifest::from_str(MANIFEST).unwrap();

    let user = manifest.table("user").unwrap();
    assert_eq!(user.qualified_name(), "Model.Base.User");
    assert_eq!(user.prefix(), "generated/model");
    assert_eq!(user.base_class_name(), "BaseObject");
    assert_eq!(user.interface_name().as_deref(), Some("App\\Auditable"));

    let book = manifest.table("book").unwrap();
    assert_eq!(book.qualified_name(), "Book");
    assert_eq!(book.prefix(), "generated/library");
    assert_eq!(book.base_class_name(), "Orm\\ActiveRecord");
    assert_eq!(book.interface_name(), None);

    assert!(manifest.table("author").is_none());
}

#[test]
fn test_missing_generator_is_parse_error() {
    let err = Manifest::from_str("[tables.user]\n").unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_unknown_language_is_parse_error() {
    let err = Manifest::from_str("[generator]\nlanguage = \"cobol\"\n").unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_reserved_class_name() {
    let err = Manifest::from_str(
        r#"
        [generator]
        language = "php"

        [tables.list]
        class = "Model.Base.List"
        "#,
    )
    .unwrap_err();

    match *err {
        Error::ReservedKeyword {
            ref name,
            language,
            span,
            ..
        } => {
            assert_eq!(name, "List");
            assert_eq!(language, Language::Php);
            assert!(span.is_some());
        }
        ref other => panic!("expected reserved keyword error, got {other:?}"),
    }
}

#[test]
fn test_reserved_default_class_name() {
    // "interface" becomes "Interface", which PHP reserves ignoring case
    let err = Manifest::from_str(
        r#"
        [generator]
        language = "php"

        [tables.interface]
        "#,
    )
    .unwrap_err();
    assert!(matches!(*err, Error::ReservedKeyword { .. }));

    // ...while Rust keywords are case-sensitive
    assert!(
        Manifest::from_str(
            r#"
            [generator]
            language = "rust"

            [tables.type]
            "#,
        )
        .is_ok()
    );
}

#[test]
fn test_empty_class_name() {
    let err = Manifest::from_str(
        r#"
        [generator]
        language = "go"

        [tables.user]
        class = "Model\\Base\\"
        "#,
    )
    .unwrap_err();

    match *err {
        Error::EmptyClassName {
            ref table,
            ref class,
            span,
            ..
        } => {
            assert_eq!(table, "user");
            assert_eq!(class, "Model\\Base\\");
            assert!(span.is_some());
        }
        ref other => panic!("expected empty class name error, got {other:?}"),
    }
}

#[test]
fn test_invalid_column_name() {
    let err = Manifest::from_str(
        r#"
        [generator]
        language = "php"

        [tables.user.columns]
        "first name" = "string"
        "#,
    )
    .unwrap_err();
    assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    assert!(err.to_string().contains("column in 'user'"));
}

#[test]
fn test_invalid_extension() {
    let err = Manifest::from_str(
        r#"
        [generator]
        language = "php"
        extension = "php"
        "#,
    )
    .unwrap_err();
    assert!(matches!(*err, Error::Validation { .. }));
}

#[test]
fn test_open_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ormgen.toml");
    fs::write(&path, MANIFEST).unwrap();

    let file = OrmToml::open(&path).unwrap();
    assert_eq!(file.path(), path);
    assert_eq!(file.content(), MANIFEST);
    assert_eq!(file.manifest().tables.len(), 2);
}

#[test]
fn test_open_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ormgen.toml");

    let err = OrmToml::open(&path).err().unwrap();
    assert!(matches!(*err, Error::Io { .. }));
    assert!(Manifest::from_file(&path).is_err());
}
