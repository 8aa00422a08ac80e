//! Class plans resolved from whole manifests.

use std::str::FromStr;

use ormgen_codegen::{NameResolver, TablePlan, lints::run_lints};
use ormgen_core::Language;
use ormgen_manifest::Manifest;

fn plans(manifest_toml: &str) -> Vec<TablePlan> {
    let manifest = Manifest::from_str(manifest_toml).expect("Failed to parse manifest");
    TablePlan::for_manifest(&manifest).expect("Failed to plan manifest")
}

/// One line per class, accessors indented below.
fn render(plans: &[TablePlan]) -> String {
    plans
        .iter()
        .map(|plan| {
            let class = &plan.class;
            let mut out = format!(
                "{}: {} -> {} (extends {}",
                plan.table, class.class_name, class.file_path, class.base_class
            );
            if let Some(iface) = &class.interface {
                out.push_str(&format!(", implements {}", iface));
            }
            out.push(')');
            for accessor in &plan.accessors {
                let note = if accessor.skipped { " (skipped)" } else { "" };
                out.push_str(&format!("\n  {}{}", accessor.name, note));
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_php_manifest() {
    let plans = plans(
        r#"
        [generator]
        language = "php"
        output = "generated/model"

        [tables.user]
        class = "Model.Base.UserPeer"
        interface = "App\\Auditable"
        columns = { active = "boolean", new = "boolean", email = "string" }

        [tables.book_author]
        base_class = "Orm\\Runtime\\ActiveRecord"
        package = "generated/library"
        "#,
    );

    insta::assert_snapshot!(render(&plans), @r"
user: UserPeer -> generated/model/UserPeer.php (extends BaseObject, implements Auditable)
  isActive
  isNew (skipped)
book_author: BookAuthor -> generated/library/BookAuthor.php (extends ActiveRecord)
");
}

#[test]
fn test_go_manifest() {
    let plans = plans(
        r#"
        [generator]
        language = "go"
        output = "generated/model"
        base_class = "orm.Entity"

        [tables.user_peer]
        class = "Model.Base.UserPeer"
        columns = { is_admin = "boolean", deleted = "boolean" }
        "#,
    );

    insta::assert_snapshot!(render(&plans), @r"
user_peer: UserPeer -> generated/model/UserPeer.go (extends Entity)
  IsAdmin
  IsDeleted (skipped)
");
}

#[test]
fn test_extension_override() {
    let plans = plans(
        r#"
        [generator]
        language = "typescript"
        output = "src/models"
        extension = ".model.ts"

        [tables.order_line]
        "#,
    );

    assert_eq!(plans[0].class.file_path, "src/models/OrderLine.model.ts");
}

#[test]
fn test_plan_serializes_flat() {
    let plans = plans(
        r#"
        [generator]
        language = "rust"
        output = "src/generated"

        [tables.account]
        columns = { locked = "boolean" }
        "#,
    );

    let json = serde_json::to_value(&plans[0]).unwrap();
    assert_eq!(json["table"], "account");
    assert_eq!(json["class_name"], "Account");
    assert_eq!(json["file_path"], "src/generated/Account.rs");
    assert_eq!(json["base_class"], "BaseObject");
    assert!(json["interface"].is_null());
    assert_eq!(json["accessors"][0]["name"], "is_locked");
    assert_eq!(json["accessors"][0]["skipped"], false);
}

#[test]
fn test_plans_and_lints_agree_on_skipped_accessors() {
    let manifest = Manifest::from_str(
        r#"
        [generator]
        language = "typescript"

        [tables.post]
        columns = { new = "boolean", modified = "boolean", draft = "boolean" }
        "#,
    )
    .unwrap();

    let plans = TablePlan::for_manifest(&manifest).unwrap();
    let skipped = plans[0].accessors.iter().filter(|a| a.skipped).count();
    let warnings = run_lints(&manifest)
        .into_iter()
        .filter(|d| d.lint == "reserved-accessor")
        .count();
    assert_eq!(skipped, 2);
    assert_eq!(warnings, skipped);
}

#[test]
fn test_resolver_is_shareable_across_threads() {
    let resolver = NameResolver::new(Language::Php);
    let handles: Vec<_> = ["Model.User", "Model\\Book", "Author"]
        .into_iter()
        .map(|qualified| {
            let resolver = resolver.clone();
            std::thread::spawn(move || {
                let class = resolver.class_name(Some(qualified));
                resolver.file_path("generated", class)
            })
        })
        .collect();

    let paths: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        paths,
        vec![
            "generated/User.php",
            "generated/Book.php",
            "generated/Author.php"
        ]
    );
}
