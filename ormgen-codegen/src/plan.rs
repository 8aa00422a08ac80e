//! Class plans: the resolved names and path for one generated class.

use eyre::{Context, Result, eyre};
use ormgen_core::{ClassNameProvider, bare_class_name};
use ormgen_manifest::{Manifest, TableEntry};
use serde::Serialize;

use crate::{BooleanAccessor, NameResolver};

/// Names and location of one generated class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassPlan {
    /// Bare class identifier to emit
    pub class_name: String,
    /// Output path of the generated file
    pub file_path: String,
    /// Bare name of the base class
    pub base_class: String,
    /// Bare name of the implemented interface
    pub interface: Option<String>,
}

impl ClassPlan {
    /// Resolve a class from its qualified name.
    ///
    /// Fails when the qualified name has nothing after its last delimiter;
    /// reserved-word checks belong to manifest parsing and lints.
    pub fn resolve(
        resolver: &NameResolver,
        qualified: &str,
        prefix: &str,
        provider: &impl ClassNameProvider,
    ) -> Result<Self> {
        let class_name = non_empty(resolver.class_name(Some(qualified)), qualified)?;
        let base = provider.base_class_name();
        let base_class = non_empty(bare_class_name(Some(base.as_str())), &base)?;
        let interface = provider
            .interface_name()
            .map(|iface| {
                non_empty(bare_class_name(Some(iface.as_str())), &iface).map(str::to_string)
            })
            .transpose()?;

        Ok(Self {
            file_path: resolver.file_path(prefix, Some(class_name)),
            class_name: class_name.to_string(),
            base_class: base_class.to_string(),
            interface,
        })
    }
}

fn non_empty<'a>(bare: Option<&'a str>, qualified: &str) -> Result<&'a str> {
    match bare {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(eyre!("'{}' does not end in a class name", qualified)),
    }
}

/// A table's class plan together with its boolean accessors.
#[derive(Debug, Clone, Serialize)]
pub struct TablePlan {
    pub table: String,
    #[serde(flatten)]
    pub class: ClassPlan,
    pub accessors: Vec<BooleanAccessor>,
}

impl TablePlan {
    /// Plan one table.
    pub fn new(resolver: &NameResolver, entry: TableEntry<'_>) -> Result<Self> {
        let qualified = entry.qualified_name();
        let class = ClassPlan::resolve(resolver, &qualified, entry.prefix(), &entry)
            .wrap_err_with(|| format!("table '{}'", entry.name))?;
        Ok(Self {
            table: entry.name.to_string(),
            class,
            accessors: BooleanAccessor::for_table(resolver.naming(), entry),
        })
    }

    /// Plan every table of a manifest, in declaration order.
    pub fn for_manifest(manifest: &Manifest) -> Result<Vec<Self>> {
        let resolver = NameResolver::from_config(&manifest.generator);
        manifest
            .entries()
            .map(|entry| Self::new(&resolver, entry))
            .collect()
    }
}
