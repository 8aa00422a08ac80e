//! Resolve command report data structures.

use ormgen_core::Language;

use super::output::{Output, Report};

/// Report data from resolving one qualified name.
#[derive(Debug)]
pub struct ResolveReport {
    /// Qualified name as given.
    pub qualified: String,
    /// Target language.
    pub language: Language,
    /// Bare class name (empty when the name ends in a delimiter).
    pub class_name: String,
    /// Generated file path.
    pub file_path: String,
    /// Whether the bare class name is a reserved word.
    pub reserved: bool,
}

impl ResolveReport {
    /// Whether the class name can be emitted as-is.
    pub fn is_usable(&self) -> bool {
        !self.class_name.is_empty() && !self.reserved
    }
}

impl Report for ResolveReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("class", &self.class_name);
        out.key_value("file", &self.file_path);

        if self.class_name.is_empty() {
            out.warning(&format!(
                "warning: '{}' does not end in a class name",
                self.qualified
            ));
        } else if self.reserved {
            out.warning(&format!(
                "warning: '{}' is a reserved word in {}",
                self.class_name, self.language
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::RecordingOutput;

    #[test]
    fn test_render_reserved() {
        let report = ResolveReport {
            qualified: "Model.Base.List".to_string(),
            language: Language::Php,
            class_name: "List".to_string(),
            file_path: "out/List.php".to_string(),
            reserved: true,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
class: List
file: out/List.php
[stderr] warning: 'List' is a reserved word in php
");
    }
}
