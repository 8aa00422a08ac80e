//! Reserved command report data structures.

use ormgen_core::{Language, ReservedSet};

use super::output::{Output, Report};

/// Which reserved list a report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedKind {
    Words,
    Methods,
}

/// Report data from listing or querying reserved names.
#[derive(Debug)]
pub struct ReservedReport {
    pub language: Language,
    pub kind: ReservedKind,
    pub set: ReservedSet,
    /// Name asked about, and whether it is reserved.
    pub query: Option<(String, bool)>,
}

impl ReservedReport {
    /// Whether the queried name is reserved.
    pub fn is_hit(&self) -> bool {
        matches!(self.query, Some((_, true)))
    }
}

impl Report for ReservedReport {
    fn render(&self, out: &mut dyn Output) {
        let what = match self.kind {
            ReservedKind::Words => "reserved word",
            ReservedKind::Methods => "reserved method",
        };

        if let Some((name, hit)) = &self.query {
            let verdict = if *hit { "is a" } else { "is not a" };
            out.line(&format!("'{}' {} {} in {}", name, verdict, what, self.language));
            return;
        }

        let case = if self.set.is_case_insensitive() {
            "case-insensitive"
        } else {
            "case-sensitive"
        };
        out.title(&format!(
            "{} {}s ({}, {})",
            self.set.len(),
            what,
            self.language,
            case
        ));
        for word in self.set.as_slice() {
            out.list_item(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::RecordingOutput;

    #[test]
    fn test_render_list() {
        let report = ReservedReport {
            language: Language::Go,
            kind: ReservedKind::Methods,
            set: Language::Go.reserved_methods(),
            query: None,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
4 reserved methods (go, case-sensitive)
  - IsModified
  - IsColumnModified
  - IsNew
  - IsDeleted
");
    }

    #[test]
    fn test_render_query() {
        let report = ReservedReport {
            language: Language::Php,
            kind: ReservedKind::Words,
            set: Language::Php.reserved_words(),
            query: Some(("Class".to_string(), true)),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.text(), "'Class' is a reserved word in php");
    }
}
