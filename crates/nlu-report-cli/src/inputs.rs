//! `path[=name]` result set arguments.

use std::path::PathBuf;

use nlu_report_tools::ReportSource;
use nlu_report_types::LabelType;

/// One result set named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    /// Results directory or report file.
    pub path: PathBuf,
    /// Display name; defaults to the path as given.
    pub name: String,
}

impl std::str::FromStr for InputSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, name) = match s.split_once('=') {
            Some((path, name)) => (path.trim(), name.trim()),
            None => (s.trim(), s.trim()),
        };
        if path.is_empty() {
            return Err(format!("missing path in {s:?}"));
        }
        if name.is_empty() {
            return Err(format!("empty result set name in {s:?}"));
        }
        Ok(Self {
            path: PathBuf::from(path),
            name: name.to_string(),
        })
    }
}

impl InputSpec {
    /// Whether the input names a report file rather than a results directory.
    pub fn is_report_file(&self, source: &dyn ReportSource) -> bool {
        source.exists(&self.path)
    }

    /// Report file for `label_type`. Directories (and paths that do not
    /// exist yet) use the conventional filename.
    pub fn report_path(&self, source: &dyn ReportSource, label_type: LabelType) -> PathBuf {
        if self.is_report_file(source) {
            self.path.clone()
        } else {
            self.path.join(label_type.report_filename())
        }
    }
}
