use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the aggregate file when none is given.
pub const DEFAULT_OUTPUT: &str = "all_files_with_contents.txt";

/// Run parameters. Missing fields fall back to [`Default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateOptions {
    /// Directory the walk starts from. Headers are formed by joining onto it.
    pub root: PathBuf,
    /// Aggregate file, created or truncated at the start of every run.
    pub output: PathBuf,
    /// Skip the aggregate file itself when the walk reaches it.
    pub exclude_output: bool,
}
impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            exclude_output: true,
        }
    }
}
#[derive(Debug, Default)]
pub struct AggregateBuilder {
    options: AggregateOptions,
}
impl AggregateBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: AggregateOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn exclude_output(mut self, yes: bool) -> Self {
        self.options.exclude_output = yes;
        self
    }
    pub fn build(self) -> AggregateOptions {
        self.options
    }
}
