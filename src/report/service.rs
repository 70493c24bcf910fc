//! Name-keyed registry of report generators.

use super::ReportGenerator;
use crate::task::domain::Task;
use std::collections::BTreeMap;

/// Registry dispatching report requests by name.
#[derive(Default)]
pub struct ReportService {
    generators: BTreeMap<String, Box<dyn ReportGenerator>>,
}

impl ReportService {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a generator under a name, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, generator: Box<dyn ReportGenerator>) {
        self.generators.insert(name.into(), generator);
    }

    /// Runs the named generator over the tasks.
    ///
    /// Unknown names yield a "not found" message rather than an error;
    /// the menu layer shows the text either way.
    #[must_use]
    pub fn generate(&self, name: &str, tasks: &[Task]) -> String {
        self.generators.get(name).map_or_else(
            || format!("Report generator '{name}' not found"),
            |generator| generator.generate(tasks),
        )
    }

    /// Lists the registered report names in lexical order.
    #[must_use]
    pub fn available(&self) -> Vec<&str> {
        self.generators.keys().map(String::as_str).collect()
    }
}
