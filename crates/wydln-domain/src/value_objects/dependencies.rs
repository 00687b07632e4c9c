//! Tool Dependencies
//!
//! A tool may name other tools a client should call before it. The list is
//! documentation only: it ends up in the tool description and is neither
//! checked against the registry nor enforced as call order.

use crate::constants::{DEPENDENCY_BULLET, DEPENDENCY_HEADING};

/// Ordered set of tool names
///
/// Names keep their insertion order and a name added twice is kept once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolDependencies {
    names: Vec<String>,
}

impl ToolDependencies {
    /// Empty dependency list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency, returning false if it was already declared
    pub fn add<S: Into<String>>(&mut self, name: S) -> bool {
        let name = name.into();
        if self.names.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Builder form of [`add`](Self::add)
    pub fn with<S: Into<String>>(mut self, name: S) -> Self {
        self.add(name);
        self
    }

    /// Declared names in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of declared dependencies
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no dependency is declared
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Text appended to a tool description
    ///
    /// Empty when there are no dependencies. Otherwise a heading followed by
    /// one bullet per name, bullets separated by blank lines.
    pub fn description_suffix(&self) -> String {
        if self.names.is_empty() {
            return String::new();
        }

        let bullets = self
            .names
            .iter()
            .map(|name| format!("{DEPENDENCY_BULLET}{name}"))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("\n\n\n{DEPENDENCY_HEADING}\n\n{bullets}.")
    }
}

impl<S: Into<String>> FromIterator<S> for ToolDependencies {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dependencies = Self::new();
        for name in iter {
            dependencies.add(name);
        }
        dependencies
    }
}
