//! Ordered commits of one repository section.

use std::collections::BTreeMap;

use crate::CommitRecord;

/// The commits reported for one repository, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitCollection {
    label: String,
    records: Vec<CommitRecord>,
}

impl CommitCollection {
    /// Creates an empty collection for the given repository label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            records: Vec::new(),
        }
    }

    /// Appends a record, keeping insertion order.
    pub fn push(&mut self, record: CommitRecord) {
        self.records.push(record);
    }

    /// The repository or submodule display name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The records in traversal order.
    pub fn records(&self) -> &[CommitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Groups records by module, modules in ascending order.
    ///
    /// A record touching several modules is listed under each of them. Within
    /// a module, records keep collection order.
    pub fn group_by_module(&self) -> BTreeMap<&str, Vec<&CommitRecord>> {
        let mut groups: BTreeMap<&str, Vec<&CommitRecord>> = BTreeMap::new();

        for record in &self.records {
            for module in record.modules() {
                groups.entry(module.as_str()).or_default().push(record);
            }
        }

        groups
    }
}

impl<'a> IntoIterator for &'a CommitCollection {
    type Item = &'a CommitRecord;
    type IntoIter = std::slice::Iter<'a, CommitRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
