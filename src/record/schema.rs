use crate::record::error::Result;
use crate::record::tuple::{DuplicateFieldNames, Record};
use std::fmt::Debug;

/// A fixed list of field names bound ahead of time, producing records on demand.
///
/// Names are stored as given and validated again by every call to [`Schema::record`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Schema {
    names: Vec<String>,
    duplicates: DuplicateFieldNames,
}

impl Schema {
    pub fn new<N, S>(names: N) -> Self
    where
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Schema {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_owned())
                .collect(),
            duplicates: DuplicateFieldNames::default(),
        }
    }

    pub fn with_duplicates(mut self, duplicates: DuplicateFieldNames) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn record<V, I>(&self, values: I) -> Result<Record<V>>
    where
        V: Debug,
        I: IntoIterator<Item = V>,
    {
        Record::with_duplicates(&self.names, values, self.duplicates)
    }
}
