use crate::record::error::{RecordError, Result};
use crate::record::field_name::validate_field_names;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use tracing::{debug, trace};

/// How construction treats a field name that appears more than once.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum DuplicateFieldNames {
    /// Every slot keeps its value; lookup by name resolves to the last slot with that name.
    LastWins,
    Reject,
}

impl Default for DuplicateFieldNames {
    fn default() -> Self {
        DuplicateFieldNames::LastWins
    }
}

/// An immutable, fixed-size sequence of values whose slots also carry names.
///
/// Positional behaviour (indexing, slicing, iteration, equality, ordering and
/// hashing) is that of the underlying value slice; names only add lookup.
///
/// ```
/// use namedtuple::Record;
///
/// let p = Record::new(&["x", "y"], vec![1, 2]).unwrap();
/// assert_eq!(p.field("x"), Some(&1));
/// assert_eq!(p[1], 2);
/// assert_eq!(format!("{:?}", p), "Record(x=1, y=2)");
/// ```
#[derive(Clone)]
pub struct Record<V> {
    values: Box<[V]>,
    fields: Box<[String]>,
    slots: HashMap<String, usize>,
}

impl<V: fmt::Debug> Record<V> {
    pub fn new<N, S, I>(names: N, values: I) -> Result<Self>
    where
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
        I: IntoIterator<Item = V>,
    {
        Self::with_duplicates(names, values, DuplicateFieldNames::default())
    }

    pub fn with_duplicates<N, S, I>(
        names: N,
        values: I,
        duplicates: DuplicateFieldNames,
    ) -> Result<Self>
    where
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
        I: IntoIterator<Item = V>,
    {
        Self::assemble(names, values, duplicates, |values| format!("{:?}", values))
    }
}

impl<V> Record<V> {
    /// Builds a record over values that have no `Debug` form. A length
    /// mismatch then reports only how many values were given.
    pub fn opaque<N, S, I>(names: N, values: I, duplicates: DuplicateFieldNames) -> Result<Self>
    where
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
        I: IntoIterator<Item = V>,
    {
        Self::assemble(names, values, duplicates, |values| {
            format!("<{} values>", values.len())
        })
    }

    fn assemble<N, S, I, F>(
        names: N,
        values: I,
        duplicates: DuplicateFieldNames,
        render: F,
    ) -> Result<Self>
    where
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
        I: IntoIterator<Item = V>,
        F: FnOnce(&[V]) -> String,
    {
        let fields: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_owned())
            .collect();
        let values: Vec<V> = values.into_iter().collect();

        Self::build(fields, values, duplicates, render).map_err(|err| {
            debug!(error = %err, "rejected record construction");
            err
        })
    }

    fn build<F>(
        fields: Vec<String>,
        values: Vec<V>,
        duplicates: DuplicateFieldNames,
        render: F,
    ) -> Result<Self>
    where
        F: FnOnce(&[V]) -> String,
    {
        if fields.len() != values.len() {
            return Err(RecordError::LengthMismatch {
                values: render(&values),
                names: fields,
            });
        }

        validate_field_names(&fields)?;

        let mut slots = HashMap::with_capacity(fields.len());
        for (index, name) in fields.iter().enumerate() {
            let previous = slots.insert(name.clone(), index);
            if previous.is_some() && duplicates == DuplicateFieldNames::Reject {
                return Err(RecordError::DuplicateFieldName(name.clone()));
            }
        }

        trace!(fields = fields.len(), "built record");
        Ok(Record {
            values: values.into_boxed_slice(),
            fields: fields.into_boxed_slice(),
            slots,
        })
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn into_values(self) -> Vec<V> {
        self.values.into_vec()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    pub fn field(&self, name: &str) -> Option<&V> {
        self.index_of(name).map(|index| &self.values[index])
    }

    pub fn try_field(&self, name: &str) -> Result<&V> {
        self.field(name)
            .ok_or_else(|| RecordError::NoSuchField(name.to_owned()))
    }

    /// Pairs every stored name with its slot, duplicates included.
    pub fn iter_fields(&self) -> impl Iterator<Item = (&str, &V)> {
        self.fields
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// Joins the values with `other` into a plain sequence; names are not carried over.
    pub fn concat(&self, other: &[V]) -> Vec<V>
    where
        V: Clone,
    {
        let mut joined = Vec::with_capacity(self.values.len() + other.len());
        joined.extend_from_slice(&self.values);
        joined.extend_from_slice(other);
        joined
    }
}

impl<V> Deref for Record<V> {
    type Target = [V];

    fn deref(&self) -> &[V] {
        &self.values
    }
}

impl<V> AsRef<[V]> for Record<V> {
    fn as_ref(&self) -> &[V] {
        &self.values
    }
}

impl<'a, V> IntoIterator for &'a Record<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<V> IntoIterator for Record<V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_vec().into_iter()
    }
}

impl<V: PartialEq> PartialEq for Record<V> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<V: Eq> Eq for Record<V> {}

impl<V: PartialEq> PartialEq<[V]> for Record<V> {
    fn eq(&self, other: &[V]) -> bool {
        &*self.values == other
    }
}

impl<V: PartialEq> PartialEq<Vec<V>> for Record<V> {
    fn eq(&self, other: &Vec<V>) -> bool {
        &*self.values == other.as_slice()
    }
}

impl<V: PartialOrd> PartialOrd for Record<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.values.partial_cmp(&other.values)
    }
}

impl<V: Ord> Ord for Record<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.values.cmp(&other.values)
    }
}

impl<V: Hash> Hash for Record<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state)
    }
}

impl<V: fmt::Debug> fmt::Debug for Record<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Record(")?;
        for (i, (name, value)) in self.iter_fields().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}=", name)?;
            fmt::Debug::fmt(value, f)?;
        }
        write!(f, ")")
    }
}
