#[cfg(test)]
#[macro_use]
extern crate assert_matches;

mod record;

pub use crate::record::error::{FieldNameError, RecordError, Result};
pub use crate::record::field_name::{validate_field_name, validate_field_names};
pub use crate::record::{DuplicateFieldNames, Record, Schema};
