pub mod error;
pub mod field_name;
mod schema;
mod tuple;

pub use schema::Schema;
pub use tuple::{DuplicateFieldNames, Record};
