use std::error::Error;

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum FieldNameError {
    Empty,
    IllegalCharacter { name: String, character: char },
    LeadingDigit(String),
}

impl Error for FieldNameError {
    fn description(&self) -> &str {
        match self {
            Self::Empty => "Field names must be non-empty strings",
            Self::IllegalCharacter { .. } => {
                "Field names can only contain alphanumeric characters and underscores"
            }
            Self::LeadingDigit(_) => "Field names cannot start with a number",
        }
    }
}

impl std::fmt::Display for FieldNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "field names must be non-empty strings"),
            Self::IllegalCharacter { name, character } => write!(
                f,
                "field names can only contain alphanumeric characters and underscores: {:?} (found {:?})",
                name, character
            ),
            Self::LeadingDigit(name) => write!(f, "field names cannot start with a number: {:?}", name),
        }
    }
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum RecordError {
    LengthMismatch { names: Vec<String>, values: String },
    InvalidFieldName(FieldNameError),
    DuplicateFieldName(String),
    NoSuchField(String),
}

impl Error for RecordError {
    fn description(&self) -> &str {
        match self {
            Self::LengthMismatch { .. } => "The number of field names and values must be equal",
            Self::InvalidFieldName(_) => "A field name is malformed",
            Self::DuplicateFieldName(_) => "A field with the same name already exists",
            Self::NoSuchField(_) => "The requested field does not exist",
        }
    }

    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFieldName(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { names, values } => write!(
                f,
                "length of {:?} and {} must be equal",
                names, values
            ),
            Self::InvalidFieldName(err) => write!(f, "{}", err),
            Self::DuplicateFieldName(name) => write!(f, "duplicate field name {:?}", name),
            Self::NoSuchField(name) => write!(f, "no such field {:?}", name),
        }
    }
}

impl From<FieldNameError> for RecordError {
    fn from(error: FieldNameError) -> Self {
        Self::InvalidFieldName(error)
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
