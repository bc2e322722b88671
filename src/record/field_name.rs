use crate::record::error::FieldNameError;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Digits outside Nd that still count as digits: superscripts, subscripts and
/// the circled, parenthesized and dingbat forms of 1..9.
const COMPATIBILITY_DIGITS: &[(char, char)] = &[
    ('\u{00B2}', '\u{00B3}'),
    ('\u{00B9}', '\u{00B9}'),
    ('\u{1369}', '\u{1371}'),
    ('\u{19DA}', '\u{19DA}'),
    ('\u{2070}', '\u{2070}'),
    ('\u{2074}', '\u{2079}'),
    ('\u{2080}', '\u{2089}'),
    ('\u{2460}', '\u{2468}'),
    ('\u{2474}', '\u{247C}'),
    ('\u{2488}', '\u{2490}'),
    ('\u{24EA}', '\u{24EA}'),
    ('\u{24F5}', '\u{24FD}'),
    ('\u{24FF}', '\u{24FF}'),
    ('\u{2776}', '\u{277E}'),
    ('\u{2780}', '\u{2788}'),
    ('\u{278A}', '\u{2792}'),
    ('\u{10A40}', '\u{10A43}'),
    ('\u{1F100}', '\u{1F10A}'),
];

fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
        || COMPATIBILITY_DIGITS
            .iter()
            .any(|&(low, high)| low <= c && c <= high)
}

pub fn validate_field_name(name: &str) -> Result<(), FieldNameError> {
    let first = match name.chars().next() {
        Some(first) => first,
        None => return Err(FieldNameError::Empty),
    };

    if let Some(character) = name.chars().find(|c| !(c.is_alphanumeric() || *c == '_')) {
        return Err(FieldNameError::IllegalCharacter {
            name: name.to_owned(),
            character,
        });
    }

    if is_digit(first) {
        return Err(FieldNameError::LeadingDigit(name.to_owned()));
    }

    Ok(())
}

/// Validates names in order, stopping at the first bad one.
pub fn validate_field_names<I, S>(names: I) -> Result<(), FieldNameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .try_for_each(|name| validate_field_name(name.as_ref()))
}
