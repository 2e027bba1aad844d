//! Contact form validation rules.
//!
//! Pure: no DOM access and no memory of earlier passes. The same values always
//! produce the same errors, in field declaration order.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::state::contact::{FieldValues, FormField, ValidationError};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Enter a valid email";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Evaluate every rule and collect the failures.
///
/// Rules do not short-circuit: each invalid field yields its own error.
#[must_use]
pub fn validate(values: &FieldValues) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if is_blank(&values.name) {
        errors.push(ValidationError { field: FormField::Name, message: NAME_REQUIRED });
    }

    if is_blank(&values.email) {
        errors.push(ValidationError { field: FormField::Email, message: EMAIL_REQUIRED });
    } else if !is_valid_email(&values.email) {
        errors.push(ValidationError { field: FormField::Email, message: EMAIL_INVALID });
    }

    if is_blank(&values.message) {
        errors.push(ValidationError { field: FormField::Message, message: MESSAGE_REQUIRED });
    }

    errors
}

/// Whitespace as browsers define it for `String.prototype.trim` and regex
/// `\s`: the `Zs` space separators, tab, line terminators, VT, FF, and the
/// BOM (U+FEFF). NEL (U+0085) is not whitespace here.
#[must_use]
pub fn is_web_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Empty or whitespace-only, per [`is_web_whitespace`].
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim_matches(is_web_whitespace).is_empty()
}

/// `local@domain.tld` shape check on the untrimmed value.
///
/// Each part is one or more characters that are neither `@` nor whitespace
/// per [`is_web_whitespace`]; the class below spells out that same set.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    lazy_regex::regex_is_match!(
        r"^[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+@[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+\.[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+$",
        value
    )
}
