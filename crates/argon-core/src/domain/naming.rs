//! Naming policy shared by every stage of the pipeline.
//!
//! One place decides what a valid artifact or bundle name looks like and how
//! a name is cased for folders, file names and script symbols:
//!
//! | Input    | `to_lower_camel` | `to_upper_camel` | `to_folder_name` |
//! |----------|------------------|------------------|------------------|
//! | `MyCard` | `myCard`         | `MyCard`         | `mycard`         |
//! | `my_card`| `my_card`        | `My_card`        | `my_card`        |

use crate::domain::error::DomainError;

/// Whether `name` is a usable artifact or bundle identifier.
///
/// A name is rejected when it is empty, starts with an ASCII digit, or
/// contains anything outside `[A-Za-z0-9_]`. There is no length limit.
pub fn validate(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => false,
        Some(first) if first.is_ascii_digit() => false,
        Some(first) => is_name_char(first) && chars.all(is_name_char),
    }
}

/// Like [`validate`], but returns a [`DomainError::InvalidName`] naming the
/// kind of thing being named (`"component"`, `"bundle"`, ...).
pub fn ensure_valid(name: &str, subject: &'static str) -> Result<(), DomainError> {
    if validate(name) {
        Ok(())
    } else {
        Err(DomainError::InvalidName {
            subject,
            name: name.to_owned(),
        })
    }
}

/// First character lower-cased, the rest untouched.
pub fn to_lower_camel(name: &str) -> String {
    map_first(name, |c| c.to_ascii_lowercase())
}

/// First character upper-cased, the rest untouched.
pub fn to_upper_camel(name: &str) -> String {
    map_first(name, |c| c.to_ascii_uppercase())
}

/// Fully lower-cased; used for artifact folders and markup file names.
pub fn to_folder_name(name: &str) -> String {
    name.to_ascii_lowercase()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn map_first(name: &str, f: impl FnOnce(char) -> char) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.push(f(first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
