pub mod auth;
pub mod community;
pub mod party;
pub mod player;
pub mod team;

#[cfg(test)]
pub(crate) mod testing;

use crate::domain::repositories::ErrorKind;

/// Common surface of use-case errors
pub trait UseCaseError: std::error::Error {
    fn kind(&self) -> ErrorKind;
}

/// Drop repeated ids, keeping first occurrences in order
pub(crate) fn distinct<T: Copy + PartialEq>(ids: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(id) {
            out.push(*id);
        }
    }
    out
}

/// Trimmed value, or `None` when blank
pub(crate) fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
