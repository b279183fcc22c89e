//! Helpers shared by every domain error vocabulary.
//!
//! Domain errors wrap their causes through `source()`, so "is this error, or
//! does it wrap one" is answered by walking that chain.

use std::error::Error as StdError;

/// Transport-neutral classification of an expected domain condition.
///
/// Only the error chokepoint turns a class into a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    NotFound,
    Conflict,
    InvalidInput,
}

/// Iterate over `error` followed by every error it wraps, outermost first.
pub fn chain<'a>(
    error: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(error), |&e| e.source())
}

/// Return the first error of type `T` in the chain of `error`, if any.
#[cfg(test)]
pub fn find_cause<'a, T>(error: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    chain(error).find_map(|e| e.downcast_ref::<T>())
}

/// Render the whole chain on one line for server-side logs.
pub fn render_chain(error: &(dyn StdError + 'static)) -> String {
    chain(error)
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}
