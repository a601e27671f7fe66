use std::slice::Iter;

use tracing::debug;

use super::errors::Error;

/// Append-only, ordered collection of parse errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { errors: vec![] }
    }

    pub fn push(&mut self, error: Error) {
        debug!(
            kind = error.get_error_name(),
            position = error.get_position().0,
            "{}",
            error
        );
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> Iter<'_, Error> {
        self.errors.iter()
    }

    /// The formatted messages, in discovery order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Error;
    type IntoIter = Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
