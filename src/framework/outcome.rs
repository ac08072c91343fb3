//! # Outcomes & Warnings
//!
//! Every remote call produces a primary result *and* an ordered list of non-fatal
//! warnings. [`Outcome`] keeps the two together so warnings survive the error path.
//!
//! Multi-step operations gather warnings with [`Warnings::absorb`], which appends an
//! outcome's warnings in call order and hands back its result for use with `?`:
//!
//! ```rust
//! use platform_session::framework::{Outcome, Warnings};
//!
//! fn step(value: u32, warning: &str) -> Outcome<u32, String> {
//!     Outcome::ok(value, vec![warning.to_string()])
//! }
//!
//! fn run(warnings: &mut Warnings) -> Result<u32, String> {
//!     let a = warnings.absorb(step(1, "first"))?;
//!     let b = warnings.absorb(step(2, "second"))?;
//!     Ok(a + b)
//! }
//!
//! let mut warnings = Warnings::new();
//! let outcome = Outcome::new(run(&mut warnings), warnings);
//! assert_eq!(outcome.result(), &Ok(3));
//! assert_eq!(outcome.warnings().as_slice(), ["first", "second"]);
//! ```

use std::fmt::Debug;

/// Ordered, non-fatal diagnostics. Never reordered or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warnings(Vec<String>);

impl Warnings {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, warning: impl Into<String>) {
        self.0.push(warning.into());
    }

    /// Appends `other` after the warnings already collected.
    pub fn append(&mut self, other: Warnings) {
        self.0.extend(other.0);
    }

    /// Moves an outcome's warnings into this list and returns its result.
    pub fn absorb<T, E>(&mut self, outcome: Outcome<T, E>) -> Result<T, E> {
        let (result, warnings) = outcome.into_parts();
        self.append(warnings);
        result
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Warnings {
    fn from(warnings: Vec<String>) -> Self {
        Self(warnings)
    }
}

impl From<Vec<&str>> for Warnings {
    fn from(warnings: Vec<&str>) -> Self {
        warnings.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Warnings {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Warnings {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A value-or-error paired with the warnings gathered while producing it.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "an outcome carries warnings that should be reported"]
pub struct Outcome<T, E> {
    result: Result<T, E>,
    warnings: Warnings,
}

impl<T, E> Outcome<T, E> {
    pub fn new(result: Result<T, E>, warnings: impl Into<Warnings>) -> Self {
        Self {
            result,
            warnings: warnings.into(),
        }
    }

    pub fn ok(value: T, warnings: impl Into<Warnings>) -> Self {
        Self::new(Ok(value), warnings)
    }

    pub fn err(error: E, warnings: impl Into<Warnings>) -> Self {
        Self::new(Err(error), warnings)
    }

    pub fn result(&self) -> &Result<T, E> {
        &self.result
    }

    pub fn warnings(&self) -> &Warnings {
        &self.warnings
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn is_err(&self) -> bool {
        self.result.is_err()
    }

    pub fn into_result(self) -> Result<T, E> {
        self.result
    }

    pub fn into_parts(self) -> (Result<T, E>, Warnings) {
        (self.result, self.warnings)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        Outcome {
            result: self.result.map(f),
            warnings: self.warnings,
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        Outcome {
            result: self.result.map_err(f),
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(result: Result<u32, &'static str>, warning: &str) -> Outcome<u32, &'static str> {
        Outcome::new(result, vec![warning])
    }

    fn two_steps(
        first: Result<u32, &'static str>,
        second: Result<u32, &'static str>,
        warnings: &mut Warnings,
    ) -> Result<u32, &'static str> {
        let a = warnings.absorb(step(first, "warning-1"))?;
        let b = warnings.absorb(step(second, "warning-2"))?;
        Ok(a + b)
    }

    #[test]
    fn test_absorb_preserves_call_order() {
        let mut warnings = Warnings::new();
        let result = two_steps(Ok(1), Ok(2), &mut warnings);
        assert_eq!(result, Ok(3));
        assert_eq!(warnings.as_slice(), ["warning-1", "warning-2"]);
    }

    #[test]
    fn test_absorb_keeps_warnings_of_failing_step() {
        let mut warnings = Warnings::new();
        let result = two_steps(Ok(1), Err("boom"), &mut warnings);
        assert_eq!(result, Err("boom"));
        assert_eq!(warnings.as_slice(), ["warning-1", "warning-2"]);
    }

    #[test]
    fn test_absorb_stops_at_first_failure() {
        let mut warnings = Warnings::new();
        let result = two_steps(Err("first"), Ok(2), &mut warnings);
        assert_eq!(result, Err("first"));
        assert_eq!(warnings.as_slice(), ["warning-1"]);
    }

    #[test]
    fn test_duplicate_warnings_are_kept() {
        let mut warnings = Warnings::new();
        warnings.push("same");
        warnings.append(Warnings::from(vec!["same"]));
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_map_keeps_warnings() {
        let outcome: Outcome<u32, String> = Outcome::ok(2, vec!["w"]);
        let mapped = outcome.map(|v| v * 10).map_err(|e| e.len());
        assert_eq!(mapped.result(), &Ok(20));
        assert_eq!(mapped.warnings().as_slice(), ["w"]);
    }
}
