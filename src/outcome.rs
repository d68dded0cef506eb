//! Tagged Outcomes
//!
//! Normalization, mapping and reduction never fail outward. Instead of silently
//! swallowing problems they return an [`Outcome`], so a caller can tell a real
//! "no similarity" apart from a result that was produced on a fallback path.

/// The result of a stage that always produces a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The stage ran normally.
    Complete(T),
    /// The stage hit a problem and fell back to a default or reduced value.
    Degraded { value: T, reason: String },
}

impl<T> Outcome<T> {
    pub fn degraded(value: T, reason: impl Into<String>) -> Self {
        Outcome::Degraded {
            value,
            reason: reason.into(),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Complete(value) => value,
            Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Complete(value) => value,
            Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Complete(_) => None,
            Outcome::Degraded { reason, .. } => Some(reason),
        }
    }

    /// Transforms the carried value, keeping the tag.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Complete(value) => Outcome::Complete(f(value)),
            Outcome::Degraded { value, reason } => Outcome::Degraded {
                value: f(value),
                reason,
            },
        }
    }

    /// Marks the outcome as degraded, appending to any existing reason.
    pub fn degrade(self, extra: impl Into<String>) -> Self {
        let extra = extra.into();
        match self {
            Outcome::Complete(value) => Outcome::Degraded {
                value,
                reason: extra,
            },
            Outcome::Degraded { value, reason } => Outcome::Degraded {
                value,
                reason: format!("{}; {}", reason, extra),
            },
        }
    }
}
