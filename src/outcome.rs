//! Result of an override resolution.

use ufunc_override_core::{Dynamic, Reply};

/// How a resolution ended, short of an error.
///
/// Errors (rejection, failing probes, handler errors) travel separately as
/// [`OverrideError`](ufunc_override_core::OverrideError).
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// An override handler produced the result.
    Accepted(Dynamic),
    /// The selected handler declined.
    NotImplemented,
    /// No operand claims an override; compute the default result.
    NoOverride,
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    pub fn is_no_override(&self) -> bool {
        matches!(self, Outcome::NoOverride)
    }

    /// The accepted value, if any.
    pub fn into_value(self) -> Option<Dynamic> {
        match self {
            Outcome::Accepted(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Reply> for Outcome {
    fn from(reply: Reply) -> Self {
        match reply {
            Reply::Value(v) => Outcome::Accepted(v),
            Reply::NotImplemented => Outcome::NotImplemented,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_reply() {
        assert_eq!(
            Outcome::from(Reply::value(42i64)),
            Outcome::Accepted(Dynamic::Int(42))
        );
        assert_eq!(
            Outcome::from(Reply::NotImplemented),
            Outcome::NotImplemented
        );
    }

    #[test]
    fn into_value_only_for_accepted() {
        assert_eq!(
            Outcome::Accepted(Dynamic::Bool(true)).into_value(),
            Some(Dynamic::Bool(true))
        );
        assert_eq!(Outcome::NoOverride.into_value(), None);
        assert_eq!(Outcome::NotImplemented.into_value(), None);
    }

    #[test]
    fn predicates() {
        assert!(Outcome::Accepted(Dynamic::None).is_accepted());
        assert!(!Outcome::NotImplemented.is_accepted());
        assert!(Outcome::NoOverride.is_no_override());
        assert!(!Outcome::NotImplemented.is_no_override());
    }
}
