//! Closed diagnostic taxonomy.
//!
//! Every fallible step in the engine returns one of these as a value; nothing
//! is thrown across the public boundary and nothing panics. Each kind carries
//! a stable identifier for host-side routing plus a structured detail map, so
//! callers can assert on the exact diagnostic rather than on message text.

use std::collections::BTreeMap;

/// Errors that can occur during member synthesis.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("key-mapping synthesis requires a record-shaped type")]
    NotARecordType,

    #[error("case-description synthesis requires a sum-of-cases type")]
    NotASumType,

    #[error("the type does not claim the `Serializable` capability")]
    NotSerializable,

    #[error("the type does not claim the `Describable` capability")]
    NotDescribable,

    #[error("no key-mapping policy argument was supplied")]
    NoArgument,

    #[error("the key-mapping policy argument does not match any known policy shape")]
    InvalidArgument,

    #[error("policy for `{}` references unknown properties: {}", .type_name, .names.join(", "))]
    UnknownProperty { type_name: String, names: Vec<String> },
}

impl Diagnostic {
    /// Stable identifier, independent of message wording.
    pub fn id(&self) -> &'static str {
        match self {
            Diagnostic::NotARecordType => "not_a_record_type",
            Diagnostic::NotASumType => "not_a_sum_type",
            Diagnostic::NotSerializable => "not_serializable",
            Diagnostic::NotDescribable => "not_describable",
            Diagnostic::NoArgument => "no_argument",
            Diagnostic::InvalidArgument => "invalid_argument",
            Diagnostic::UnknownProperty { .. } => "unknown_property",
        }
    }

    /// Structured payload for kinds that carry one; empty otherwise.
    pub fn detail(&self) -> BTreeMap<&'static str, String> {
        match self {
            Diagnostic::UnknownProperty { type_name, names } => BTreeMap::from([
                ("type", type_name.clone()),
                ("names", names.join(", ")),
            ]),
            _ => BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable_and_distinct() {
        let all = [
            Diagnostic::NotARecordType,
            Diagnostic::NotASumType,
            Diagnostic::NotSerializable,
            Diagnostic::NotDescribable,
            Diagnostic::NoArgument,
            Diagnostic::InvalidArgument,
            Diagnostic::UnknownProperty { type_name: "T".into(), names: vec!["x".into()] },
        ];
        let ids: std::collections::BTreeSet<_> = all.iter().map(Diagnostic::id).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn unknown_property_lists_every_offender() {
        let d = Diagnostic::UnknownProperty {
            type_name: "User".into(),
            names: vec!["bogus".into(), "alsoBogus".into()],
        };
        assert_eq!(d.to_string(), "policy for `User` references unknown properties: bogus, alsoBogus");
        assert_eq!(d.detail().get("names").unwrap(), "bogus, alsoBogus");
        assert_eq!(d.detail().get("type").unwrap(), "User");
    }

    #[test]
    fn plain_kinds_have_empty_detail() {
        assert!(Diagnostic::NoArgument.detail().is_empty());
    }
}
