//! Raw configuration expressions.
//!
//! The host's parser hands the engine one already-tokenized expression per
//! configuration argument; this is the closed mini-model of what can appear
//! there. Extraction into plain string collections is strict: one
//! non-string element poisons the whole extraction, so the resolver can
//! reject the argument instead of silently dropping pieces of it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Expr {
    /// Bare identifier tag, e.g. `all`.
    Tag(String),
    /// String literal.
    Str(String),
    /// Call-shaped expression: `name(arg, ...)`.
    Call { name: String, args: Vec<Expr> },
    /// Sequence literal.
    Seq(Vec<Expr>),
    /// Mapping literal; entries keep the author's written order.
    Map(Vec<(Expr, Expr)>),
}

impl Expr {
    /// Convenience constructor for a single-argument call.
    pub fn call(name: impl Into<String>, arg: Expr) -> Self {
        Expr::Call { name: name.into(), args: vec![arg] }
    }

    pub fn as_str_lit(&self) -> Option<&str> {
        match self {
            Expr::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The sequence's elements as strings, or `None` unless this is a
    /// sequence literal whose every element is a string literal.
    pub fn string_seq(&self) -> Option<Vec<String>> {
        let Expr::Seq(elements) = self else {
            return None;
        };
        elements
            .iter()
            .map(|e| e.as_str_lit().map(str::to_string))
            .collect()
    }

    /// The mapping's entries as a string-to-string map (written order), or
    /// `None` unless every key and value is a string literal.
    pub fn string_map(&self) -> Option<IndexMap<String, String>> {
        let Expr::Map(entries) = self else {
            return None;
        };
        entries
            .iter()
            .map(|(k, v)| match (k.as_str_lit(), v.as_str_lit()) {
                (Some(k), Some(v)) => Some((k.to_string(), v.to_string())),
                _ => None,
            })
            .collect()
    }
}

/// Sequence-of-strings literal.
pub fn str_seq<I, S>(items: I) -> Expr
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Expr::Seq(items.into_iter().map(|s| Expr::Str(s.into())).collect())
}

/// String-to-string mapping literal.
pub fn str_map<I, K, V>(entries: I) -> Expr
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    Expr::Map(
        entries
            .into_iter()
            .map(|(k, v)| (Expr::Str(k.into()), Expr::Str(v.into())))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_seq_extracts_all_string_elements() {
        let e = str_seq(["id", "userName"]);
        assert_eq!(
            e.string_seq(),
            Some(vec!["id".to_string(), "userName".to_string()])
        );
    }

    #[test]
    fn string_seq_rejects_mixed_elements() {
        let e = Expr::Seq(vec![Expr::Str("id".into()), Expr::Tag("all".into())]);
        assert_eq!(e.string_seq(), None);
    }

    #[test]
    fn string_seq_rejects_non_sequences() {
        assert_eq!(Expr::Str("id".into()).string_seq(), None);
    }

    #[test]
    fn string_map_keeps_written_order() {
        let e = str_map([("b", "2"), ("a", "1")]);
        let m = e.string_map().unwrap();
        assert_eq!(
            m.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
            ["b", "a"]
        );
    }

    #[test]
    fn string_map_rejects_non_string_values() {
        let e = Expr::Map(vec![(
            Expr::Str("a".into()),
            Expr::Seq(Vec::new()),
        )]);
        assert_eq!(e.string_map(), None);
    }
}
