//! Key-mapping policy resolution.
//!
//! A raw configuration expression either resolves into one of four closed
//! policies or is rejected outright; there is no partial acceptance. The
//! reverse direction (`to_expr`) re-serializes a resolved policy into its
//! canonical raw form, so resolution composed with re-serialization is
//! idempotent.

use indexmap::{IndexMap, IndexSet};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::expr::{self, Expr};

/// How record properties map to exposed serialization keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", content = "value", rename_all = "snake_case")]
pub enum KeyMappingPolicy {
    /// Every property, snake-cased.
    All,
    /// Only the named properties, snake-cased; the rest are omitted.
    Select(IndexSet<String>),
    /// Every property except the named ones, snake-cased.
    Exclude(IndexSet<String>),
    /// Explicit renames; unmapped properties fall back to snake case
    /// (renames override, they never restrict).
    Custom(IndexMap<String, String>),
}

impl KeyMappingPolicy {
    /// Property names the policy mentions explicitly. `All` mentions none.
    pub fn referenced_names(&self) -> Vec<&str> {
        match self {
            KeyMappingPolicy::All => Vec::new(),
            KeyMappingPolicy::Select(names) | KeyMappingPolicy::Exclude(names) => {
                names.iter().map(String::as_str).collect()
            }
            KeyMappingPolicy::Custom(map) => map.keys().map(String::as_str).collect(),
        }
    }

    /// Canonical raw expression for this policy.
    pub fn to_expr(&self) -> Expr {
        match self {
            KeyMappingPolicy::All => Expr::Tag("all".to_string()),
            KeyMappingPolicy::Select(names) => {
                Expr::call("select", expr::str_seq(names.iter().cloned()))
            }
            KeyMappingPolicy::Exclude(names) => {
                Expr::call("exclude", expr::str_seq(names.iter().cloned()))
            }
            KeyMappingPolicy::Custom(map) => Expr::call(
                "custom",
                expr::str_map(map.iter().map(|(k, v)| (k.clone(), v.clone()))),
            ),
        }
    }
}

/// Resolve a raw configuration argument into a policy.
///
/// `None` (the caller supplied nothing at all) is `NoArgument`. Anything
/// present but unusable is `InvalidArgument`: an unknown tag or call name,
/// a call with zero or several arguments, or a sequence/map containing a
/// non-string element.
pub fn resolve(raw: Option<&Expr>) -> Result<KeyMappingPolicy, Diagnostic> {
    let Some(raw) = raw else {
        return Err(Diagnostic::NoArgument);
    };

    let policy = match raw {
        Expr::Tag(tag) if tag == "all" => KeyMappingPolicy::All,
        Expr::Call { name, args } => {
            let [arg] = args.as_slice() else {
                return Err(Diagnostic::InvalidArgument);
            };
            match name.as_str() {
                "select" => {
                    let names = arg.string_seq().ok_or(Diagnostic::InvalidArgument)?;
                    KeyMappingPolicy::Select(names.into_iter().collect())
                }
                "exclude" => {
                    let names = arg.string_seq().ok_or(Diagnostic::InvalidArgument)?;
                    KeyMappingPolicy::Exclude(names.into_iter().collect())
                }
                "custom" => {
                    let map = arg.string_map().ok_or(Diagnostic::InvalidArgument)?;
                    KeyMappingPolicy::Custom(map)
                }
                _ => return Err(Diagnostic::InvalidArgument),
            }
        }
        _ => return Err(Diagnostic::InvalidArgument),
    };

    trace!("resolved key-mapping policy: {policy:?}");
    Ok(policy)
}
