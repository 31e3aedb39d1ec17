// Strongly-typed descriptor model. The engine consumes these; the host's
// parsing machinery produces them (directly or via `ingest`).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Capability a type must claim before key-mapping synthesis.
pub const SERIALIZABLE: &str = "Serializable";
/// Capability a type must claim before description synthesis.
pub const DESCRIBABLE: &str = "Describable";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeShape {
    /// Product type with named stored properties.
    Record,
    /// Closed set of named variants, each optionally carrying one payload.
    SumOfCases,
    /// Record with bitmask semantics; `properties` hold its flag constants.
    FlagSet,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub name: String,
    #[serde(default)]
    pub is_optional: bool,
}

impl PropertyInfo {
    pub fn required(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_optional: false }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_optional: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseInfo {
    pub name: String,
    #[serde(default)]
    pub has_payload: bool,
}

impl CaseInfo {
    pub fn bare(name: impl Into<String>) -> Self {
        Self { name: name.into(), has_payload: false }
    }

    pub fn with_payload(name: impl Into<String>) -> Self {
        Self { name: name.into(), has_payload: true }
    }
}

/// One described host type, constructed once per synthesis request.
///
/// Exactly one of `properties` / `cases` is meaningful, determined by
/// `shape`; both lists keep source-declaration order, and that order is
/// preserved end-to-end into generated output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub shape: TypeShape,
    #[serde(default)]
    pub capabilities: BTreeSet<String>,
    /// Stored properties (record) or declared flag constants (flag set).
    #[serde(default)]
    pub properties: Vec<PropertyInfo>,
    /// Variants of a sum-of-cases type.
    #[serde(default)]
    pub cases: Vec<CaseInfo>,
}

impl TypeDescriptor {
    pub fn record(name: impl Into<String>, properties: Vec<PropertyInfo>) -> Self {
        Self {
            name: name.into(),
            shape: TypeShape::Record,
            capabilities: BTreeSet::new(),
            properties,
            cases: Vec::new(),
        }
    }

    pub fn sum_of_cases(name: impl Into<String>, cases: Vec<CaseInfo>) -> Self {
        Self {
            name: name.into(),
            shape: TypeShape::SumOfCases,
            capabilities: BTreeSet::new(),
            properties: Vec::new(),
            cases,
        }
    }

    /// Flag-set descriptor; `flags` are the named flag constants declared
    /// statically on the type, in declaration order.
    pub fn flag_set<I, S>(name: impl Into<String>, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            shape: TypeShape::FlagSet,
            capabilities: BTreeSet::new(),
            properties: flags.into_iter().map(PropertyInfo::required).collect(),
            cases: Vec::new(),
        }
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    pub fn claims(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_probe() {
        let d = TypeDescriptor::record("User", vec![PropertyInfo::required("id")])
            .with_capability(SERIALIZABLE);
        assert!(d.claims(SERIALIZABLE));
        assert!(!d.claims(DESCRIBABLE));
    }

    #[test]
    fn descriptor_round_trips_through_json() {
        let d = TypeDescriptor::sum_of_cases(
            "Status",
            vec![CaseInfo::bare("active"), CaseInfo::with_payload("failed")],
        )
        .with_capability(DESCRIBABLE);
        let src = serde_json::to_string(&d).unwrap();
        let back: TypeDescriptor = serde_json::from_str(&src).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn optional_list_fields_default_when_absent() {
        // hosts shipping a sum type need not send `properties` at all
        let src = r#"{"name":"S","shape":"sum_of_cases","cases":[{"name":"a"}]}"#;
        let d: TypeDescriptor = serde_json::from_str(src).unwrap();
        assert_eq!(d.shape, TypeShape::SumOfCases);
        assert!(d.properties.is_empty());
        assert!(!d.cases[0].has_payload);
    }
}
