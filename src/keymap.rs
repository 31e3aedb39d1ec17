//! Key-mapping synthesis.
//!
//! Checks run in a fixed order (shape, capability, argument shape,
//! reference validity) and the first failure is the whole answer; no
//! output exists until every check has passed. Reference validation is
//! all-or-nothing: one bad name invalidates the request and the diagnostic
//! lists every offender, not just the first.

use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::casing::to_snake_case;
use crate::descriptor::{SERIALIZABLE, TypeDescriptor, TypeShape};
use crate::diagnostic::Diagnostic;
use crate::expr::Expr;
use crate::policy::{self, KeyMappingPolicy};
use crate::render::{self, GeneratedMember};

/// One row of the generated key table.
///
/// `exposed_key` is `None` exactly when the computed key textually equals
/// the property name; identity mappings need no explicit override.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub property: String,
    pub exposed_key: Option<String>,
}

impl MappingEntry {
    fn new(property: &str, key: String) -> Self {
        let exposed_key = (key != property).then_some(key);
        Self { property: property.to_string(), exposed_key }
    }
}

/// Synthesize the serialization-key mapping member for a record type.
pub fn synthesize_key_mapping(
    descriptor: &TypeDescriptor,
    raw_policy: Option<&Expr>,
) -> Result<GeneratedMember, Diagnostic> {
    if descriptor.shape != TypeShape::Record {
        return Err(Diagnostic::NotARecordType);
    }
    if !descriptor.claims(SERIALIZABLE) {
        return Err(Diagnostic::NotSerializable);
    }
    let policy = policy::resolve(raw_policy)?;
    let entries = map_entries(descriptor, &policy)?;
    debug!(
        "key mapping for `{}`: {} of {} properties retained",
        descriptor.name,
        entries.len(),
        descriptor.properties.len(),
    );
    Ok(render::key_mapping(entries))
}

/// Apply a resolved policy to the property list.
///
/// Properties come out in declaration order; `Select`/`Exclude` drop
/// entries entirely, `Custom` only renames.
pub fn map_entries(
    descriptor: &TypeDescriptor,
    policy: &KeyMappingPolicy,
) -> Result<Vec<MappingEntry>, Diagnostic> {
    let known: BTreeSet<&str> = descriptor.property_names().collect();
    let unknown: Vec<String> = policy
        .referenced_names()
        .into_iter()
        .filter(|name| !known.contains(name))
        .map(str::to_string)
        .collect();
    if !unknown.is_empty() {
        return Err(Diagnostic::UnknownProperty {
            type_name: descriptor.name.clone(),
            names: unknown,
        });
    }

    let mut entries = Vec::with_capacity(descriptor.properties.len());
    for prop in &descriptor.properties {
        let key = match policy {
            KeyMappingPolicy::All => to_snake_case(&prop.name),
            KeyMappingPolicy::Select(selected) => {
                if !selected.contains(&prop.name) {
                    continue;
                }
                to_snake_case(&prop.name)
            }
            KeyMappingPolicy::Exclude(excluded) => {
                if excluded.contains(&prop.name) {
                    continue;
                }
                to_snake_case(&prop.name)
            }
            KeyMappingPolicy::Custom(renames) => renames
                .get(&prop.name)
                .cloned()
                .unwrap_or_else(|| to_snake_case(&prop.name)),
        };
        entries.push(MappingEntry::new(&prop.name, key));
    }
    Ok(entries)
}
