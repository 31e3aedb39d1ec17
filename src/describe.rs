//! Description synthesis.
//!
//! Dispatches on the descriptor's shape and produces the structured body of
//! a string-representation member: an exhaustive branch per case for sum
//! types, a membership probe per flag constant for flag sets, and a part
//! per stored property for plain records. Branch/entry order is the
//! declaration order, always.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::casing::to_title_case;
use crate::descriptor::{DESCRIBABLE, TypeDescriptor, TypeShape};
use crate::diagnostic::Diagnostic;
use crate::render::{self, GeneratedMember};

/// Structured body of a description member, one variant per type shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "body", content = "value", rename_all = "snake_case")]
pub enum DescriptionIr {
    /// One branch per variant; the match is exhaustive, no catch-all.
    Cases(Vec<CaseBranch>),
    /// One membership probe per flag constant.
    Flags(Vec<FlagLine>),
    /// One part per stored property.
    Fields(Vec<FieldLine>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseBranch {
    /// Variant name as declared on the host type.
    pub case: String,
    /// Title-cased display label.
    pub label: String,
    /// Whether the branch binds and interpolates a payload value.
    pub has_payload: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagLine {
    /// Flag constant name as declared on the host type.
    pub flag: String,
    /// Title-cased display label, emitted when the flag is present.
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLine {
    pub property: String,
    /// Optional properties contribute a part only when present at
    /// evaluation time; required ones contribute unconditionally.
    pub is_optional: bool,
}

/// Synthesize the description member for any descriptor shape.
pub fn synthesize_description(descriptor: &TypeDescriptor) -> Result<GeneratedMember, Diagnostic> {
    match descriptor.shape {
        TypeShape::SumOfCases => describe_cases(descriptor),
        TypeShape::FlagSet => describe_flags(descriptor),
        TypeShape::Record => describe_fields(descriptor),
    }
}

/// Sum-of-cases entry point; rejects every other shape.
pub fn describe_cases(descriptor: &TypeDescriptor) -> Result<GeneratedMember, Diagnostic> {
    if descriptor.shape != TypeShape::SumOfCases {
        return Err(Diagnostic::NotASumType);
    }
    require_describable(descriptor)?;
    let branches = descriptor
        .cases
        .iter()
        .map(|c| CaseBranch {
            case: c.name.clone(),
            label: to_title_case(&c.name),
            has_payload: c.has_payload,
        })
        .collect::<Vec<_>>();
    debug!("description for `{}`: {} case branch(es)", descriptor.name, branches.len());
    Ok(render::description(DescriptionIr::Cases(branches)))
}

/// Flag-set entry point; rejects every other shape.
pub fn describe_flags(descriptor: &TypeDescriptor) -> Result<GeneratedMember, Diagnostic> {
    if descriptor.shape != TypeShape::FlagSet {
        return Err(Diagnostic::NotARecordType);
    }
    require_describable(descriptor)?;
    let lines = descriptor
        .properties
        .iter()
        .map(|flag| FlagLine {
            flag: flag.name.clone(),
            label: to_title_case(&flag.name),
        })
        .collect::<Vec<_>>();
    debug!("description for `{}`: {} flag line(s)", descriptor.name, lines.len());
    Ok(render::description(DescriptionIr::Flags(lines)))
}

/// Plain-record entry point; rejects every other shape.
pub fn describe_fields(descriptor: &TypeDescriptor) -> Result<GeneratedMember, Diagnostic> {
    if descriptor.shape != TypeShape::Record {
        return Err(Diagnostic::NotARecordType);
    }
    require_describable(descriptor)?;
    let lines = descriptor
        .properties
        .iter()
        .map(|p| FieldLine {
            property: p.name.clone(),
            is_optional: p.is_optional,
        })
        .collect::<Vec<_>>();
    debug!("description for `{}`: {} field line(s)", descriptor.name, lines.len());
    Ok(render::description(DescriptionIr::Fields(lines)))
}

fn require_describable(descriptor: &TypeDescriptor) -> Result<(), Diagnostic> {
    if descriptor.claims(DESCRIBABLE) {
        Ok(())
    } else {
        Err(Diagnostic::NotDescribable)
    }
}
