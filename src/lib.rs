//! Declarative member-synthesis engine.
//!
//! Feed in a structural description of a host type (its stored properties or
//! case variants, their optionality, and the capabilities it claims) plus a
//! small closed configuration policy, and get back an additional source-level
//! member for that type: either a serialization-key mapping table or a
//! string-representation implementation. Ill-formed requests come back as a
//! structured [`Diagnostic`] value instead.
//!
//! Design goals:
//! - Every synthesis call is a pure function of its inputs; no cross-call state.
//! - Validation completes before any output exists; a single bad reference
//!   invalidates the whole request.
//! - Generation produces a small structured IR first; printing is a separate,
//!   one-pass renderer.
//! - Diagnostics are returned values with stable identifiers, never panics.

pub mod casing;
pub mod descriptor;
pub mod expr;
pub mod diagnostic;
pub mod policy;
pub mod keymap;
pub mod describe;
pub mod render;
pub mod ingest;
pub mod batch;

pub use casing::{to_snake_case, to_title_case};
pub use describe::{
    DescriptionIr, describe_cases, describe_fields, describe_flags, synthesize_description,
};
pub use descriptor::{
    CaseInfo, DESCRIBABLE, PropertyInfo, SERIALIZABLE, TypeDescriptor, TypeShape,
};
pub use diagnostic::Diagnostic;
pub use expr::Expr;
pub use keymap::{MappingEntry, synthesize_key_mapping};
pub use policy::KeyMappingPolicy;
pub use render::{GeneratedMember, MemberIr};
