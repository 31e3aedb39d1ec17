//! One-pass rendering of synthesized members.
//!
//! The synthesizers produce data ([`MemberIr`]); this module turns that data
//! into the Rust source text the host splices into the type's `impl` block.
//! All textual assembly lives here and nowhere else, and the same IR always
//! renders to the same text.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::describe::DescriptionIr;
use crate::keymap::MappingEntry;

/// Structured form of a synthesized member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "member", content = "value", rename_all = "snake_case")]
pub enum MemberIr {
    /// Serialization-key table, one row per retained property.
    KeyMap(Vec<MappingEntry>),
    /// Body of a string-representation member.
    Description(DescriptionIr),
}

/// A synthesized member: the structured artifact plus its rendering.
///
/// `source` is opaque to the engine; splicing it into a compilation unit
/// is the caller's responsibility.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMember {
    pub ir: MemberIr,
    pub source: String,
}

pub fn key_mapping(entries: Vec<MappingEntry>) -> GeneratedMember {
    let source = render_key_map(&entries);
    GeneratedMember { ir: MemberIr::KeyMap(entries), source }
}

pub fn description(ir: DescriptionIr) -> GeneratedMember {
    let source = render_description(&ir);
    GeneratedMember { ir: MemberIr::Description(ir), source }
}

// ------------------------------ key table --------------------------------- //

fn render_key_map(entries: &[MappingEntry]) -> String {
    let mut out = String::new();
    out.push_str("pub const KEY_MAP: &[(&str, Option<&str>)] = &[\n");
    for entry in entries {
        match &entry.exposed_key {
            None => out.push_str(&format!("    ({}, None),\n", str_lit(&entry.property))),
            Some(key) => out.push_str(&format!(
                "    ({}, Some({})),\n",
                str_lit(&entry.property),
                str_lit(key),
            )),
        }
    }
    out.push_str("];\n");
    out
}

// ----------------------------- descriptions ------------------------------- //

fn render_description(ir: &DescriptionIr) -> String {
    let mut out = String::new();
    out.push_str("pub fn description(&self) -> String {\n");
    match ir {
        DescriptionIr::Cases(branches) => {
            // exhaustive over the closed case list: no catch-all arm
            out.push_str("    match self {\n");
            for branch in branches {
                let case = rust_ident(&branch.case);
                if branch.has_payload {
                    out.push_str(&format!(
                        "        Self::{case}(value) => format!(\"{}: [{{}}]\", value),\n",
                        lit_body(&branch.label),
                    ));
                } else {
                    out.push_str(&format!(
                        "        Self::{case} => \"{}\".to_string(),\n",
                        lit_body(&branch.label),
                    ));
                }
            }
            out.push_str("    }\n");
        }
        DescriptionIr::Flags(lines) => {
            out.push_str("    let mut parts: Vec<&str> = Vec::new();\n");
            for line in lines {
                out.push_str(&format!(
                    "    if self.contains(Self::{}) {{\n        parts.push({});\n    }}\n",
                    rust_ident(&line.flag),
                    str_lit(&line.label),
                ));
            }
            out.push_str("    format!(\"[{}]\", parts.join(\", \"))\n");
        }
        DescriptionIr::Fields(lines) => {
            out.push_str("    let mut parts: Vec<String> = Vec::new();\n");
            for line in lines {
                if line.is_optional {
                    out.push_str(&format!(
                        "    if let Some(value) = &self.{} {{\n        parts.push(format!(\"{}: {{}}\", value));\n    }}\n",
                        rust_ident(&line.property),
                        lit_body(&line.property),
                    ));
                } else {
                    out.push_str(&format!(
                        "    parts.push(format!(\"{}: {{}}\", self.{}));\n",
                        lit_body(&line.property),
                        rust_ident(&line.property),
                    ));
                }
            }
            out.push_str("    format!(\"[{}]\", parts.join(\" || \"))\n");
        }
    }
    out.push_str("}\n");
    out
}

// ------------------------------- helpers ---------------------------------- //

static IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

// Strict keywords that admit the r# escape; `self`/`Self`/`super`/`crate`
// cannot be raw and never name members anyway.
static KEYWORDS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    BTreeSet::from([
        "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
        "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
        "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
        "where", "while",
    ])
});

/// Host identifier as it must appear in emitted Rust: keyword collisions
/// get the raw form, everything else passes through verbatim.
fn rust_ident(name: &str) -> String {
    if IDENT.is_match(name) && KEYWORDS.contains(name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// Quoted string literal with escaped contents.
fn str_lit(s: &str) -> String {
    format!("\"{}\"", s.escape_default())
}

/// Escaped literal body without the surrounding quotes, for splicing into a
/// larger literal.
fn lit_body(s: &str) -> String {
    s.escape_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::{CaseBranch, FieldLine, FlagLine};

    fn entry(property: &str, key: Option<&str>) -> MappingEntry {
        MappingEntry {
            property: property.to_string(),
            exposed_key: key.map(str::to_string),
        }
    }

    #[test]
    fn key_table_renders_rows_in_order() {
        let member = key_mapping(vec![
            entry("id", None),
            entry("userName", Some("user_name")),
        ]);
        assert_eq!(
            member.source,
            "pub const KEY_MAP: &[(&str, Option<&str>)] = &[\n    (\"id\", None),\n    (\"userName\", Some(\"user_name\")),\n];\n"
        );
    }

    #[test]
    fn empty_key_table_still_renders() {
        let member = key_mapping(Vec::new());
        assert_eq!(member.source, "pub const KEY_MAP: &[(&str, Option<&str>)] = &[\n];\n");
    }

    #[test]
    fn case_bodies_bind_payloads_and_skip_a_catch_all() {
        let member = description(DescriptionIr::Cases(vec![
            CaseBranch { case: "active".into(), label: "Active".into(), has_payload: false },
            CaseBranch { case: "failed".into(), label: "Failed".into(), has_payload: true },
        ]));
        assert!(member.source.contains("Self::active => \"Active\".to_string(),"));
        assert!(member.source.contains("Self::failed(value) => format!(\"Failed: [{}]\", value),"));
        assert!(!member.source.contains("_ =>"));
    }

    #[test]
    fn flag_bodies_probe_membership_and_join_with_comma_space() {
        let member = description(DescriptionIr::Flags(vec![FlagLine {
            flag: "read".into(),
            label: "Read".into(),
        }]));
        assert!(member.source.contains("if self.contains(Self::read) {"));
        assert!(member.source.contains("parts.push(\"Read\");"));
        assert!(member.source.contains("format!(\"[{}]\", parts.join(\", \"))"));
    }

    #[test]
    fn field_bodies_guard_optionals_and_join_with_bars() {
        let member = description(DescriptionIr::Fields(vec![
            FieldLine { property: "id".into(), is_optional: false },
            FieldLine { property: "nickname".into(), is_optional: true },
        ]));
        assert!(member.source.contains("parts.push(format!(\"id: {}\", self.id));"));
        assert!(member.source.contains("if let Some(value) = &self.nickname {"));
        assert!(member.source.contains("parts.push(format!(\"nickname: {}\", value));"));
        assert!(member.source.contains("format!(\"[{}]\", parts.join(\" || \"))"));
    }

    #[test]
    fn keyword_properties_render_as_raw_identifiers() {
        let member = description(DescriptionIr::Fields(vec![FieldLine {
            property: "type".into(),
            is_optional: false,
        }]));
        // the literal keeps the host spelling, the access path escapes it
        assert!(member.source.contains("parts.push(format!(\"type: {}\", self.r#type));"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let ir = DescriptionIr::Flags(vec![FlagLine { flag: "a".into(), label: "A".into() }]);
        assert_eq!(description(ir.clone()).source, description(ir).source);
    }
}
