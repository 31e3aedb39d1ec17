//! Name-case conversion for host identifiers.
//!
//! Both transforms are per-character scans with no Unicode normalization
//! beyond case folding; converted output feeds straight into generated
//! members, so behavior here is deliberately boring and deterministic.

/// Convert a `lowerCamelCase` identifier to `snake_case`.
///
/// Every uppercase letter becomes `_` followed by its lowercase form; all
/// other characters pass through unchanged. Already-snake input (no
/// uppercase letters) is returned as-is, and `""` stays `""`. Note the
/// acronym behavior: `"userID"` → `"user_i_d"`.
pub fn to_snake_case(s: &str) -> String {
    if s.is_empty() {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_uppercase() {
            out.push('_');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a `lowerCamelCase` identifier to a space-separated `Title Case`
/// phrase: `"thisIsATest"` → `"This Is A Test"`.
///
/// Two passes. The first inserts a space before every uppercase letter
/// (an uppercase first letter therefore yields a leading space, which the
/// second pass preserves verbatim). The second pass capitalizes the first
/// letter of each whitespace-delimited run and lowercases the rest;
/// whitespace itself passes through untouched.
pub fn to_title_case(s: &str) -> String {
    let mut spaced = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let mut out = String::with_capacity(spaced.len());
    let mut word_start = true;
    for c in spaced.chars() {
        if c.is_whitespace() {
            out.push(c);
            word_start = true;
        } else {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_empty_is_empty() {
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn snake_case_idempotent_on_snake_input() {
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case(&to_snake_case("userName")), "user_name");
    }

    #[test]
    fn snake_case_splits_every_uppercase() {
        assert_eq!(to_snake_case("userName"), "user_name");
        // acronyms split per letter, not per run
        assert_eq!(to_snake_case("userID"), "user_i_d");
    }

    #[test]
    fn title_case_spaces_and_capitalizes() {
        assert_eq!(to_title_case("thisIsATest"), "This Is A Test");
        assert_eq!(to_title_case("anotherExampleHere"), "Another Example Here");
    }

    #[test]
    fn title_case_single_word() {
        assert_eq!(to_title_case("active"), "Active");
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn title_case_preserves_leading_space_from_leading_uppercase() {
        // uppercase first letter → pass one inserts a leading space, pass two
        // keeps it as a separator without producing a broken word
        assert_eq!(to_title_case("UserID"), " User I D");
    }
}
