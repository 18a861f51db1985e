/// A single `property: value` pair pulled out of player input.
///
/// Holds at most one entry. Input that doesn't look like a declaration
/// parses to the empty mapping instead of an error, so the preview can be
/// recomputed on every keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDeclaration {
    entry: Option<(String, String)>,
}

impl ParsedDeclaration {
    pub fn get(&self, property: &str) -> Option<&str> {
        match &self.entry {
            Some((name, value)) if name == property => Some(value.as_str()),
            _ => None,
        }
    }
}

/// Canonical form used for answer comparison.
///
/// Whitespace runs collapse to one space, the ends are trimmed, one
/// trailing semicolon is dropped and the result is lowercased. A space left
/// in front of that semicolon stays, so `center ;` never equals `center;`.
pub fn normalize(css: &str) -> String {
    let collapsed = css.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .strip_suffix(';')
        .unwrap_or(&collapsed)
        .to_lowercase()
}

/// Syntactic gate run before any comparison: the rule needs a colon and
/// must be terminated with a semicolon.
pub fn is_complete_rule(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.contains(':') && trimmed.ends_with(';')
}

/// Lenient parse of the first declaration in `input`.
///
/// Anything after the first `;` is ignored. Property names are
/// ASCII-lowercased so the preview matches the same input the validator
/// accepts.
pub fn parse_declaration(input: &str) -> ParsedDeclaration {
    let first = input.trim().split(';').next().unwrap_or_default();

    let Some((property, value)) = first.split_once(':') else {
        return ParsedDeclaration::default();
    };

    let property = property.trim();
    let value = value.trim();
    if property.is_empty() || value.is_empty() {
        return ParsedDeclaration::default();
    }

    ParsedDeclaration {
        entry: Some((property.to_ascii_lowercase(), value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("justify-content: center;", "justify-content: center")]
    #[case("  Justify-Content:   CENTER;  ", "justify-content: center")]
    #[case("align-items:\tcenter;\n", "align-items: center")]
    #[case("align-items:\tcenter\n;", "align-items: center ")]
    #[case("flex-direction: column;;", "flex-direction: column;")]
    #[case("align-items: center ;", "align-items: center ")]
    #[case("", "")]
    #[case("   ", "")]
    fn normalizes_to_canonical_form(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[rstest]
    #[case("justify-content: center;", true)]
    #[case("  justify-content: center;   ", true)]
    #[case("justify-content:center", false)]
    #[case("justify-content center;", false)]
    #[case(";", false)]
    #[case(":;", true)]
    #[case("", false)]
    fn gates_incomplete_rules(#[case] raw: &str, #[case] complete: bool) {
        assert_eq!(is_complete_rule(raw), complete);
    }

    #[test]
    fn parses_property_and_value() {
        let parsed = parse_declaration("  justify-content :  space-evenly ;");
        assert_eq!(parsed.get("justify-content"), Some("space-evenly"));
        assert_eq!(parsed.get("align-items"), None);
    }

    #[test]
    fn parses_without_trailing_semicolon() {
        let parsed = parse_declaration("flex-direction: column");
        assert_eq!(parsed.get("flex-direction"), Some("column"));
    }

    #[test]
    fn only_the_first_declaration_counts() {
        let parsed = parse_declaration("align-items: center; flex-direction: column;");
        assert_eq!(parsed.get("align-items"), Some("center"));
        assert_eq!(parsed.get("flex-direction"), None);
    }

    #[test]
    fn lowercases_the_property_name_only() {
        let parsed = parse_declaration("Flex-Direction: Row-Reverse;");
        assert_eq!(parsed.get("flex-direction"), Some("Row-Reverse"));
    }

    #[rstest]
    #[case("")]
    #[case("justify-content")]
    #[case(": center;")]
    #[case("justify-content: ;")]
    #[case("   :   ")]
    fn malformed_input_parses_to_empty(#[case] raw: &str) {
        assert_eq!(parse_declaration(raw), ParsedDeclaration::default());
    }

    proptest! {
        // Stripping a single semicolon is only idempotent when what precedes
        // it is neither another semicolon nor whitespace.
        #[test]
        fn normalize_is_idempotent(raw in "[ -~\t\n]{0,40}[!-:<-~];?[ \t\n]{0,3}") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn rules_without_colon_are_rejected(raw in "[a-z ;-]{0,32}") {
            prop_assert!(!is_complete_rule(&raw));
        }

        #[test]
        fn rules_without_trailing_semicolon_are_rejected(raw in "[a-z :;-]{0,32}[a-z:-]") {
            prop_assert!(!is_complete_rule(&raw));
        }

        #[test]
        fn parser_never_panics(raw in "\\PC{0,64}") {
            let parsed = parse_declaration(&raw);
            if let Some((property, value)) = &parsed.entry {
                prop_assert!(!property.is_empty());
                prop_assert!(!value.is_empty());
            }
        }
    }
}
