use super::declaration::{is_complete_rule, normalize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    /// Missing the colon or the terminating semicolon.
    Incomplete,
    Incorrect,
    Correct,
}

/// Checks the player's raw input against a level's recorded answer.
///
/// Only the literal canonical forms are compared: `row-reverse` written as
/// some equivalent CSS is still wrong.
pub fn validate_answer(input: &str, answer: &str) -> ValidationResult {
    if !is_complete_rule(input) {
        return ValidationResult::Incomplete;
    }

    if normalize(input) == normalize(answer) {
        ValidationResult::Correct
    } else {
        ValidationResult::Incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("justify-content: center;", ValidationResult::Correct)]
    #[case("JUSTIFY-CONTENT:   center;", ValidationResult::Correct)]
    #[case("justify-content: center ;", ValidationResult::Incorrect)]
    #[case("justify-content: center;;", ValidationResult::Incorrect)]
    #[case("justify-content:center;", ValidationResult::Incorrect)]
    #[case("color: red;", ValidationResult::Incorrect)]
    #[case("justify-content:center", ValidationResult::Incomplete)]
    #[case("justify-content center;", ValidationResult::Incomplete)]
    #[case("", ValidationResult::Incomplete)]
    fn compares_against_level_one(#[case] input: &str, #[case] expected: ValidationResult) {
        assert_eq!(validate_answer(input, "justify-content: center;"), expected);
    }

    #[test]
    fn extra_declarations_are_not_accepted() {
        assert_eq!(
            validate_answer(
                "justify-content: center; align-items: center;",
                "justify-content: center;"
            ),
            ValidationResult::Incorrect
        );
    }
}
