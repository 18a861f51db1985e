pub mod declaration;
pub mod validator;

pub use declaration::{is_complete_rule, parse_declaration, ParsedDeclaration};
pub use validator::{validate_answer, ValidationResult};
