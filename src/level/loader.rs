use std::path::Path;

use super::catalog::Catalog;
use super::error::LevelError;
use super::types::Level;

const EMBEDDED_LEVELS: [(&str, &str); 5] = [
    ("level_01.toml", include_str!("../../levels/level_01.toml")),
    ("level_02.toml", include_str!("../../levels/level_02.toml")),
    ("level_03.toml", include_str!("../../levels/level_03.toml")),
    ("level_04.toml", include_str!("../../levels/level_04.toml")),
    ("level_05.toml", include_str!("../../levels/level_05.toml")),
];

pub fn parse_level(name: &str, content: &str) -> Result<Level, LevelError> {
    toml::from_str(content).map_err(|source| LevelError::Parse {
        name: name.to_string(),
        source,
    })
}

pub fn load_level(path: &Path) -> Result<Level, LevelError> {
    let content = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_level(&path.display().to_string(), &content)
}

/// The stock levels compiled into the binary.
pub fn embedded_catalog() -> Result<Catalog, LevelError> {
    let levels = EMBEDDED_LEVELS
        .iter()
        .map(|(name, content)| parse_level(name, content))
        .collect::<Result<Vec<_>, _>>()?;
    Catalog::new(levels)
}

/// Loads every `level_*.toml` in `dir`.
pub fn load_catalog(dir: &Path) -> Result<Catalog, LevelError> {
    let pattern = format!(
        "{}/level_*.toml",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let mut paths = glob::glob(&pattern)?.collect::<Result<Vec<_>, _>>()?;

    // Sort by filename so level_01, level_02, level_03 are in order
    paths.sort();

    let levels = paths
        .iter()
        .map(|path| load_level(path))
        .collect::<Result<Vec<_>, _>>()?;
    Catalog::new(levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{validate_answer, ValidationResult};
    use crate::level::effect::LayoutEffect;
    use tempfile::TempDir;

    fn level_toml(number: usize, answer: &str, effect: &str) -> String {
        format!(
            "[meta]\nnumber = {number}\ntitle = \"Level {number}\"\n\n\
             [puzzle]\ninstruction = \"Do the thing\"\nanswer = \"{answer}\"\nhint = \"Think\"\n\n\
             [preview]\neffect = \"{effect}\"\n"
        )
    }

    fn write_level(dir: &TempDir, file: &str, contents: &str) {
        std::fs::write(dir.path().join(file), contents).unwrap();
    }

    #[test]
    fn embedded_catalog_has_the_five_stock_levels() {
        let catalog = embedded_catalog().unwrap();
        assert_eq!(catalog.len(), 5);

        let effects: Vec<_> = catalog.iter().map(|l| l.preview.effect).collect();
        assert_eq!(
            effects,
            [
                LayoutEffect::JustifyContent,
                LayoutEffect::JustifyContent,
                LayoutEffect::FlexDirection,
                LayoutEffect::AlignItems,
                LayoutEffect::FlexDirection,
            ]
        );
        assert_eq!(catalog.level(1).puzzle.answer, "justify-content: center;");
        assert_eq!(catalog.level(5).puzzle.answer, "flex-direction: row-reverse;");
    }

    #[test]
    fn every_stock_answer_validates_against_itself() {
        let catalog = embedded_catalog().unwrap();
        for level in catalog.iter() {
            assert_eq!(
                validate_answer(&level.puzzle.answer, &level.puzzle.answer),
                ValidationResult::Correct,
                "level {}",
                level.meta.number
            );
        }
    }

    #[test]
    fn loads_a_directory_sorted_by_file_name() {
        let dir = TempDir::new().unwrap();
        write_level(&dir, "level_02.toml", &level_toml(2, "align-items: center;", "align-items"));
        write_level(&dir, "level_01.toml", &level_toml(1, "flex-direction: column;", "flex-direction"));
        write_level(&dir, "notes.toml", "not a level");

        let catalog = load_catalog(dir.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.level(1).puzzle.answer, "flex-direction: column;");
        assert_eq!(catalog.level(2).preview.effect, LayoutEffect::AlignItems);
    }

    #[test]
    fn empty_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(load_catalog(dir.path()), Err(LevelError::Empty)));
    }

    #[test]
    fn gaps_in_numbering_are_rejected() {
        let dir = TempDir::new().unwrap();
        write_level(&dir, "level_01.toml", &level_toml(1, "align-items: center;", "align-items"));
        write_level(&dir, "level_02.toml", &level_toml(3, "align-items: center;", "align-items"));

        assert!(matches!(
            load_catalog(dir.path()),
            Err(LevelError::OutOfOrder { expected: 2, found: 3 })
        ));
    }

    #[test]
    fn incomplete_answers_are_rejected() {
        let dir = TempDir::new().unwrap();
        write_level(&dir, "level_01.toml", &level_toml(1, "align-items: center", "align-items"));

        assert!(matches!(
            load_catalog(dir.path()),
            Err(LevelError::MalformedAnswer { level: 1, .. })
        ));
    }

    #[test]
    fn unknown_effect_is_a_parse_error() {
        let err = parse_level("bad.toml", &level_toml(1, "gap: 1px;", "gap")).unwrap_err();
        assert!(matches!(err, LevelError::Parse { ref name, .. } if name == "bad.toml"));
    }
}
