use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid level directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error(transparent)]
    Glob(#[from] glob::GlobError),
    #[error("level catalog is empty")]
    Empty,
    #[error("found level {found} where level {expected} was expected")]
    OutOfOrder { expected: usize, found: usize },
    #[error("level {level} answer {answer:?} is not a complete rule")]
    MalformedAnswer { level: usize, answer: String },
}
