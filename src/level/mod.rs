pub mod catalog;
pub mod effect;
pub mod error;
pub mod loader;
pub mod types;

pub use catalog::Catalog;
pub use effect::{AlignItems, JustifyContent, LayoutAttributes};
pub use loader::{embedded_catalog, load_catalog};
pub use types::Level;
