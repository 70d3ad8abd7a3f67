//! Use case implementations.

mod load_catalog_use_case;
mod submit_design_use_case;

pub use load_catalog_use_case::{LoadCatalogUseCase, LoadedCatalog};
pub use submit_design_use_case::SubmitDesignUseCase;
