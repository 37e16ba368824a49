//! Data module - CSV loading, table access and imputation

mod imputer;
mod loader;
mod table;

pub use imputer::Imputer;
pub use loader::{DataLoader, LoaderError};
pub use table::Table;
