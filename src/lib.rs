pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export logic types
pub use logic::{assemble_dump, render_dump, DumpError, InventoryError};

// Export all model types
pub use model::*;

// Export store types
pub use store::{DatasetStore, FileStore, FixtureStore, StoreError};
