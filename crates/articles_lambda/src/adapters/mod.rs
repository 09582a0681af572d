pub mod content_store;
pub mod dynamodb;
pub mod error;
pub mod memory;
pub mod metadata_store;
pub mod s3;

pub use content_store::ContentStore;
pub use error::StoreError;
pub use metadata_store::MetadataStore;
