use crate::adapters::error::StoreError;

/// Blob store keyed by an opaque object key. Objects are written and read whole.
pub trait ContentStore {
    fn put_object(&self, key: &str, body: &[u8]) -> Result<(), StoreError>;

    fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
}
