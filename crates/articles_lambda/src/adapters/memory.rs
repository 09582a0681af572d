//! In-process store implementations for tests and local runs.
//!
//! Both stores can be told to fail every call with a given [`StoreError`],
//! which is how partial-write scenarios are reproduced without a network.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use articles_core::records::{Attributes, MetadataItem};

use crate::adapters::content_store::ContentStore;
use crate::adapters::error::StoreError;
use crate::adapters::metadata_store::MetadataStore;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
pub struct InMemoryMetadataStore {
    items: Mutex<BTreeMap<(String, String), Attributes>>,
    failure: Mutex<Option<StoreError>>,
    put_calls: Mutex<usize>,
}

impl InMemoryMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent call returns `error` until [`Self::recover`] is called.
    pub fn fail_with(&self, error: StoreError) {
        *lock(&self.failure) = Some(error);
    }

    pub fn recover(&self) {
        *lock(&self.failure) = None;
    }

    /// Number of `put` calls that reached the store, successful or not.
    pub fn put_calls(&self) -> usize {
        *lock(&self.put_calls)
    }

    pub fn len(&self) -> usize {
        lock(&self.items).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn injected_failure(&self) -> Result<(), StoreError> {
        match lock(&self.failure).clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn put(
        &self,
        partition_key: &str,
        sort_key: &str,
        attributes: &Attributes,
    ) -> Result<(), StoreError> {
        *lock(&self.put_calls) += 1;
        self.injected_failure()?;

        if partition_key.is_empty() || sort_key.is_empty() {
            return Err(StoreError::validation(
                "put_item",
                "partition key and sort key must be non-empty",
            ));
        }

        lock(&self.items).insert(
            (partition_key.to_string(), sort_key.to_string()),
            attributes.clone(),
        );
        Ok(())
    }

    fn query(&self, partition_key: &str) -> Result<Vec<MetadataItem>, StoreError> {
        self.injected_failure()?;

        Ok(lock(&self.items)
            .iter()
            .filter(|((partition, _), _)| partition == partition_key)
            .map(|((partition, sort), attributes)| MetadataItem {
                partition_key: partition.clone(),
                sort_key: sort.clone(),
                attributes: attributes.clone(),
            })
            .collect())
    }

    fn get_by_key(
        &self,
        partition_key: &str,
        sort_key: &str,
    ) -> Result<Option<MetadataItem>, StoreError> {
        self.injected_failure()?;

        Ok(lock(&self.items)
            .get(&(partition_key.to_string(), sort_key.to_string()))
            .map(|attributes| MetadataItem {
                partition_key: partition_key.to_string(),
                sort_key: sort_key.to_string(),
                attributes: attributes.clone(),
            }))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    failure: Mutex<Option<StoreError>>,
    put_calls: Mutex<usize>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, error: StoreError) {
        *lock(&self.failure) = Some(error);
    }

    pub fn recover(&self) {
        *lock(&self.failure) = None;
    }

    pub fn put_calls(&self) -> usize {
        *lock(&self.put_calls)
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = lock(&self.objects).keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn seed_object(&self, key: &str, body: &[u8]) {
        lock(&self.objects).insert(key.to_string(), body.to_vec());
    }

    fn injected_failure(&self) -> Result<(), StoreError> {
        match lock(&self.failure).clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl ContentStore for InMemoryContentStore {
    fn put_object(&self, key: &str, body: &[u8]) -> Result<(), StoreError> {
        *lock(&self.put_calls) += 1;
        self.injected_failure()?;

        if key.is_empty() {
            return Err(StoreError::validation("put_object", "object key must be non-empty"));
        }

        lock(&self.objects).insert(key.to_string(), body.to_vec());
        Ok(())
    }

    fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.injected_failure()?;
        Ok(lock(&self.objects).get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(value: &str) -> Attributes {
        Attributes::from([("title".to_string(), value.to_string())])
    }

    #[test]
    fn query_returns_partition_items_in_sort_key_order() {
        let store = InMemoryMetadataStore::new();
        store.put("article", "b", &title("B")).expect("put should succeed");
        store.put("article", "a", &title("A")).expect("put should succeed");
        store.put("note", "c", &title("C")).expect("put should succeed");

        let items = store.query("article").expect("query should succeed");
        let sort_keys: Vec<&str> = items.iter().map(|item| item.sort_key.as_str()).collect();
        assert_eq!(sort_keys, vec!["a", "b"]);
    }

    #[test]
    fn put_overwrites_same_key() {
        let store = InMemoryMetadataStore::new();
        store.put("article", "a", &title("First")).expect("put should succeed");
        store.put("article", "a", &title("Second")).expect("put should succeed");

        let item = store
            .get_by_key("article", "a")
            .expect("get should succeed")
            .expect("item should exist");
        assert_eq!(item.attributes, title("Second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_by_key_misses_return_none() {
        let store = InMemoryMetadataStore::new();
        assert_eq!(store.get_by_key("article", "nope").expect("get should succeed"), None);
    }

    #[test]
    fn empty_keys_are_rejected_as_validation_errors() {
        let store = InMemoryMetadataStore::new();
        let error = store.put("", "a", &title("A")).expect_err("empty partition should fail");
        assert!(!error.is_retryable());
    }

    #[test]
    fn injected_failure_applies_until_recovered() {
        let store = InMemoryContentStore::new();
        store.fail_with(StoreError::unavailable("put_object", "simulated outage"));

        assert!(store.put_object("a", b"body").is_err());
        assert_eq!(store.put_calls(), 1);
        assert!(store.keys().is_empty());

        store.recover();
        store.put_object("a", b"body").expect("put should succeed");
        assert_eq!(store.get_object("a").expect("get should succeed"), Some(b"body".to_vec()));
    }
}
