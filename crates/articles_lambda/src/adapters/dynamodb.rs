use std::collections::HashMap;
use std::future::Future;

use articles_core::records::{Attributes, MetadataItem};
use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;

use crate::adapters::error::StoreError;
use crate::adapters::metadata_store::MetadataStore;

pub const PARTITION_KEY_ATTRIBUTE: &str = "PK";
pub const SORT_KEY_ATTRIBUTE: &str = "SK";

/// DynamoDB table with a string `PK` hash key and string `SK` range key.
#[derive(Clone)]
pub struct DynamoMetadataStore {
    table_name: String,
    client: aws_sdk_dynamodb::Client,
}

impl DynamoMetadataStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            client,
        }
    }
}

impl MetadataStore for DynamoMetadataStore {
    fn put(
        &self,
        partition_key: &str,
        sort_key: &str,
        attributes: &Attributes,
    ) -> Result<(), StoreError> {
        let mut request = self.client.put_item().table_name(&self.table_name);
        for (name, value) in attributes {
            request = request.item(name, AttributeValue::S(value.clone()));
        }
        let request = request
            .item(
                PARTITION_KEY_ATTRIBUTE,
                AttributeValue::S(partition_key.to_string()),
            )
            .item(SORT_KEY_ATTRIBUTE, AttributeValue::S(sort_key.to_string()));

        block_on(request.send())
            .map(|_| ())
            .map_err(|error| classify_sdk_error("put_item", error))
    }

    fn query(&self, partition_key: &str) -> Result<Vec<MetadataItem>, StoreError> {
        block_on(async {
            let mut pages = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("#pk = :pk")
                .expression_attribute_names("#pk", PARTITION_KEY_ATTRIBUTE)
                .expression_attribute_values(":pk", AttributeValue::S(partition_key.to_string()))
                .into_paginator()
                .send();

            let mut items = Vec::new();
            while let Some(page) = pages.next().await {
                let page = page.map_err(|error| classify_sdk_error("query", error))?;
                for raw_item in page.items.unwrap_or_default() {
                    items.push(metadata_item_from_attributes(raw_item)?);
                }
            }
            Ok::<_, StoreError>(items)
        })
    }

    fn get_by_key(
        &self,
        partition_key: &str,
        sort_key: &str,
    ) -> Result<Option<MetadataItem>, StoreError> {
        let output = block_on(
            self.client
                .get_item()
                .table_name(&self.table_name)
                .key(
                    PARTITION_KEY_ATTRIBUTE,
                    AttributeValue::S(partition_key.to_string()),
                )
                .key(SORT_KEY_ATTRIBUTE, AttributeValue::S(sort_key.to_string()))
                .send(),
        )
        .map_err(|error| classify_sdk_error("get_item", error))?;

        output.item.map(metadata_item_from_attributes).transpose()
    }
}

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Only string attributes are carried; other attribute types are dropped.
fn metadata_item_from_attributes(
    mut raw_item: HashMap<String, AttributeValue>,
) -> Result<MetadataItem, StoreError> {
    let partition_key = take_string_key(&mut raw_item, PARTITION_KEY_ATTRIBUTE)?;
    let sort_key = take_string_key(&mut raw_item, SORT_KEY_ATTRIBUTE)?;
    let attributes = raw_item
        .into_iter()
        .filter_map(|(name, value)| match value {
            AttributeValue::S(text) => Some((name, text)),
            _ => None,
        })
        .collect();

    Ok(MetadataItem {
        partition_key,
        sort_key,
        attributes,
    })
}

fn take_string_key(
    raw_item: &mut HashMap<String, AttributeValue>,
    name: &str,
) -> Result<String, StoreError> {
    match raw_item.remove(name) {
        Some(AttributeValue::S(value)) => Ok(value),
        Some(_) => Err(StoreError::validation(
            "decode_item",
            format!("key attribute {name} is not a string"),
        )),
        None => Err(StoreError::validation(
            "decode_item",
            format!("key attribute {name} is missing"),
        )),
    }
}

fn classify_sdk_error<E>(operation: &str, error: SdkError<E, HttpResponse>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    let code = error.as_service_error().and_then(|service| service.code());
    store_error_for_code(operation, code, DisplayErrorContext(&error).to_string())
}

fn store_error_for_code(operation: &str, code: Option<&str>, message: String) -> StoreError {
    match code {
        Some("ValidationException") => StoreError::validation(operation, message),
        _ => StoreError::unavailable(operation, message),
    }
}
