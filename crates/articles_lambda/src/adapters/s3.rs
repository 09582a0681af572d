use std::future::Future;

use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;

use crate::adapters::content_store::ContentStore;
use crate::adapters::error::StoreError;

const VALIDATION_ERROR_CODES: &[&str] = &["InvalidArgument", "KeyTooLongError", "InvalidBucketName"];

#[derive(Clone)]
pub struct S3ContentStore {
    bucket: String,
    s3_client: aws_sdk_s3::Client,
}

impl S3ContentStore {
    pub fn new(s3_client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            s3_client,
        }
    }
}

impl ContentStore for S3ContentStore {
    fn put_object(&self, key: &str, body: &[u8]) -> Result<(), StoreError> {
        block_on(
            self.s3_client
                .put_object()
                .bucket(&self.bucket)
                .key(key)
                .body(ByteStream::from(body.to_vec()))
                .send(),
        )
        .map(|_| ())
        .map_err(|error| classify_sdk_error("put_object", error))
    }

    fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        block_on(async {
            let output = match self
                .s3_client
                .get_object()
                .bucket(&self.bucket)
                .key(key)
                .send()
                .await
            {
                Ok(output) => output,
                Err(error)
                    if error
                        .as_service_error()
                        .is_some_and(GetObjectError::is_no_such_key) =>
                {
                    return Ok(None);
                }
                Err(error) => return Err(classify_sdk_error("get_object", error)),
            };

            let body = output
                .body
                .collect()
                .await
                .map_err(|error| {
                    StoreError::unavailable("get_object", format!("failed to read body: {error}"))
                })?;
            Ok::<_, StoreError>(Some(body.into_bytes().to_vec()))
        })
    }
}

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
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
        Some(code) if VALIDATION_ERROR_CODES.contains(&code) => {
            StoreError::validation(operation, message)
        }
        _ => StoreError::unavailable(operation, message),
    }
}
