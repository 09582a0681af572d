use crate::adapters::dynamodb::DynamoMetadataStore;
use crate::adapters::s3::S3ContentStore;
use crate::config::{ConfigError, HandlerConfig};

/// Process-wide handles, built once at cold start and lent to every
/// invocation.
pub struct RuntimeDependencies {
    pub config: HandlerConfig,
    pub metadata_store: DynamoMetadataStore,
    pub content_store: S3ContentStore,
}

impl RuntimeDependencies {
    pub async fn from_env() -> Result<Self, ConfigError> {
        let config = HandlerConfig::from_env()?;
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        Ok(Self {
            metadata_store: DynamoMetadataStore::new(
                aws_sdk_dynamodb::Client::new(&aws_config),
                &config.table_name,
            ),
            content_store: S3ContentStore::new(
                aws_sdk_s3::Client::new(&aws_config),
                &config.bucket_name,
            ),
            config,
        })
    }
}
