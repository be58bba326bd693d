//! DynamoDB store implementation.

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::Region;
use aws_sdk_dynamodb::Client;

use itemstore_core::item::ItemRecord;
use itemstore_core::storage::{ItemStore, Result};

use crate::config::Config;

use super::conversions::record_to_item;
use super::error::map_put_item_error;

/// DynamoDB-backed item store.
///
/// Holds the SDK client created once at startup; the client (and its
/// connection pool) is shared read-only across all requests.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a store with the given client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a store from application configuration.
    ///
    /// Credentials come from the SDK default provider chain (environment,
    /// web identity, instance profile, in that order); the region falls
    /// back to the configured default when the chain resolves none. An
    /// endpoint override, when configured, points the client at a local
    /// DynamoDB instance.
    pub async fn from_config(config: &Config) -> Self {
        let region_provider = RegionProviderChain::default_provider()
            .or_else(Region::new(config.region.clone()));
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;

        let client = match &config.endpoint_url {
            Some(endpoint) => Client::from_conf(
                aws_sdk_dynamodb::config::Builder::from(&sdk_config)
                    .endpoint_url(endpoint)
                    .build(),
            ),
            None => Client::new(&sdk_config),
        };

        Self::new(client, config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ItemStore for DynamoDbStore {
    async fn put_item(&self, record: &ItemRecord) -> Result<()> {
        // Unconditional put: a resubmitted id overwrites the stored record.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }
}
