use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// AWS region fallback when the provider chain resolves none
    /// (default: "us-east-1")
    pub region: String,
    /// DynamoDB table receiving writes (default: "Items")
    pub table_name: String,
    /// Optional DynamoDB endpoint override, e.g. for dynamodb-local
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AWS_REGION` - Region fallback (default: "us-east-1")
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "Items")
    /// - `DYNAMODB_ENDPOINT` - Endpoint override (default: unset)
    pub fn from_env() -> Self {
        Self {
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            table_name: env::var("DYNAMODB_TABLE_NAME").unwrap_or_else(|_| "Items".to_string()),
            endpoint_url: env::var("DYNAMODB_ENDPOINT").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("AWS_REGION");
        env::remove_var("DYNAMODB_TABLE_NAME");
        env::remove_var("DYNAMODB_ENDPOINT");

        let config = Config::from_env();

        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.table_name, "Items");
        assert_eq!(config.endpoint_url, None);
    }
}
