//! DynamoDB storage backend implementation.
//!
//! Implements `ItemStore` using `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod store;

pub use store::DynamoDbStore;
