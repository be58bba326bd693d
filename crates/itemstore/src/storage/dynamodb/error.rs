//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `itemstore_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use itemstore_core::storage::StoreError;

/// Map a PutItem SDK error to StoreError.
///
/// Transport-level failures map to `ConnectionFailed`; anything the service
/// answered with maps to `PutFailed`.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StoreError {
    match err {
        SdkError::DispatchFailure(e) => StoreError::ConnectionFailed(format!("{:?}", e)),
        SdkError::TimeoutError(e) => StoreError::ConnectionFailed(format!("{:?}", e)),
        err => match err.into_service_error() {
            PutItemError::ResourceNotFoundException(_) => {
                StoreError::PutFailed("Table not found".to_string())
            }
            PutItemError::ProvisionedThroughputExceededException(_) => {
                StoreError::PutFailed("Throughput exceeded, please retry".to_string())
            }
            PutItemError::RequestLimitExceeded(_) => {
                StoreError::PutFailed("Request limit exceeded, please retry".to_string())
            }
            PutItemError::InternalServerError(_) => {
                StoreError::PutFailed("DynamoDB internal server error".to_string())
            }
            err => StoreError::PutFailed(format!("PutItem failed: {:?}", err)),
        },
    }
}
