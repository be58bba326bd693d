//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting item records into DynamoDB AttributeValue
//! maps. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use itemstore_core::item::ItemRecord;

/// Attribute name for the server-generated timestamp.
///
/// Capitalized in the stored item, unlike `id` and `data`, to match the
/// existing table layout.
pub const TIMESTAMP_ATTR: &str = "Timestamp";

/// Convert an ItemRecord to a DynamoDB item.
///
/// Every field is stored as an explicitly typed string attribute.
pub fn record_to_item(record: &ItemRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert("id".to_string(), AttributeValue::S(record.id.clone()));
    item.insert("data".to_string(), AttributeValue::S(record.data.clone()));
    item.insert(
        TIMESTAMP_ATTR.to_string(),
        AttributeValue::S(record.timestamp.clone()),
    );

    item
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ItemRecord {
        ItemRecord {
            id: "a1".to_string(),
            data: "hello".to_string(),
            timestamp: "2024-01-15T10:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_record_to_item_fields() {
        let item = record_to_item(&sample_record());

        assert_eq!(item.get("id").unwrap().as_s().unwrap(), "a1");
        assert_eq!(item.get("data").unwrap().as_s().unwrap(), "hello");
        assert_eq!(
            item.get("Timestamp").unwrap().as_s().unwrap(),
            "2024-01-15T10:30:00.000Z"
        );
    }

    #[test]
    fn test_record_to_item_has_no_extra_attributes() {
        let item = record_to_item(&sample_record());

        assert_eq!(item.len(), 3);
    }
}
