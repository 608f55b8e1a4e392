//! Soldier fixtures for creating in-memory test data.

use entity::soldier;
use serde_json::{json, Value};

/// Default test first name.
pub const DEFAULT_FIRST_NAME: &str = "Avi";

/// Default test last name.
pub const DEFAULT_LAST_NAME: &str = "Cohen";

/// Default test phone number.
pub const DEFAULT_PHONE_NUMBER: i64 = 521234567;

/// Default test rank.
pub const DEFAULT_RANK: &str = "Private";

/// Creates a soldier entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - business_id: `1`
/// - first_name: `"Avi"`
/// - last_name: `"Cohen"`
/// - phone_number: `521234567`
/// - rank: `"Private"`
pub fn entity() -> soldier::Model {
    soldier::Model {
        id: 1,
        business_id: 1,
        first_name: DEFAULT_FIRST_NAME.to_string(),
        last_name: DEFAULT_LAST_NAME.to_string(),
        phone_number: DEFAULT_PHONE_NUMBER,
        rank: DEFAULT_RANK.to_string(),
    }
}

/// JSON request body for creating a soldier with default fields and the given business ID.
pub fn create_body(business_id: i64) -> Value {
    json!({
        "ID": business_id,
        "first_name": DEFAULT_FIRST_NAME,
        "last_name": DEFAULT_LAST_NAME,
        "phone_number": DEFAULT_PHONE_NUMBER,
        "rank": DEFAULT_RANK,
    })
}
