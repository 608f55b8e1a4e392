use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored soldier as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SoldierDto {
    /// Store-assigned identity, echoed back as an opaque string.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Business identifier used for all lookups.
    #[serde(rename = "ID")]
    pub business_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: i64,
    pub rank: String,
}

/// Request body for creating a soldier. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateSoldierDto {
    #[serde(rename = "ID")]
    pub business_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: i64,
    pub rank: String,
}

/// Request body for a partial update.
///
/// Omitted and `null` fields are both left untouched on the stored record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateSoldierDto {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<i64>,
    #[serde(default)]
    pub rank: Option<String>,
}
