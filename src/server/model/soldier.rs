//! Soldier domain model and operation parameters.

use crate::model::soldier::{CreateSoldierDto, SoldierDto, UpdateSoldierDto};

/// A stored soldier record.
#[derive(Debug, Clone, PartialEq)]
pub struct Soldier {
    /// Store-assigned identity rendered as a string.
    pub internal_id: String,
    /// Externally supplied, unique business identifier.
    pub business_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: i64,
    pub rank: String,
}

impl Soldier {
    /// Converts an entity model to a soldier domain model at the repository boundary.
    ///
    /// The integer primary key is rendered in decimal, which is lossless and yields the same
    /// string for the same row every time.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Soldier` - The converted domain model
    pub fn from_entity(entity: entity::soldier::Model) -> Self {
        Self {
            internal_id: entity.id.to_string(),
            business_id: entity.business_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            phone_number: entity.phone_number,
            rank: entity.rank,
        }
    }

    /// Converts the soldier domain model to a DTO for API responses.
    pub fn into_dto(self) -> SoldierDto {
        SoldierDto {
            id: self.internal_id,
            business_id: self.business_id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            rank: self.rank,
        }
    }
}

/// Parameters for creating a soldier.
#[derive(Debug, Clone)]
pub struct CreateSoldierParams {
    pub business_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: i64,
    pub rank: String,
}

impl CreateSoldierParams {
    pub fn from_dto(dto: CreateSoldierDto) -> Self {
        Self {
            business_id: dto.business_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone_number: dto.phone_number,
            rank: dto.rank,
        }
    }
}

/// Parameters for a partial update.
///
/// `None` fields are left untouched. The business ID is never part of an update.
#[derive(Debug, Clone, Default)]
pub struct UpdateSoldierParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<i64>,
    pub rank: Option<String>,
}

impl UpdateSoldierParams {
    pub fn from_dto(dto: UpdateSoldierDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone_number: dto.phone_number,
            rank: dto.rank,
        }
    }

    /// Whether no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone_number.is_none()
            && self.rank.is_none()
    }
}
