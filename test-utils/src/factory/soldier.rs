//! Soldier factory for creating test soldier rows.
//!
//! Inserts directly through the entity, bypassing the data-access layer, so tests can
//! arrange store state independently of the code under test.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test soldiers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::soldier::SoldierFactory;
///
/// let soldier = SoldierFactory::new(&db)
///     .business_id(12)
///     .first_name("Dana")
///     .build()
///     .await?;
/// ```
pub struct SoldierFactory<'a> {
    db: &'a DatabaseConnection,
    business_id: i64,
    first_name: String,
    last_name: String,
    phone_number: i64,
    rank: String,
}

impl<'a> SoldierFactory<'a> {
    /// Creates a new SoldierFactory with default values.
    ///
    /// Defaults:
    /// - business_id: next value of the shared counter
    /// - first_name, last_name, phone_number, rank: the `fixture::soldier` defaults
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            business_id: next_id(),
            first_name: fixture::soldier::DEFAULT_FIRST_NAME.to_string(),
            last_name: fixture::soldier::DEFAULT_LAST_NAME.to_string(),
            phone_number: fixture::soldier::DEFAULT_PHONE_NUMBER,
            rank: fixture::soldier::DEFAULT_RANK.to_string(),
        }
    }

    pub fn business_id(mut self, business_id: i64) -> Self {
        self.business_id = business_id;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn phone_number(mut self, phone_number: i64) -> Self {
        self.phone_number = phone_number;
        self
    }

    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = rank.into();
        self
    }

    /// Builds and inserts the soldier entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::soldier::Model)` - Created soldier entity
    /// - `Err(DbErr)` - Database error during insert, including unique index violations
    pub async fn build(self) -> Result<entity::soldier::Model, DbErr> {
        entity::soldier::ActiveModel {
            business_id: ActiveValue::Set(self.business_id),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            phone_number: ActiveValue::Set(self.phone_number),
            rank: ActiveValue::Set(self.rank),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a soldier with default values.
///
/// Shorthand for `SoldierFactory::new(db).build().await`.
pub async fn create_soldier(db: &DatabaseConnection) -> Result<entity::soldier::Model, DbErr> {
    SoldierFactory::new(db).build().await
}

/// Creates a soldier with default values and the given business ID.
pub async fn create_soldier_with_id(
    db: &DatabaseConnection,
    business_id: i64,
) -> Result<entity::soldier::Model, DbErr> {
    SoldierFactory::new(db).business_id(business_id).build().await
}
