use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait, Index, Query},
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Iterable,
    Schema, SqlErr, Statement, StatementBuilder,
};
use tokio::sync::RwLock;

use entity::soldier::{self, Column};

use crate::server::{
    config::StoreConfig,
    error::data::DataError,
    model::soldier::{CreateSoldierParams, Soldier, UpdateSoldierParams},
};

/// Data-access layer for soldier records.
///
/// Owns the store connection for the lifetime of the process. The handle starts out
/// disconnected; `connect` is called once at startup and `disconnect` once at shutdown.
/// A failed `connect` is logged and leaves the loader disconnected, in which case every
/// data operation fails with `DataError::Unavailable` without touching the store.
///
/// All data operations take `&self` and may run concurrently; each clones the pooled
/// connection handle and issues a single statement against the store.
pub struct DataLoader {
    config: StoreConfig,
    db: RwLock<Option<DatabaseConnection>>,
}

impl DataLoader {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            db: RwLock::new(None),
        }
    }

    /// Connects to the store and prepares the collection.
    ///
    /// Opens the connection pool within the configured timeout, pings the store, then creates
    /// the collection and the unique index on the business ID if they do not exist yet.
    /// Errors are logged rather than returned; the loader stays disconnected on failure.
    /// Calling this while already connected is a no-op.
    ///
    /// # Returns
    /// - `true` - The loader holds a live connection
    /// - `false` - Connecting failed and the loader is disconnected
    pub async fn connect(&self) -> bool {
        let mut guard = self.db.write().await;

        if guard.is_some() {
            return true;
        }

        match self.open().await {
            Ok(db) => {
                tracing::info!(
                    "Connected to store, collection '{}' ready",
                    self.config.collection
                );
                *guard = Some(db);
                true
            }
            Err(err) => {
                tracing::error!("Database connection failed: {}", err);
                false
            }
        }
    }

    /// Releases the connection if one is held. Safe to call repeatedly.
    pub async fn disconnect(&self) {
        let db = self.db.write().await.take();

        if let Some(db) = db {
            match db.close().await {
                Ok(()) => tracing::info!("Disconnected from store"),
                Err(err) => tracing::warn!("Error while closing store connection: {}", err),
            }
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.db.read().await.is_some()
    }

    /// Creates a soldier and returns it with its assigned internal ID.
    ///
    /// # Returns
    /// - `Ok(Soldier)` - The stored record
    /// - `Err(DataError::DuplicateKey)` - The business ID is already taken
    /// - `Err(DataError::Unavailable)` - Not connected or the store call failed
    pub async fn create_item(&self, params: CreateSoldierParams) -> Result<Soldier, DataError> {
        let db = self.connection().await?;
        let business_id = params.business_id;

        let insert = Query::insert()
            .into_table(self.table())
            .columns([
                Column::BusinessId,
                Column::FirstName,
                Column::LastName,
                Column::PhoneNumber,
                Column::Rank,
            ])
            .values_panic([
                params.business_id.into(),
                params.first_name.into(),
                params.last_name.into(),
                params.phone_number.into(),
                params.rank.into(),
            ])
            .returning_all()
            .to_owned();

        let created = soldier::Entity::find()
            .from_raw_sql(build(&db, &insert))
            .one(&db)
            .await
            .map_err(|err| classify_insert_error(err, business_id))?
            .ok_or(DbErr::RecordNotInserted)?;

        Ok(Soldier::from_entity(created))
    }

    /// Returns every soldier in store order.
    pub async fn get_all(&self) -> Result<Vec<Soldier>, DataError> {
        let db = self.connection().await?;

        let select = Query::select()
            .columns(Column::iter())
            .from(self.table())
            .to_owned();

        let soldiers = soldier::Entity::find()
            .from_raw_sql(build(&db, &select))
            .all(&db)
            .await?;

        Ok(soldiers.into_iter().map(Soldier::from_entity).collect())
    }

    /// Gets a soldier by business ID.
    ///
    /// # Returns
    /// - `Ok(Some(Soldier))` - The record exists
    /// - `Ok(None)` - No record with this business ID
    /// - `Err(DataError::Unavailable)` - Not connected or the store call failed
    pub async fn get_by_id(&self, business_id: i64) -> Result<Option<Soldier>, DataError> {
        let db = self.connection().await?;

        let select = Query::select()
            .columns(Column::iter())
            .from(self.table())
            .and_where(Expr::col(Column::BusinessId).eq(business_id))
            .to_owned();

        let soldier = soldier::Entity::find()
            .from_raw_sql(build(&db, &select))
            .one(&db)
            .await?;

        Ok(soldier.map(Soldier::from_entity))
    }

    /// Applies the supplied fields to a soldier and returns the updated record.
    ///
    /// Fields left as `None` keep their stored value. With no fields supplied this is
    /// exactly `get_by_id`. The update and read-back happen in one statement.
    ///
    /// # Returns
    /// - `Ok(Some(Soldier))` - The record after the update
    /// - `Ok(None)` - No record with this business ID
    /// - `Err(DataError::Unavailable)` - Not connected or the store call failed
    pub async fn update_item(
        &self,
        business_id: i64,
        params: UpdateSoldierParams,
    ) -> Result<Option<Soldier>, DataError> {
        if params.is_empty() {
            return self.get_by_id(business_id).await;
        }

        let db = self.connection().await?;

        let mut update = Query::update();
        update.table(self.table());

        if let Some(first_name) = params.first_name {
            update.value(Column::FirstName, first_name);
        }
        if let Some(last_name) = params.last_name {
            update.value(Column::LastName, last_name);
        }
        if let Some(phone_number) = params.phone_number {
            update.value(Column::PhoneNumber, phone_number);
        }
        if let Some(rank) = params.rank {
            update.value(Column::Rank, rank);
        }

        update
            .and_where(Expr::col(Column::BusinessId).eq(business_id))
            .returning_all();

        let soldier = soldier::Entity::find()
            .from_raw_sql(build(&db, &update))
            .one(&db)
            .await?;

        Ok(soldier.map(Soldier::from_entity))
    }

    /// Deletes a soldier by business ID.
    ///
    /// # Returns
    /// - `Ok(true)` - A record was removed
    /// - `Ok(false)` - No record with this business ID
    /// - `Err(DataError::Unavailable)` - Not connected or the store call failed
    pub async fn delete_item(&self, business_id: i64) -> Result<bool, DataError> {
        let db = self.connection().await?;

        let delete = Query::delete()
            .from_table(self.table())
            .and_where(Expr::col(Column::BusinessId).eq(business_id))
            .to_owned();

        let result = db.execute(&delete).await?;

        Ok(result.rows_affected() > 0)
    }

    /// Clones the pooled connection handle, or fails if disconnected.
    pub(crate) async fn connection(&self) -> Result<DatabaseConnection, DataError> {
        self.db
            .read()
            .await
            .clone()
            .ok_or(DataError::Unavailable(None))
    }

    async fn open(&self) -> Result<DatabaseConnection, DbErr> {
        if let Some(location) = self.config.location() {
            if let Err(err) = tokio::fs::create_dir_all(location).await {
                tracing::error!("Failed to create store directory '{}': {}", location, err);
            }
        }

        let mut opt = ConnectOptions::new(self.config.connection_url());
        opt.connect_timeout(self.config.connect_timeout)
            .acquire_timeout(self.config.connect_timeout)
            .sqlx_logging(false);

        // Every pooled connection to an in-memory store would see its own empty database.
        if self.config.is_in_memory() {
            opt.max_connections(1).min_connections(1);
        }

        let db = Database::connect(opt).await?;

        if let Err(err) = self.prepare(&db).await {
            if let Err(close_err) = db.close().await {
                tracing::debug!("Error closing failed connection: {}", close_err);
            }
            return Err(err);
        }

        Ok(db)
    }

    async fn prepare(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        db.ping().await?;

        let mut table =
            Schema::new(db.get_database_backend()).create_table_from_entity(soldier::Entity);
        table.table(self.table()).if_not_exists();
        db.execute(&table).await?;

        let index = Index::create()
            .if_not_exists()
            .name(format!("idx_{}_business_id", self.config.collection))
            .table(self.table())
            .col(Column::BusinessId)
            .unique()
            .to_owned();
        db.execute(&index).await?;

        tracing::info!(
            "Unique index on business ID ensured for collection '{}'",
            self.config.collection
        );

        Ok(())
    }

    fn table(&self) -> Alias {
        Alias::new(self.config.collection.clone())
    }
}

fn build<S: StatementBuilder>(db: &DatabaseConnection, stmt: &S) -> Statement {
    db.get_database_backend().build(stmt)
}

/// Maps a failed insert to the data-layer taxonomy.
///
/// Only a unique-constraint violation becomes `DuplicateKey`; everything else means the
/// store could not complete the request.
fn classify_insert_error(err: DbErr, business_id: i64) -> DataError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DataError::DuplicateKey(business_id),
        _ => DataError::from(err),
    }
}
