//! Declarative database setup for suites.

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, fixture::TestContext};

/// Builder for an isolated test database.
///
/// Queue the tables a resource needs with [`with_table`](Self::with_table); they are
/// created against a fresh in-memory SQLite database by [`build`](Self::build).
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_table(entity::prelude::Profile)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Add an entity's table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; they are created in insertion order.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Connect the database and create every queued table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database ready for fixtures
    /// - `Err(TestError::DbErr)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
