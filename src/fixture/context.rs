//! Test database context returned by [`TestBuilder`](crate::TestBuilder).

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{error::TestError, logging};

/// In-memory SQLite database private to one suite instance.
pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Connect a fresh in-memory database and install test logging.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Connected, empty database
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        logging::init();

        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db })
    }

    /// Execute CREATE TABLE statements in order.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
