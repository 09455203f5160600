use diesel::result;
use diesel_async::AsyncMysqlConnection;
use diesel_async::pooled_connection::deadpool::{BuildError, Object, Pool};
use diesel_async::pooled_connection::AsyncDieselConnectionManager;

/// Handle to the MySQL connection pool. Cloning is cheap; every clone shares
/// the same pool.
#[derive(Clone)]
pub struct Database {
    pool: Pool<AsyncMysqlConnection>,
}

impl Database {
    pub fn new(database_url: &str) -> Result<Self, BuildError> {
        let config = AsyncDieselConnectionManager::<AsyncMysqlConnection>::new(database_url);
        let pool = Pool::builder(config).build()?;

        tracing::info!("DB connection pool created");

        Ok(Database { pool })
    }

    /// Checks a connection out of the pool. Pool failures are reported as
    /// `UnableToSendCommand` so repositories only deal with diesel errors.
    pub async fn get_connection(&self) -> Result<Object<AsyncMysqlConnection>, result::Error> {
        self.pool.get().await.map_err(|e| {
            tracing::error!("Failed to get a database connection: {}", e);
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })
    }
}
