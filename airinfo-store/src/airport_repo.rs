use airinfo_core::{Airport, AirportReader, AirportWriter, CoreError, CoreResult};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresAirportRepository {
    pool: PgPool,
}

impl PostgresAirportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AirportRow {
    id: String,
    name: String,
}

impl From<AirportRow> for Airport {
    fn from(row: AirportRow) -> Self {
        Airport { id: row.id, name: row.name }
    }
}

fn store_error(err: sqlx::Error) -> CoreError {
    CoreError::StoreUnavailable(err.to_string())
}

#[async_trait]
impl AirportReader for PostgresAirportRepository {
    async fn find_all(&self) -> CoreResult<Vec<Airport>> {
        let rows = sqlx::query_as::<_, AirportRow>("SELECT id, name FROM airports")
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(rows.into_iter().map(Airport::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Airport>> {
        let row = sqlx::query_as::<_, AirportRow>("SELECT id, name FROM airports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(row.map(Airport::from))
    }
}

#[async_trait]
impl AirportWriter for PostgresAirportRepository {
    async fn delete_all(&self) -> CoreResult<u64> {
        let result = sqlx::query("DELETE FROM airports")
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected())
    }

    async fn save(&self, airport: &Airport) -> CoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO airports (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
            "#,
        )
        .bind(&airport.id)
        .bind(&airport.name)
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(())
    }
}
