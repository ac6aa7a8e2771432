//! Repository for the `drills` table.

use sqlx::{FromRow, PgPool};
use toolhub_core::filters::{calculate_metadata, Filters, Metadata};
use toolhub_core::types::DbId;

use crate::error::DbError;
use crate::models::drill::Drill;
use crate::repositories::with_deadline;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, weight, name, cable_length, work_time, chuck_diameter";

/// A drill plus the window count of the query that produced it.
#[derive(FromRow)]
struct CountedDrill {
    total_records: i64,
    #[sqlx(flatten)]
    drill: Drill,
}

/// Provides CRUD operations for drills.
pub struct DrillRepo;

impl DrillRepo {
    /// Insert a new drill.
    ///
    /// Only `name`, `work_time` and `chuck_diameter` are written. The store
    /// assigns `id` and fills `weight` and `cable_length` from column
    /// defaults; all three are copied back into `drill`.
    pub async fn insert(pool: &PgPool, drill: &mut Drill) -> Result<(), DbError> {
        let query = "INSERT INTO drills (name, work_time, chuck_diameter)
             VALUES ($1, $2, $3)
             RETURNING id, weight, cable_length";

        let (id, weight, cable_length): (DbId, f32, f32) = with_deadline(
            sqlx::query_as::<_, (DbId, f32, f32)>(query)
                .bind(&drill.name)
                .bind(drill.work_time)
                .bind(drill.chuck_diameter)
                .fetch_one(pool),
        )
        .await?;

        drill.id = id;
        drill.weight = weight;
        drill.cable_length = cable_length;
        tracing::debug!(drill_id = id, "Inserted drill");
        Ok(())
    }

    /// Fetch a drill by id. Ids below 1 never reach the store.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Drill, DbError> {
        if id < 1 {
            return Err(DbError::RecordNotFound);
        }

        let query = format!("SELECT {COLUMNS} FROM drills WHERE id = $1");
        with_deadline(
            sqlx::query_as::<_, Drill>(&query)
                .bind(id)
                .fetch_optional(pool),
        )
        .await?
        .ok_or(DbError::RecordNotFound)
    }

    /// Write `drill`'s weight, cable length, work time and chuck diameter.
    ///
    /// The row is matched on both `id` and `name`, so `name` is never
    /// changed here and a row whose name no longer matches fails with
    /// [`DbError::EditConflict`].
    pub async fn update(pool: &PgPool, drill: &mut Drill) -> Result<(), DbError> {
        let query = "UPDATE drills SET
                weight = $1,
                cable_length = $2,
                work_time = $3,
                chuck_diameter = $4
             WHERE id = $5 AND name = $6
             RETURNING name";

        let name: Option<String> = with_deadline(
            sqlx::query_scalar::<_, String>(query)
                .bind(drill.weight)
                .bind(drill.cable_length)
                .bind(drill.work_time)
                .bind(drill.chuck_diameter)
                .bind(drill.id)
                .bind(&drill.name)
                .fetch_optional(pool),
        )
        .await?;

        match name {
            Some(name) => {
                drill.name = name;
                tracing::debug!(drill_id = drill.id, "Updated drill");
                Ok(())
            }
            None => Err(DbError::EditConflict),
        }
    }

    /// Permanently delete a drill. Ids below 1 never reach the store.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), DbError> {
        if id < 1 {
            return Err(DbError::RecordNotFound);
        }

        let result = with_deadline(
            sqlx::query("DELETE FROM drills WHERE id = $1")
                .bind(id)
                .execute(pool),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::RecordNotFound);
        }
        tracing::debug!(drill_id = id, "Deleted drill");
        Ok(())
    }

    /// List drills matching the optional name and weight filters.
    ///
    /// - `name`: full-text match on the name; `""` disables the filter.
    /// - `weights`: exact match against any listed weight; `[]` disables it.
    ///
    /// Rows are ordered by the filter's sort column, then by `id`, and the
    /// pagination metadata comes from a window count over the whole match.
    pub async fn get_all(
        pool: &PgPool,
        weights: &[f32],
        name: &str,
        filters: &Filters,
    ) -> Result<(Vec<Drill>, Metadata), DbError> {
        let column = filters
            .sort_column()
            .ok_or_else(|| DbError::InvalidSort(filters.sort.clone()))?;
        let direction = filters.sort_direction().as_sql();

        let query = format!(
            "SELECT count(*) OVER() AS total_records, {COLUMNS}
             FROM drills
             WHERE (to_tsvector('simple', name) @@ plainto_tsquery('simple', $1) OR $1 = '')
               AND (weight = ANY($2) OR cardinality($2) = 0)
             ORDER BY {column} {direction}, id ASC
             LIMIT $3 OFFSET $4"
        );

        let rows = with_deadline(
            sqlx::query_as::<_, CountedDrill>(&query)
                .bind(name)
                .bind(weights)
                .bind(filters.limit())
                .bind(filters.offset())
                .fetch_all(pool),
        )
        .await?;

        let total_records = rows.first().map_or(0, |row| row.total_records);
        let drills = rows.into_iter().map(|row| row.drill).collect();
        let metadata = calculate_metadata(total_records, filters.page, filters.page_size);

        Ok((drills, metadata))
    }
}
