//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{RecordId, UserId};
use sqlx::PgPool;

use crate::domain::entities::ArmstrongRecord;
use crate::domain::repository::ArmstrongRepository;
use crate::error::ArmstrongResult;

/// PostgreSQL-backed record store (`armstrong_numbers` table)
#[derive(Clone)]
pub struct PgArmstrongRepository {
    pool: PgPool,
}

impl PgArmstrongRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ArmstrongRepository for PgArmstrongRepository {
    async fn insert(&self, user_id: UserId, number: i64) -> ArmstrongResult<ArmstrongRecord> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            INSERT INTO armstrong_numbers (user_id, number)
            VALUES ($1, $2)
            RETURNING id, user_id, number, created_at
            "#,
        )
        .bind(user_id.get())
        .bind(number)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list_for_user(&self, user_id: UserId) -> ArmstrongResult<Vec<ArmstrongRecord>> {
        let rows = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT
                id,
                user_id,
                number,
                created_at
            FROM armstrong_numbers
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ArmstrongRecord::from).collect())
    }
}

#[derive(sqlx::FromRow)]
struct RecordRow {
    id: i64,
    user_id: i64,
    number: i64,
    created_at: DateTime<Utc>,
}

impl From<RecordRow> for ArmstrongRecord {
    fn from(row: RecordRow) -> Self {
        Self {
            id: RecordId::new(row.id),
            user_id: UserId::new(row.user_id),
            number: row.number,
            created_at: row.created_at,
        }
    }
}
