use super::email::{Email, EmailRepository};
use crate::config::SearchConfig;
use crate::constants::tables;
use crate::error::{Result, SearchError};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::warn;

#[derive(Debug, FromRow)]
struct EmailRow {
    id: i64,
    name: String,
    variant_parent_id: Option<i64>,
    translation_parent_id: Option<i64>,
}

/// [`EmailRepository`] over the application's `emails` table
#[derive(Debug, Clone)]
pub struct PgEmailRepository {
    pool: PgPool,
    emails_table: String,
}

impl PgEmailRepository {
    pub fn new(pool: PgPool, config: &SearchConfig) -> Self {
        Self {
            pool,
            emails_table: config.table(tables::EMAILS),
        }
    }

    async fn children_of(&self, column: &str, id: i64) -> Result<Vec<i64>> {
        let sql = format!(
            "SELECT id FROM {} WHERE {column} = $1 ORDER BY id",
            self.emails_table
        );
        let ids = sqlx::query_scalar::<_, i64>(&sql)
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(lookup_failure)?;
        Ok(ids)
    }
}

fn lookup_failure(err: sqlx::Error) -> SearchError {
    warn!(error = %err, "Email lookup failed");
    SearchError::LookupFailure(err.to_string())
}

#[async_trait]
impl EmailRepository for PgEmailRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Email>> {
        let sql = format!(
            "SELECT id, name, variant_parent_id, translation_parent_id FROM {} WHERE id = $1",
            self.emails_table
        );
        let row = sqlx::query_as::<_, EmailRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(lookup_failure)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let variant_children = self.children_of("variant_parent_id", row.id).await?;
        let translation_children = self.children_of("translation_parent_id", row.id).await?;

        Ok(Some(Email {
            id: row.id,
            name: row.name,
            variant_parent_id: row.variant_parent_id,
            variant_children,
            translation_parent_id: row.translation_parent_id,
            translation_children,
        }))
    }
}
