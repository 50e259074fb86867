use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::levels::models::MembershipLevel;

/// Read access to membership levels
#[async_trait]
pub trait LevelRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<MembershipLevel>>;

    async fn list_all(&self) -> Result<Vec<MembershipLevel>>;
}

/// Levels from the Paid Memberships Pro table (`<prefix>pmpro_membership_levels`)
pub struct MySqlLevelRepository {
    pool: MySqlPool,
    levels_table: String,
}

impl MySqlLevelRepository {
    /// `table_prefix` must already be validated (see `DatabaseConfig::validate`)
    pub fn new(pool: MySqlPool, table_prefix: &str) -> Self {
        Self {
            pool,
            levels_table: format!("{}pmpro_membership_levels", table_prefix),
        }
    }
}

#[async_trait]
impl LevelRepository for MySqlLevelRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<MembershipLevel>> {
        let sql = format!(
            r#"
            SELECT CAST(id AS SIGNED) AS id, name, initial_payment
            FROM {}
            WHERE id = ?
            "#,
            self.levels_table
        );

        let level = sqlx::query_as::<_, MembershipLevel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(level)
    }

    async fn list_all(&self) -> Result<Vec<MembershipLevel>> {
        let sql = format!(
            r#"
            SELECT CAST(id AS SIGNED) AS id, name, initial_payment
            FROM {}
            ORDER BY id
            "#,
            self.levels_table
        );

        let levels = sqlx::query_as::<_, MembershipLevel>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(levels)
    }
}
