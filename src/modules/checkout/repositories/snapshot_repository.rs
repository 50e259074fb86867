use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::checkout::models::RegistrationSnapshot;

pub const META_CALCULATED_AMOUNT: &str = "dssa_calculated_amount";
pub const META_WITHIN_THRESHOLD: &str = "dssa_within_prorata_threshold";
pub const META_LEGACY_MEMBER: &str = "dssa_is_legacy_member";
pub const META_PAYMENT_STATUS: &str = "dssa_payment_status";
pub const META_RENEWAL_DATE: &str = "dssa_renewal_date";

/// Persists the pricing snapshot taken when a member registers
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    async fn save(&self, snapshot: &RegistrationSnapshot) -> Result<()>;
}

/// Snapshot stored as WordPress user meta (`<prefix>usermeta`)
pub struct MySqlSnapshotRepository {
    pool: MySqlPool,
    usermeta_table: String,
}

impl MySqlSnapshotRepository {
    /// `table_prefix` must already be validated (see `DatabaseConfig::validate`)
    pub fn new(pool: MySqlPool, table_prefix: &str) -> Self {
        Self {
            pool,
            usermeta_table: format!("{}usermeta", table_prefix),
        }
    }
}

/// Meta rows written for a snapshot, with WordPress-style flag values
pub fn snapshot_meta(snapshot: &RegistrationSnapshot) -> Vec<(&'static str, String)> {
    let flag = |value: bool| (if value { "1" } else { "0" }).to_string();

    vec![
        (META_CALCULATED_AMOUNT, snapshot.calculated_amount.to_string()),
        (META_WITHIN_THRESHOLD, flag(snapshot.within_threshold)),
        (META_LEGACY_MEMBER, flag(snapshot.legacy_member)),
        (META_PAYMENT_STATUS, snapshot.payment_status.as_str().to_string()),
        (
            META_RENEWAL_DATE,
            snapshot.renewal_date.format("%Y-%m-%d").to_string(),
        ),
    ]
}

#[async_trait]
impl SnapshotRepository for MySqlSnapshotRepository {
    async fn save(&self, snapshot: &RegistrationSnapshot) -> Result<()> {
        let delete_sql = format!(
            "DELETE FROM {} WHERE user_id = ? AND meta_key = ?",
            self.usermeta_table
        );
        let insert_sql = format!(
            "INSERT INTO {} (user_id, meta_key, meta_value) VALUES (?, ?, ?)",
            self.usermeta_table
        );

        // usermeta has no unique key on (user_id, meta_key)
        let mut tx = self.pool.begin().await?;

        for (key, value) in snapshot_meta(snapshot) {
            sqlx::query(&delete_sql)
                .bind(snapshot.user_id)
                .bind(key)
                .execute(&mut *tx)
                .await?;

            sqlx::query(&insert_sql)
                .bind(snapshot.user_id)
                .bind(key)
                .bind(value)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
