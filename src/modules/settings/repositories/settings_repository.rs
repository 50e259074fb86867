use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::settings::models::fee_settings::OPTION_PREFIX;
use crate::modules::settings::models::{option_name, FeeSettings, FEE_SETTING_KEYS};

/// Read/write access to the named fee settings
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Current settings, with defaults for anything never saved
    async fn load_fee_settings(&self) -> Result<FeeSettings>;

    async fn save_fee_settings(&self, settings: &FeeSettings) -> Result<()>;
}

/// Settings stored as WordPress options (`<prefix>options`)
pub struct MySqlSettingsRepository {
    pool: MySqlPool,
    options_table: String,
}

impl MySqlSettingsRepository {
    /// `table_prefix` must already be validated (see `DatabaseConfig::validate`)
    pub fn new(pool: MySqlPool, table_prefix: &str) -> Self {
        Self {
            pool,
            options_table: format!("{}options", table_prefix),
        }
    }
}

#[async_trait]
impl SettingsRepository for MySqlSettingsRepository {
    async fn load_fee_settings(&self) -> Result<FeeSettings> {
        let placeholders = vec!["?"; FEE_SETTING_KEYS.len()].join(", ");
        let sql = format!(
            "SELECT option_name, option_value FROM {} WHERE option_name IN ({})",
            self.options_table, placeholders
        );

        let mut query = sqlx::query_as::<_, (String, String)>(&sql);
        for key in FEE_SETTING_KEYS {
            query = query.bind(option_name(key));
        }

        let rows = query.fetch_all(&self.pool).await?;

        let options: HashMap<String, String> = rows
            .into_iter()
            .filter_map(|(name, value)| {
                name.strip_prefix(OPTION_PREFIX)
                    .map(|key| (key.to_string(), value))
            })
            .collect();

        Ok(FeeSettings::from_options(&options))
    }

    async fn save_fee_settings(&self, settings: &FeeSettings) -> Result<()> {
        let sql = format!(
            r#"
            INSERT INTO {} (option_name, option_value, autoload)
            VALUES (?, ?, 'yes')
            ON DUPLICATE KEY UPDATE option_value = VALUES(option_value)
            "#,
            self.options_table
        );

        let mut tx = self.pool.begin().await?;

        for (key, value) in settings.to_options() {
            sqlx::query(&sql)
                .bind(option_name(key))
                .bind(value)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
