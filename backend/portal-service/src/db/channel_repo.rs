use super::ChannelDirectory;
use crate::error::{AppError, Result};
use crate::models::{Channel, SocialProfile};
use sqlx::PgPool;
use tracing::debug;

const CHANNEL_COLUMNS: &str = r#"
    SELECT u.username AS owner_identity,
           c.en_vivo AS is_live,
           c.hls_url AS explicit_playback_url
    FROM core_canaltransmision c
    JOIN auth_user u ON u.id = c.usuario_id
"#;

/// Channel directory backed by the panel's PostgreSQL database
#[derive(Clone)]
pub struct PgChannelDirectory {
    pool: PgPool,
}

impl PgChannelDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl ChannelDirectory for PgChannelDirectory {
    async fn find_exact(&self, identity: &str) -> Result<Option<Channel>> {
        let sql = format!("{CHANNEL_COLUMNS} WHERE u.username = $1 LIMIT 1");
        let channel = sqlx::query_as::<_, Channel>(&sql)
            .bind(identity)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        debug!(channel = identity, found = channel.is_some(), "exact channel lookup");
        Ok(channel)
    }

    async fn find_case_insensitive(&self, identity: &str) -> Result<Option<Channel>> {
        let sql = format!(
            "{CHANNEL_COLUMNS} WHERE UPPER(u.username) = UPPER($1) ORDER BY c.id LIMIT 1"
        );
        let channel = sqlx::query_as::<_, Channel>(&sql)
            .bind(identity)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        debug!(
            query = identity,
            found = channel.is_some(),
            "case-insensitive channel lookup"
        );
        Ok(channel)
    }

    async fn social_profile(&self, identity: &str) -> Result<Option<SocialProfile>> {
        let profile = sqlx::query_as::<_, SocialProfile>(
            r#"
            SELECT u.username AS owner_identity,
                   p.bio, p.website_url, p.instagram_url, p.twitter_url, p.youtube_url
            FROM core_perfilsocial p
            JOIN auth_user u ON u.id = p.usuario_id
            WHERE u.username = $1
            LIMIT 1
            "#,
        )
        .bind(identity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(profile)
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("health check failed: {}", e)))?;
        Ok(())
    }
}
