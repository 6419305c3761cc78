//! Table bootstrap for the primary store

use sqlx::PgPool;
use tracing::info;

const CREATE_APPEALS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS appeals (
        id              TEXT PRIMARY KEY,
        username        TEXT NOT NULL,
        discord_id      TEXT NOT NULL,
        email           TEXT NOT NULL,
        ban_reason      TEXT NOT NULL,
        appeal_reason   TEXT NOT NULL,
        additional_info TEXT,
        submitted_at    TIMESTAMPTZ NOT NULL,
        status          TEXT NOT NULL DEFAULT 'pending'
                        CHECK (status IN ('pending', 'approved', 'denied'))
    )
";

const CREATE_SUBMITTED_AT_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_appeals_submitted_at ON appeals (submitted_at DESC)
";

/// Create the `appeals` table and its index if they do not exist
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_APPEALS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_SUBMITTED_AT_INDEX).execute(pool).await?;
    info!("Appeals schema ready");
    Ok(())
}
