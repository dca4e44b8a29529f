use sqlx::SqliteConnection;

use crate::db_types::User;

pub async fn fetch_user(user_id: &str, conn: &mut SqliteConnection) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as("SELECT id, fcm_token FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_all(conn)
        .await?
        .pop();
    Ok(user)
}

/// Creates the user, or replaces the push token of an existing one.
pub async fn upsert_user(user: &User, conn: &mut SqliteConnection) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as(
        r#"
            INSERT INTO users (id, fcm_token) VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET fcm_token = excluded.fcm_token, updated_at = CURRENT_TIMESTAMP
            RETURNING id, fcm_token;
        "#,
    )
    .bind(&user.id)
    .bind(&user.fcm_token)
    .fetch_all(conn)
    .await?
    .pop()
    .ok_or(sqlx::Error::RowNotFound)?;
    Ok(user)
}
