use crate::models::DbNotification;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Appends a notification row. Audience is (department, batch); pass both
/// as `None` for a broadcast.
pub async fn create_notification(
    pool: &Pool<Postgres>,
    department_id: Option<Uuid>,
    batch: Option<&str>,
    title: &str,
    content: &str,
    notification_type: &str,
) -> Result<DbNotification> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating notification: id={}, type={}, title={}",
        id,
        notification_type,
        title
    );

    let notification = sqlx::query_as::<_, DbNotification>(
        r#"
        INSERT INTO notifications
            (id, department_id, batch, title, content, notification_type)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, department_id, batch, title, content, notification_type, created_at
        "#,
    )
    .bind(id)
    .bind(department_id)
    .bind(batch)
    .bind(title)
    .bind(content)
    .bind(notification_type)
    .fetch_one(pool)
    .await?;

    Ok(notification)
}

/// Broadcast rows plus rows addressed to the given department and batch,
/// newest first.
pub async fn list_notifications(
    pool: &Pool<Postgres>,
    department_id: Option<Uuid>,
    batch: Option<&str>,
    limit: i64,
) -> Result<Vec<DbNotification>> {
    let notifications = sqlx::query_as::<_, DbNotification>(
        r#"
        SELECT id, department_id, batch, title, content, notification_type, created_at
        FROM notifications
        WHERE (department_id IS NULL AND batch IS NULL)
           OR (department_id = $1 AND batch = $2)
        ORDER BY created_at DESC
        LIMIT $3
        "#,
    )
    .bind(department_id)
    .bind(batch)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(notifications)
}
