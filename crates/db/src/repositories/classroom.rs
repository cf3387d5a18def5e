use crate::models::DbClassroom;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_classroom_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbClassroom>> {
    let classroom = sqlx::query_as::<_, DbClassroom>(
        r#"
        SELECT id, room_no, capacity, room_type
        FROM classrooms
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(classroom)
}

pub async fn get_classroom_by_room_no(
    pool: &Pool<Postgres>,
    room_no: &str,
) -> Result<Option<DbClassroom>> {
    let classroom = sqlx::query_as::<_, DbClassroom>(
        r#"
        SELECT id, room_no, capacity, room_type
        FROM classrooms
        WHERE room_no = $1
        "#,
    )
    .bind(room_no)
    .fetch_optional(pool)
    .await?;

    Ok(classroom)
}

pub async fn list_classrooms(
    pool: &Pool<Postgres>,
    room_type: Option<&str>,
) -> Result<Vec<DbClassroom>> {
    let classrooms = sqlx::query_as::<_, DbClassroom>(
        r#"
        SELECT id, room_no, capacity, room_type
        FROM classrooms
        WHERE ($1::varchar IS NULL OR room_type = $1)
        ORDER BY room_no
        "#,
    )
    .bind(room_type)
    .fetch_all(pool)
    .await?;

    Ok(classrooms)
}

pub async fn create_classroom(
    pool: &Pool<Postgres>,
    room_no: &str,
    capacity: Option<i32>,
    room_type: &str,
) -> Result<DbClassroom> {
    let id = Uuid::new_v4();

    tracing::debug!("Creating classroom: id={}, room_no={}, type={}", id, room_no, room_type);

    let classroom = sqlx::query_as::<_, DbClassroom>(
        r#"
        INSERT INTO classrooms (id, room_no, capacity, room_type)
        VALUES ($1, $2, $3, $4)
        RETURNING id, room_no, capacity, room_type
        "#,
    )
    .bind(id)
    .bind(room_no)
    .bind(capacity)
    .bind(room_type)
    .fetch_one(pool)
    .await?;

    Ok(classroom)
}
