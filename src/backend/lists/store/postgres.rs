//! PostgreSQL list store
//!
//! Runtime-checked queries against the schema in `migrations/`. Multi-row
//! writes run inside a transaction that is committed only after the last
//! statement succeeds; an early return drops the transaction, which rolls
//! it back.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use super::{ElementWrite, LikeState, ListStore, NewElement, NewList, StoreError, StoreResult};
use crate::shared::lists::{Element, TravelList};

/// List store backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgListStore {
    pool: PgPool,
}

impl PgListStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and run pending migrations
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

async fn insert_element(
    tx: &mut Transaction<'_, Postgres>,
    tlist: i64,
    element: NewElement,
) -> Result<Element, sqlx::Error> {
    sqlx::query_as::<_, Element>(
        r#"
        INSERT INTO elements (name, description, tlist)
        VALUES ($1, $2, $3)
        RETURNING id, name, description, tlist
        "#
    )
    .bind(element.name)
    .bind(element.description)
    .bind(tlist)
    .fetch_one(&mut **tx)
    .await
}

async fn lock_list(tx: &mut Transaction<'_, Postgres>, list_id: i64) -> StoreResult<()> {
    sqlx::query_scalar::<_, i64>("SELECT id FROM lists WHERE id = $1 FOR UPDATE")
        .bind(list_id)
        .fetch_optional(&mut **tx)
        .await?
        .map(|_| ())
        .ok_or_else(|| StoreError::not_found("List", list_id))
}

async fn has_like(tx: &mut Transaction<'_, Postgres>, list_id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM list_likes WHERE list_id = $1 AND user_id = $2)"
    )
    .bind(list_id)
    .bind(user_id)
    .fetch_one(&mut **tx)
    .await
}

async fn add_like(tx: &mut Transaction<'_, Postgres>, list_id: i64, user_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO list_likes (list_id, user_id)
        VALUES ($1, $2)
        ON CONFLICT (list_id, user_id) DO NOTHING
        "#
    )
    .bind(list_id)
    .bind(user_id)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn remove_like(tx: &mut Transaction<'_, Postgres>, list_id: i64, user_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM list_likes WHERE list_id = $1 AND user_id = $2")
        .bind(list_id)
        .bind(user_id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

async fn count_likes<'e, E>(executor: E, list_id: i64) -> Result<i64, sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM list_likes WHERE list_id = $1")
        .bind(list_id)
        .fetch_one(executor)
        .await
}

#[async_trait]
impl ListStore for PgListStore {
    async fn user_exists(&self, user_id: i64) -> StoreResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn create_list(&self, list: NewList, elements: Vec<NewElement>) -> StoreResult<(TravelList, Vec<Element>)> {
        let mut tx = self.pool.begin().await?;

        let list = sqlx::query_as::<_, TravelList>(
            r#"
            INSERT INTO lists (name, author, created_at)
            VALUES ($1, $2, NOW())
            RETURNING id, name, author, created_at
            "#
        )
        .bind(list.name)
        .bind(list.author)
        .fetch_one(&mut *tx)
        .await?;

        let mut created = Vec::with_capacity(elements.len());
        for element in elements {
            created.push(insert_element(&mut tx, list.id, element).await?);
        }

        tx.commit().await?;
        Ok((list, created))
    }

    async fn get_list(&self, list_id: i64) -> StoreResult<Option<TravelList>> {
        let list = sqlx::query_as::<_, TravelList>(
            r#"
            SELECT id, name, author, created_at
            FROM lists
            WHERE id = $1
            "#
        )
        .bind(list_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(list)
    }

    async fn list_elements(&self, list_id: i64) -> StoreResult<Vec<Element>> {
        let elements = sqlx::query_as::<_, Element>(
            r#"
            SELECT id, name, description, tlist
            FROM elements
            WHERE tlist = $1
            ORDER BY id
            "#
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(elements)
    }

    async fn get_element(&self, list_id: i64, element_id: i64) -> StoreResult<Option<Element>> {
        let element = sqlx::query_as::<_, Element>(
            r#"
            SELECT id, name, description, tlist
            FROM elements
            WHERE id = $1 AND tlist = $2
            "#
        )
        .bind(element_id)
        .bind(list_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(element)
    }

    async fn update_list(&self, list: TravelList, writes: Vec<ElementWrite>) -> StoreResult<(TravelList, Vec<Element>)> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, TravelList>(
            r#"
            UPDATE lists
            SET name = $1
            WHERE id = $2
            RETURNING id, name, author, created_at
            "#
        )
        .bind(&list.name)
        .bind(list.id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| StoreError::not_found("List", list.id))?;

        let mut results = Vec::with_capacity(writes.len());
        for write in writes {
            let element = match write {
                ElementWrite::Create(element) => insert_element(&mut tx, updated.id, element).await?,
                ElementWrite::Update(element) => sqlx::query_as::<_, Element>(
                    r#"
                    UPDATE elements
                    SET name = $1, description = $2
                    WHERE id = $3 AND tlist = $4
                    RETURNING id, name, description, tlist
                    "#
                )
                .bind(&element.name)
                .bind(&element.description)
                .bind(element.id)
                .bind(updated.id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| StoreError::not_found("Element", element.id))?,
            };
            results.push(element);
        }

        tx.commit().await?;
        Ok((updated, results))
    }

    async fn delete_list(&self, list_id: i64) -> StoreResult<bool> {
        // elements and list_likes rows go with ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM lists WHERE id = $1")
            .bind(list_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn toggle_like(&self, list_id: i64, user_id: i64) -> StoreResult<LikeState> {
        let mut tx = self.pool.begin().await?;

        // Row lock serializes toggles on the same list
        lock_list(&mut tx, list_id).await?;

        let liked = if has_like(&mut tx, list_id, user_id).await? {
            remove_like(&mut tx, list_id, user_id).await?;
            false
        } else {
            add_like(&mut tx, list_id, user_id).await?;
            true
        };
        let likes_count = count_likes(&mut *tx, list_id).await?;

        tx.commit().await?;
        Ok(LikeState { liked, likes_count })
    }

    async fn count_likes(&self, list_id: i64) -> StoreResult<i64> {
        Ok(count_likes(&self.pool, list_id).await?)
    }
}
