//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{BlogPost, PostId};
use crate::domain::repository::BlogPostRepository;
use crate::error::BlogResult;

/// PostgreSQL-backed blog repository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE metacharacters so the needle matches literally
fn escape_like(needle: &str) -> String {
    needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

impl BlogPostRepository for PgBlogRepository {
    async fn create(&self, post: &BlogPost) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO blog_posts (
                post_id,
                title,
                content,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, BlogPostRow>(
            r#"
            SELECT
                post_id,
                title,
                content,
                created_at,
                updated_at
            FROM blog_posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BlogPostRow::into_post))
    }

    async fn list_latest(&self) -> BlogResult<Vec<BlogPost>> {
        let rows = sqlx::query_as::<_, BlogPostRow>(
            r#"
            SELECT
                post_id,
                title,
                content,
                created_at,
                updated_at
            FROM blog_posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogPostRow::into_post).collect())
    }

    async fn update(&self, post: &BlogPost) -> BlogResult<()> {
        sqlx::query(
            r#"
            UPDATE blog_posts SET
                title = $2,
                content = $3,
                updated_at = $4
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> BlogResult<bool> {
        let deleted = sqlx::query("DELETE FROM blog_posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn search_by_title(&self, needle: &str) -> BlogResult<Vec<BlogPost>> {
        let pattern = format!("%{}%", escape_like(needle));

        let rows = sqlx::query_as::<_, BlogPostRow>(
            r#"
            SELECT
                post_id,
                title,
                content,
                created_at,
                updated_at
            FROM blog_posts
            WHERE title ILIKE $1 ESCAPE '\'
            ORDER BY created_at DESC
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogPostRow::into_post).collect())
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct BlogPostRow {
    post_id: Uuid,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BlogPostRow {
    fn into_post(self) -> BlogPost {
        BlogPost {
            post_id: PostId::from_uuid(self.post_id),
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
