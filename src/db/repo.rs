//! SQLite-backed deal repository.

use crate::db::{DealStore, StoreError};
use crate::domain::{Deal, DealId};
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use tracing::warn;

/// Repository for deal records. Each record is stored verbatim as JSON.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }
}

fn decode_row(id: &str, content: &str) -> Option<Deal> {
    match serde_json::from_str::<Deal>(content) {
        Ok(deal) => Some(deal),
        Err(e) => {
            warn!(deal_id = %id, error = %e, "Skipping deal with unreadable content");
            None
        }
    }
}

#[async_trait]
impl DealStore for Repository {
    async fn upsert_deal(&self, deal: &Deal) -> Result<(), StoreError> {
        let content = serde_json::to_string(deal)?;

        sqlx::query(
            r#"
            INSERT INTO deals (id, content, last_modified_ms)
            VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                content = excluded.content,
                last_modified_ms = excluded.last_modified_ms
            "#,
        )
        .bind(deal.id.as_str())
        .bind(content)
        .bind(deal.last_modified_ms.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_deal(&self, id: &DealId) -> Result<Option<Deal>, StoreError> {
        let row = sqlx::query("SELECT id, content FROM deals WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.and_then(|row| {
            let id: String = row.get("id");
            let content: String = row.get("content");
            decode_row(&id, &content)
        }))
    }

    async fn list_deals(&self) -> Result<Vec<Deal>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, content
            FROM deals
            ORDER BY last_modified_ms DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .filter_map(|row| {
                let id: String = row.get("id");
                let content: String = row.get("content");
                decode_row(&id, &content)
            })
            .collect())
    }

    async fn delete_deal(&self, id: &DealId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM deals WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_deals(&self) -> Result<i64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM deals")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get::<i64, _>("n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use crate::domain::TimeMs;
    use tempfile::TempDir;

    async fn setup() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir
            .path()
            .join("test.db")
            .to_string_lossy()
            .to_string();
        let pool = init_db(&db_path).await.expect("init_db failed");
        (Repository::new(pool), temp_dir)
    }

    fn deal(id: &str, modified: i64, city: &str) -> Deal {
        Deal {
            id: DealId::new(id),
            last_modified_ms: TimeMs::new(modified),
            city: city.to_string(),
            ..Deal::new_draft()
        }
    }

    #[tokio::test]
    async fn test_upsert_and_get_roundtrip() {
        let (repo, _temp) = setup().await;
        let d = deal("a", 1000, "Campinas");
        repo.upsert_deal(&d).await.unwrap();

        let loaded = repo.get_deal(&DealId::new("a")).await.unwrap();
        assert_eq!(loaded, Some(d));
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing() {
        let (repo, _temp) = setup().await;
        repo.upsert_deal(&deal("a", 1000, "Campinas")).await.unwrap();
        repo.upsert_deal(&deal("a", 2000, "Santos")).await.unwrap();

        assert_eq!(repo.count_deals().await.unwrap(), 1);
        let loaded = repo.get_deal(&DealId::new("a")).await.unwrap().unwrap();
        assert_eq!(loaded.city, "Santos");
        assert_eq!(loaded.last_modified_ms, TimeMs::new(2000));
    }

    #[tokio::test]
    async fn test_list_orders_by_last_modified_desc() {
        let (repo, _temp) = setup().await;
        repo.upsert_deal(&deal("old", 1000, "A")).await.unwrap();
        repo.upsert_deal(&deal("new", 3000, "B")).await.unwrap();
        repo.upsert_deal(&deal("mid", 2000, "C")).await.unwrap();

        let ids: Vec<String> = repo
            .list_deals()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id.0)
            .collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let (repo, _temp) = setup().await;
        repo.upsert_deal(&deal("a", 1000, "A")).await.unwrap();

        assert!(repo.delete_deal(&DealId::new("a")).await.unwrap());
        assert!(!repo.delete_deal(&DealId::new("a")).await.unwrap());
        assert_eq!(repo.get_deal(&DealId::new("a")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unreadable_rows_are_skipped() {
        let (repo, _temp) = setup().await;
        repo.upsert_deal(&deal("good", 1000, "A")).await.unwrap();
        sqlx::query("INSERT INTO deals (id, content, last_modified_ms) VALUES ('bad', 'not json', 5)")
            .execute(&repo.pool)
            .await
            .unwrap();

        let deals = repo.list_deals().await.unwrap();
        assert_eq!(deals.len(), 1);
        assert_eq!(deals[0].id, DealId::new("good"));
        assert_eq!(repo.get_deal(&DealId::new("bad")).await.unwrap(), None);
    }
}
