//! In-memory deal store for tests and ephemeral runs.

use super::{DealStore, StoreError};
use crate::domain::{Deal, DealId};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Deal store that keeps everything in a map.
#[derive(Debug, Default)]
pub struct InMemoryDealStore {
    deals: RwLock<HashMap<DealId, Deal>>,
}

impl InMemoryDealStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DealStore for InMemoryDealStore {
    async fn upsert_deal(&self, deal: &Deal) -> Result<(), StoreError> {
        self.deals
            .write()
            .await
            .insert(deal.id.clone(), deal.clone());
        Ok(())
    }

    async fn get_deal(&self, id: &DealId) -> Result<Option<Deal>, StoreError> {
        Ok(self.deals.read().await.get(id).cloned())
    }

    async fn list_deals(&self) -> Result<Vec<Deal>, StoreError> {
        let mut deals: Vec<Deal> = self.deals.read().await.values().cloned().collect();
        deals.sort_by(|a, b| {
            b.last_modified_ms
                .cmp(&a.last_modified_ms)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(deals)
    }

    async fn delete_deal(&self, id: &DealId) -> Result<bool, StoreError> {
        Ok(self.deals.write().await.remove(id).is_some())
    }

    async fn count_deals(&self) -> Result<i64, StoreError> {
        Ok(self.deals.read().await.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeMs;

    fn deal(id: &str, modified: i64) -> Deal {
        Deal {
            id: DealId::new(id),
            last_modified_ms: TimeMs::new(modified),
            ..Deal::new_draft()
        }
    }

    #[tokio::test]
    async fn test_upserted_deal_is_visible() {
        let store = InMemoryDealStore::new();
        store.upsert_deal(&deal("a", 1)).await.unwrap();
        let loaded = store.get_deal(&DealId::new("a")).await.unwrap();
        assert!(loaded.is_some());
        assert_eq!(store.count_deals().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_is_most_recent_first() {
        let store = InMemoryDealStore::new();
        store.upsert_deal(&deal("a", 10)).await.unwrap();
        store.upsert_deal(&deal("b", 30)).await.unwrap();
        store.upsert_deal(&deal("c", 20)).await.unwrap();

        let ids: Vec<String> = store
            .list_deals()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id.0)
            .collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[tokio::test]
    async fn test_delete_reports_presence() {
        let store = InMemoryDealStore::new();
        store.upsert_deal(&deal("a", 10)).await.unwrap();
        assert!(store.delete_deal(&DealId::new("a")).await.unwrap());
        assert!(!store.delete_deal(&DealId::new("a")).await.unwrap());
        assert_eq!(store.count_deals().await.unwrap(), 0);
    }
}
