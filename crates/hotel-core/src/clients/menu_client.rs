//! # Menu Client

use super::recover_error;
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, Filter, FrameworkError, ResourceClient};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_menu_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!("Sending create to menu actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    pub async fn list_menu(&self) -> Result<Vec<MenuItem>, MenuError> {
        self.list(Filter::all()).await
    }

    pub async fn list_by_category(&self, category: &str) -> Result<Vec<MenuItem>, MenuError> {
        let category = category.to_owned();
        self.list(Filter::new(move |item: &MenuItem| item.category == category))
            .await
    }

    /// Items that can currently be ordered.
    pub async fn list_available(&self) -> Result<Vec<MenuItem>, MenuError> {
        self.list(Filter::new(|item: &MenuItem| item.is_available))
            .await
    }

    /// Distinct categories, sorted.
    pub async fn categories(&self) -> Result<Vec<String>, MenuError> {
        let items = self.list_menu().await?;
        Ok(items
            .into_iter()
            .map(|item| item.category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_error(e, MenuError::NotFound, MenuError::ActorCommunicationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::MockClient;
    use rust_decimal::Decimal;

    fn item(id: u32, name: &str, category: &str) -> MenuItem {
        MenuItem {
            id: MenuItemId(id),
            name: name.into(),
            description: String::new(),
            category: category.into(),
            price: Decimal::from(4),
            is_available: true,
        }
    }

    #[tokio::test]
    async fn test_categories_are_distinct_and_sorted() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_list().return_ok(vec![
            item(1, "Soup", "starters"),
            item(2, "Steak", "mains"),
            item(3, "Salad", "starters"),
        ]);
        let client = MenuClient::new(mock.client());

        assert_eq!(client.categories().await.unwrap(), vec!["mains", "starters"]);
        mock.verify();
    }
}
