//! Customer group operations

use std::sync::Arc;

use futures::Stream;
use reqwest::Method;
use serde_json::json;
use squarely_domain::{Group, GroupFields, Page};
use tracing::{info, instrument};
use uuid::Uuid;

use super::errors::ApiError;
use super::pagination::paginate;
use crate::http::{Route, Transport};

const GROUP_KEY: &str = "group";

/// Client for `/v2/customers/groups`
#[derive(Debug, Clone)]
pub struct GroupsClient {
    transport: Arc<Transport>,
}

impl GroupsClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, cursor: Option<&str>) -> Result<Page<Group>, ApiError> {
        let query: Vec<(&str, String)> =
            cursor.map(|cursor| ("cursor", cursor.to_string())).into_iter().collect();

        self.transport
            .send(Method::GET, &Route::fixed("customers/groups"), &query, None)
            .await?
            .into_page("groups")
    }

    pub fn list_all(&self) -> impl Stream<Item = Result<Group, ApiError>> + Send + 'static {
        let client = self.clone();
        paginate(None, move |cursor| {
            let client = client.clone();
            async move { client.list(cursor.as_deref()).await }
        })
    }

    #[instrument(skip(self))]
    pub async fn create(&self, name: &str) -> Result<Group, ApiError> {
        self.create_with_key(name, &Uuid::new_v4().to_string()).await
    }

    #[instrument(skip(self))]
    pub async fn create_with_key(
        &self,
        name: &str,
        idempotency_key: &str,
    ) -> Result<Group, ApiError> {
        let body = json!({
            "idempotency_key": idempotency_key,
            "group": GroupFields::new(name),
        });

        let group: Group = self
            .transport
            .send(Method::POST, &Route::fixed("customers/groups"), &[], Some(&body))
            .await?
            .into_record(GROUP_KEY)?;

        info!(group_id = %group.id, "group created");
        Ok(group)
    }

    #[instrument(skip(self))]
    pub async fn retrieve(&self, group_id: &str) -> Result<Group, ApiError> {
        self.transport
            .send(Method::GET, &group_route(group_id)?, &[], None)
            .await?
            .into_record(GROUP_KEY)
    }

    /// Rename a group.
    #[instrument(skip(self))]
    pub async fn update(&self, group_id: &str, name: &str) -> Result<Group, ApiError> {
        let body = json!({ "group": GroupFields::new(name) });

        let group: Group = self
            .transport
            .send(Method::PUT, &group_route(group_id)?, &[], Some(&body))
            .await?
            .into_record(GROUP_KEY)?;

        info!(group_id = %group.id, "group updated");
        Ok(group)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, group_id: &str) -> Result<(), ApiError> {
        self.transport
            .send(Method::DELETE, &group_route(group_id)?, &[], None)
            .await?
            .into_empty()?;

        info!(group_id, "group deleted");
        Ok(())
    }
}

fn group_route(group_id: &str) -> Result<Route, ApiError> {
    Route::format("customers/groups/{group_id}", &[("group_id", group_id)])
}
