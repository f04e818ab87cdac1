//! Customer directory operations
//!
//! Every call is a single round trip against `/v2/customers`. Non-success
//! statuses are classified by [`ApiError::from_response`]; a missing customer
//! is always [`ApiError::NotFound`], including on delete.

use std::sync::Arc;

use futures::Stream;
use reqwest::Method;
use serde_json::Value;
use squarely_domain::{Customer, CustomerFields, CustomerSearch, ListCustomersParams, Page};
use tracing::{info, instrument};
use uuid::Uuid;

use super::cards::CardsClient;
use super::errors::ApiError;
use super::pagination::paginate;
use crate::http::{json_body, Route, Transport};

const CUSTOMER_KEY: &str = "customer";
const CUSTOMERS_KEY: &str = "customers";

/// Client for `/v2/customers`
#[derive(Debug, Clone)]
pub struct CustomersClient {
    transport: Arc<Transport>,
}

impl CustomersClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List one page of customers.
    ///
    /// # Errors
    /// Network failures and non-success statuses.
    #[instrument(skip(self, params), fields(cursor = params.cursor.as_deref()))]
    pub async fn list(&self, params: &ListCustomersParams) -> Result<Page<Customer>, ApiError> {
        self.transport
            .send(Method::GET, &Route::fixed("customers"), &params.to_query(), None)
            .await?
            .into_page(CUSTOMERS_KEY)
    }

    /// Stream every customer, following cursors from `params.cursor`.
    pub fn list_all(
        &self,
        params: ListCustomersParams,
    ) -> impl Stream<Item = Result<Customer, ApiError>> + Send + 'static {
        let client = self.clone();
        let first = params.cursor.clone();
        paginate(first, move |cursor| {
            let client = client.clone();
            let params = ListCustomersParams { cursor, ..params.clone() };
            async move { client.list(&params).await }
        })
    }

    /// Create a customer with a freshly generated idempotency key.
    #[instrument(skip(self, fields))]
    pub async fn create(&self, fields: CustomerFields) -> Result<Customer, ApiError> {
        self.create_with_key(fields, Uuid::new_v4().to_string()).await
    }

    /// Create a customer. Repeating a request with the same key returns the
    /// customer created the first time.
    #[instrument(skip(self, fields, idempotency_key))]
    pub async fn create_with_key(
        &self,
        fields: CustomerFields,
        idempotency_key: impl Into<String> + Send,
    ) -> Result<Customer, ApiError> {
        let mut body = json_body(&fields)?;
        if let Value::Object(map) = &mut body {
            map.insert("idempotency_key".into(), Value::String(idempotency_key.into()));
        }

        let customer: Customer = self
            .transport
            .send(Method::POST, &Route::fixed("customers"), &[], Some(&body))
            .await?
            .into_record(CUSTOMER_KEY)?;

        info!(customer_id = %customer.id, "customer created");
        Ok(customer)
    }

    #[instrument(skip(self))]
    pub async fn retrieve(&self, customer_id: &str) -> Result<Customer, ApiError> {
        self.transport
            .send(Method::GET, &customer_route(customer_id)?, &[], None)
            .await?
            .into_record(CUSTOMER_KEY)
    }

    /// Update the fields that are set. Setting `version` makes the server
    /// reject the update with [`ApiError::Conflict`] if the profile changed.
    #[instrument(skip(self, fields))]
    pub async fn update(
        &self,
        customer_id: &str,
        fields: CustomerFields,
    ) -> Result<Customer, ApiError> {
        let body = json_body(&fields)?;
        let customer: Customer = self
            .transport
            .send(Method::PUT, &customer_route(customer_id)?, &[], Some(&body))
            .await?
            .into_record(CUSTOMER_KEY)?;

        info!(customer_id = %customer.id, "customer updated");
        Ok(customer)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, customer_id: &str) -> Result<(), ApiError> {
        self.transport
            .send(Method::DELETE, &customer_route(customer_id)?, &[], None)
            .await?
            .into_empty()?;

        info!(customer_id, "customer deleted");
        Ok(())
    }

    /// Run one page of a search.
    #[instrument(skip(self, search), fields(cursor = search.cursor()))]
    pub async fn search(&self, search: &CustomerSearch) -> Result<Page<Customer>, ApiError> {
        let body = json_body(search)?;
        self.transport
            .send(Method::POST, &Route::fixed("customers/search"), &[], Some(&body))
            .await?
            .into_page(CUSTOMERS_KEY)
    }

    /// Stream every customer matching `search`.
    pub fn search_all(
        &self,
        search: CustomerSearch,
    ) -> impl Stream<Item = Result<Customer, ApiError>> + Send + 'static {
        let client = self.clone();
        let first = search.cursor().map(str::to_string);
        paginate(first, move |cursor| {
            let client = client.clone();
            let search = match cursor {
                Some(cursor) => search.with_cursor(cursor),
                None => search.clone(),
            };
            async move { client.search(&search).await }
        })
    }

    #[instrument(skip(self))]
    pub async fn add_to_group(&self, customer_id: &str, group_id: &str) -> Result<(), ApiError> {
        self.transport
            .send(Method::PUT, &membership_route(customer_id, group_id)?, &[], None)
            .await?
            .into_empty()?;

        info!(customer_id, group_id, "customer added to group");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove_from_group(
        &self,
        customer_id: &str,
        group_id: &str,
    ) -> Result<(), ApiError> {
        self.transport
            .send(Method::DELETE, &membership_route(customer_id, group_id)?, &[], None)
            .await?
            .into_empty()?;

        info!(customer_id, group_id, "customer removed from group");
        Ok(())
    }

    /// Cards on file for `customer_id`.
    pub fn cards(&self, customer_id: impl Into<String>) -> CardsClient {
        CardsClient::new(self.transport.clone(), customer_id.into())
    }
}

fn customer_route(customer_id: &str) -> Result<Route, ApiError> {
    Route::format("customers/{customer_id}", &[("customer_id", customer_id)])
}

fn membership_route(customer_id: &str, group_id: &str) -> Result<Route, ApiError> {
    Route::format(
        "customers/{customer_id}/groups/{group_id}",
        &[("customer_id", customer_id), ("group_id", group_id)],
    )
}
