//! Cards on file, scoped to one customer

use std::sync::Arc;

use reqwest::Method;
use squarely_domain::{Card, CreateCardRequest};
use tracing::{info, instrument};

use super::errors::ApiError;
use crate::http::{json_body, Route, Transport};

/// Client for `/v2/customers/{customer_id}/cards`
#[derive(Debug, Clone)]
pub struct CardsClient {
    transport: Arc<Transport>,
    customer_id: String,
}

impl CardsClient {
    pub(crate) fn new(transport: Arc<Transport>, customer_id: String) -> Self {
        Self { transport, customer_id }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Store a card from a payment-form nonce.
    #[instrument(skip(self, request), fields(customer_id = %self.customer_id))]
    pub async fn create(&self, request: CreateCardRequest) -> Result<Card, ApiError> {
        let route = Route::format(
            "customers/{customer_id}/cards",
            &[("customer_id", self.customer_id.as_str())],
        )?;
        let body = json_body(&request)?;

        let card: Card = self
            .transport
            .send(Method::POST, &route, &[], Some(&body))
            .await?
            .into_record("card")?;

        info!(card_id = %card.id, "card created");
        Ok(card)
    }

    #[instrument(skip(self), fields(customer_id = %self.customer_id))]
    pub async fn delete(&self, card_id: &str) -> Result<(), ApiError> {
        let route = Route::format(
            "customers/{customer_id}/cards/{card_id}",
            &[("customer_id", self.customer_id.as_str()), ("card_id", card_id)],
        )?;

        self.transport.send(Method::DELETE, &route, &[], None).await?.into_empty()?;

        info!(card_id, "card deleted");
        Ok(())
    }
}
