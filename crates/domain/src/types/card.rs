//! Cards on file for a customer

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::enums::{CardBrand, CardPrepaidType};

/// Payment card stored on file for a customer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    /// First six digits of the card number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_brand: Option<CardBrand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepaid_type: Option<CardPrepaidType>,
}

/// Payload for storing a new card on a customer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCardRequest {
    /// Single-use nonce produced by the payment form.
    pub card_nonce: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,
    /// Buyer verification token, when SCA was performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_token: Option<String>,
}

impl CreateCardRequest {
    pub fn new(card_nonce: impl Into<String>) -> Self {
        Self {
            card_nonce: card_nonce.into(),
            billing_address: None,
            cardholder_name: None,
            verification_token: None,
        }
    }

    pub fn billing_address(mut self, address: Address) -> Self {
        self.billing_address = Some(address);
        self
    }

    pub fn cardholder_name(mut self, name: impl Into<String>) -> Self {
        self.cardholder_name = Some(name.into());
        self
    }

    pub fn verification_token(mut self, token: impl Into<String>) -> Self {
        self.verification_token = Some(token.into());
        self
    }
}
