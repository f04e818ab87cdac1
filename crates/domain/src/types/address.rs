//! Physical address attached to customers and cards

use serde::{Deserialize, Serialize};

/// Physical address. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_3: Option<String>,
    /// City or town.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublocality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublocality_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublocality_3: Option<String>,
    /// In the US, the state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_district_level_1: Option<String>,
    /// In the US, the county.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_district_level_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_district_level_3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// ISO 3166 alpha-2 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

impl Address {
    /// Recipient name: first and last name, or whichever one is present.
    pub fn name(&self) -> Option<String> {
        join_present([self.first_name.as_deref(), self.last_name.as_deref()], " ")
    }

    /// Administrative districts joined by commas, skipping absent levels.
    pub fn district(&self) -> Option<String> {
        join_present(
            [
                self.administrative_district_level_1.as_deref(),
                self.administrative_district_level_2.as_deref(),
                self.administrative_district_level_3.as_deref(),
            ],
            ",",
        )
    }

    /// Multi-line postal rendering of the address.
    pub fn full_address(&self) -> Option<String> {
        let name = self.name();
        let district = self.district();
        join_present(
            [
                name.as_deref(),
                self.address_line_1.as_deref(),
                self.address_line_2.as_deref(),
                self.address_line_3.as_deref(),
                self.locality.as_deref(),
                self.postal_code.as_deref(),
                district.as_deref(),
                self.country.as_deref(),
            ],
            "\n",
        )
    }
}

fn join_present<'a>(parts: impl IntoIterator<Item = Option<&'a str>>, sep: &str) -> Option<String> {
    let joined =
        parts.into_iter().flatten().filter(|part| !part.is_empty()).collect::<Vec<_>>().join(sep);
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}
