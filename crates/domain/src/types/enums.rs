//! Enumerations shared by the customer, card and search types

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum;

/// How a customer profile was created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CreationSource {
    Other,
    Appointments,
    Coupon,
    DeletionRecovery,
    Directory,
    Egifting,
    EmailCollection,
    Feedback,
    Import,
    Invoices,
    Loyalty,
    Marketing,
    Merge,
    OnlineStore,
    InstantProfile,
    Terminal,
    ThirdParty,
    ThirdPartyImport,
    UnmergeRecovery,
    Unknown(String),
}

impl_wire_enum!(CreationSource {
    Other => "OTHER",
    Appointments => "APPOINTMENTS",
    Coupon => "COUPON",
    DeletionRecovery => "DELETION_RECOVERY",
    Directory => "DIRECTORY",
    Egifting => "EGIFTING",
    EmailCollection => "EMAIL_COLLECTION",
    Feedback => "FEEDBACK",
    Import => "IMPORT",
    Invoices => "INVOICES",
    Loyalty => "LOYALTY",
    Marketing => "MARKETING",
    Merge => "MERGE",
    OnlineStore => "ONLINE_STORE",
    InstantProfile => "INSTANT_PROFILE",
    Terminal => "TERMINAL",
    ThirdParty => "THIRD_PARTY",
    ThirdPartyImport => "THIRD_PARTY_IMPORT",
    UnmergeRecovery => "UNMERGE_RECOVERY",
});

/// Card network of a card on file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardBrand {
    OtherBrand,
    Visa,
    Mastercard,
    AmericanExpress,
    Discover,
    DiscoverDiners,
    Jcb,
    ChinaUnionpay,
    SquareGiftCard,
    SquareCapitalCard,
    Interac,
    Eftpos,
    Felica,
    Unknown(String),
}

impl_wire_enum!(CardBrand {
    OtherBrand => "OTHER_BRAND",
    Visa => "VISA",
    Mastercard => "MASTERCARD",
    AmericanExpress => "AMERICAN_EXPRESS",
    Discover => "DISCOVER",
    DiscoverDiners => "DISCOVER_DINERS",
    Jcb => "JCB",
    ChinaUnionpay => "CHINA_UNIONPAY",
    SquareGiftCard => "SQUARE_GIFT_CARD",
    SquareCapitalCard => "SQUARE_CAPITAL_CARD",
    Interac => "INTERAC",
    Eftpos => "EFTPOS",
    Felica => "FELICA",
});

/// Whether a card is prepaid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardPrepaidType {
    UnknownPrepaidType,
    NotPrepaid,
    Prepaid,
    Unknown(String),
}

impl_wire_enum!(CardPrepaidType {
    UnknownPrepaidType => "UNKNOWN_PREPAID_TYPE",
    NotPrepaid => "NOT_PREPAID",
    Prepaid => "PREPAID",
});

/// Field customer listings and searches are sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortField {
    #[default]
    Default,
    CreatedAt,
}

impl SortField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::CreatedAt => "CREATED_AT",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}
