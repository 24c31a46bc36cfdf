//! The aggregate brand-insight record and its fragments.
//!
//! Every field of [`BrandRecord`] is independently defaultable: an extractor
//! that fails contributes its empty value rather than voiding the record.
//! Serialized keys are the snake_case field names below.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::products::Product;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandRecord {
    pub brand_name: Option<String>,
    pub about: Option<String>,
    pub product_catalog: Vec<Product>,
    pub hero_products: Vec<Product>,
    pub policies: Vec<Policy>,
    pub faqs: Vec<Faq>,
    pub social_handles: Vec<SocialHandle>,
    pub contact_info: ContactInfo,
    /// Lowercased link text → absolute URL. Later anchors overwrite earlier ones.
    pub important_links: BTreeMap<String, String>,
}

impl BrandRecord {
    /// Returns `true` when no extractor contributed anything.
    ///
    /// An unreachable storefront and a reachable page that matches none of the
    /// heuristics both land here; the two cases are not distinguished.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brand_name.is_none()
            && self.about.is_none()
            && self.product_catalog.is_empty()
            && self.hero_products.is_empty()
            && self.policies.is_empty()
            && self.faqs.is_empty()
            && self.social_handles.is_empty()
            && self.contact_info.is_empty()
            && self.important_links.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyType {
    Privacy,
    Refund,
    Return,
}

impl PolicyType {
    /// Path segment the storefront serves this policy under, e.g. `"refund-policy"`.
    #[must_use]
    pub fn path_segment(self) -> String {
        format!("{self}-policy")
    }
}

impl std::fmt::Display for PolicyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyType::Privacy => write!(f, "privacy"),
            PolicyType::Refund => write!(f, "refund"),
            PolicyType::Return => write!(f, "return"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    pub url: String,
    /// Visible page text, tags stripped and whitespace collapsed.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialHandle {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

impl ContactInfo {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phones.is_empty()
    }
}
