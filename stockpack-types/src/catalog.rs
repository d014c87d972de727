use crate::ids::{ShippingCategoryId, ShippingMethodId, VariantId};
use serde::{Deserialize, Serialize};

/// A carrier service, e.g. "UPS Ground".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingMethod {
    pub id: ShippingMethodId,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ShippingMethod {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ShippingMethodId(id.into()),
            name: name.into(),
            code: None,
        }
    }
}

/// Classification that decides which shipping methods apply to a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingCategory {
    pub id: ShippingCategoryId,
    pub name: String,

    /// Methods eligible for this category.
    #[serde(default)]
    pub shipping_methods: Vec<ShippingMethod>,
}

impl ShippingCategory {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        shipping_methods: Vec<ShippingMethod>,
    ) -> Self {
        Self {
            id: ShippingCategoryId(id.into()),
            name: name.into(),
            shipping_methods,
        }
    }

    pub fn supports(&self, method: &ShippingMethodId) -> bool {
        self.shipping_methods.iter().any(|m| &m.id == method)
    }
}

/// A purchasable variant, as seen from the fulfillment side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub sku: String,
    pub name: String,

    /// Weight of a single unit.
    #[serde(default)]
    pub weight: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_category: Option<ShippingCategory>,
}

impl Variant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            sku: id.clone(),
            id: VariantId(id),
            name: name.into(),
            weight: 0.0,
            shipping_category: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_shipping_category(mut self, category: ShippingCategory) -> Self {
        self.shipping_category = Some(category);
        self
    }
}
