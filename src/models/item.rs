use serde::{Deserialize, Serialize};

/// Core inventory record. The same shape is used for request bodies and
/// responses: `description` and `in_stock` may be omitted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default = "in_stock_default")]
    pub in_stock: bool,
}

fn in_stock_default() -> bool {
    true
}

#[cfg(test)]
impl Item {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            price,
            in_stock: true,
        }
    }
}
