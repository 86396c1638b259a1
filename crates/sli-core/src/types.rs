use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub account_id: String,
    pub items: Vec<OrderLineItem>,
    pub totals: Vec<TotalLine>,
}

impl Order {
    pub fn total_amount(&self, kind: TotalKind) -> Option<f64> {
        self.totals.iter().find(|t| t.kind == kind).map(|t| t.amount)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: String,
    pub model: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalLine {
    pub kind: TotalKind,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalKind {
    Total,
    Tax,
    Shipping,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_type: String,
    pub language_code: String,
    pub currency_code: String,
    pub cart_item_count: usize,
}
