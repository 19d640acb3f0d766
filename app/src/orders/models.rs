use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use infra::documents::{Entity, Keyed};

/// A sales order. Declared as a storable entity but wired into nothing:
/// no store, no resource, no request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderID")]
    pub order_id: String,
    #[serde(rename = "orderDate")]
    pub order_date: NaiveDate,
    #[serde(rename = "customerID")]
    pub customer_id: String,
    #[serde(rename = "storeID")]
    pub store_id: String,
    #[serde(rename = "nItems")]
    pub n_items: i32,
    pub total: Option<f64>,
}

impl Entity for Order {
    const PREFIX: &'static str = "order";
}

impl Keyed for Order {
    fn key(&self) -> String {
        self.order_id.clone()
    }
}
