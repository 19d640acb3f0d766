use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use infra::documents::{Entity, Keyed};

/// Stock keeping unit: the caller-supplied identity of a catalog entry.
/// Serializes as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Sku(String);

impl Sku {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.0)
    }
}

impl From<&str> for Sku {
    fn from(val: &str) -> Self {
        Sku(val.to_string())
    }
}

impl From<String> for Sku {
    fn from(val: String) -> Self {
        Sku(val)
    }
}

/// A catalog entry. The field names are the wire format; `launch` is a
/// calendar date with no time component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: Sku,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub size: String,
    pub ingredient: String,
    pub launch: NaiveDate,
}

impl Entity for Product {
    const PREFIX: &'static str = "product";
}

impl Keyed for Product {
    fn key(&self) -> String {
        self.sku.to_string()
    }
}
