use crate::error::{OrderingError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A menu price with exact decimal precision.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce that prices
/// are never negative and that currency math stays exact.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(OrderingError::InvalidMenuItem(format!(
                "price must not be negative, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = OrderingError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of menu sections, declared in the order courses are
/// served. `Ord` on this enum is the canonical catalog sort order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    #[serde(rename = "appetizer")]
    Appetizer,
    #[serde(rename = "main course")]
    MainCourse,
    #[serde(rename = "dessert")]
    Dessert,
    #[serde(rename = "beverage")]
    Beverage,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Appetizer,
        Category::MainCourse,
        Category::Dessert,
        Category::Beverage,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Appetizer => "appetizer",
            Category::MainCourse => "main course",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
        };
        f.write_str(label)
    }
}

/// A single orderable dish as the catalog exposes it.
///
/// Immutable once fetched by the ordering side; the admin store owns the
/// live copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Opaque unique identifier, assigned by whoever owns the menu.
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
}
