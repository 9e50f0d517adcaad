//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Main,
    Drink,
    Extra,
}

/// Menu item entity
///
/// Orders embed their own copies of these at checkout, so deleting or
/// repricing an item never touches order history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price, non-negative
    pub price: Decimal,
    /// Image URL
    pub image: String,
    pub category: Category,
    #[serde(default)]
    pub is_popular: bool,
    /// Catalogs persisted before this flag existed lack the field;
    /// absent means orderable.
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

/// Create menu item payload (id is assigned by the catalog)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: Category,
    pub is_popular: Option<bool>,
}
