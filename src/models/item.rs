use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const WEAPON_CATEGORY: &str = "Weapon";

/// Catalog-unique identifier of an item. Assigned at creation and never changed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        ItemId(id)
    }
}

/// The closed set of item variants. Summary formatting is the only behaviour
/// that differs between them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Antiquity { category: String },
    Weapon { blade_length_cm: f64 },
}

impl ItemKind {
    pub fn category(&self) -> &str {
        match self {
            ItemKind::Antiquity { category } => category,
            ItemKind::Weapon { .. } => WEAPON_CATEGORY,
        }
    }

    pub fn blade_length_cm(&self) -> Option<f64> {
        match self {
            ItemKind::Antiquity { .. } => None,
            ItemKind::Weapon { blade_length_cm } => Some(*blade_length_cm),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub era: String,
    pub region: String,
    pub condition: String,
    pub authenticity: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub image_path: String,
}

// request dto
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct NewItemRequest {
    pub id: ItemId,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    #[validate(custom = "validate_name")]
    pub name: String,

    #[validate(custom = "validate_kind")]
    pub kind: ItemKind,

    pub era: String,

    pub region: String,

    pub condition: String,

    pub authenticity: String,

    #[validate(custom = "validate_price")]
    pub price: f64,

    pub quantity: u32,

    #[serde(default)]
    pub image_path: Option<String>,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("Name is required"));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::new("price_must_be_non_negative"));
    }
    Ok(())
}

fn validate_kind(kind: &ItemKind) -> Result<(), ValidationError> {
    match kind {
        ItemKind::Antiquity { category } if category.trim().is_empty() => {
            Err(ValidationError::new("category_required"))
        }
        ItemKind::Weapon { blade_length_cm } if !blade_length_cm.is_finite() || *blade_length_cm <= 0.0 => {
            Err(ValidationError::new("blade_length_must_be_positive"))
        }
        _ => Ok(()),
    }
}

// custom error
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Invalid price {price}: price must be a non-negative number")]
    InvalidPrice { price: f64 },
}

impl Item {
    pub fn new(request: NewItemRequest) -> Result<Self, ItemError> {
        request.validate()?;

        Ok(Self {
            id: request.id,
            name: request.name.trim().to_string(),
            kind: request.kind,
            era: request.era,
            region: request.region,
            condition: request.condition,
            authenticity: request.authenticity,
            price: request.price,
            quantity: request.quantity,
            image_path: request.image_path.unwrap_or_default(),
        })
    }

    pub fn category(&self) -> &str {
        self.kind.category()
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon { .. })
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Reduces stock by `count`, flooring at zero.
    ///
    /// Over-reduction is not an error: asking for more than is in stock
    /// leaves the item sold out.
    pub fn reduce_quantity(&mut self, count: u32) {
        self.quantity = self.quantity.saturating_sub(count);
    }

    pub fn update_price(&mut self, new_price: f64) -> Result<(), ItemError> {
        if validate_price(new_price).is_err() {
            return Err(ItemError::InvalidPrice { price: new_price });
        }
        self.price = new_price;
        Ok(())
    }

    pub fn update_condition(&mut self, new_condition: impl Into<String>) {
        self.condition = new_condition.into();
    }

    /// One-line listing used in search results and the cart.
    pub fn summary(&self) -> String {
        match &self.kind {
            ItemKind::Antiquity { category } => {
                format!("{} ({}, {}) - ${}", self.name, category, self.era, self.price)
            }
            ItemKind::Weapon { blade_length_cm } => {
                format!("{} [Blade: {}cm] - ${}", self.name, blade_length_cm, self.price)
            }
        }
    }

    pub fn details(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("ID: {}\n", self.id));
        output.push_str(&format!("Name: {}\n", self.name));
        output.push_str(&format!("Category: {}\n", self.category()));
        output.push_str(&format!("Era: {}\n", self.era));
        output.push_str(&format!("Region: {}\n", self.region));
        output.push_str(&format!("Condition: {}\n", self.condition));
        output.push_str(&format!("Authenticity: {}\n", self.authenticity));
        output.push_str(&format!("Price: ${}\n", self.price));
        output.push_str(&format!("Quantity: {}", self.quantity));
        output
    }

    pub fn to_request(&self) -> NewItemRequest {
        NewItemRequest {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind.clone(),
            era: self.era.clone(),
            region: self.region.clone(),
            condition: self.condition.clone(),
            authenticity: self.authenticity.clone(),
            price: self.price,
            quantity: self.quantity,
            image_path: if self.image_path.is_empty() {
                None
            } else {
                Some(self.image_path.clone())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin_request() -> NewItemRequest {
        NewItemRequest {
            id: ItemId(3),
            name: "Georgian Silver Coin".to_string(),
            kind: ItemKind::Antiquity {
                category: "Coin".to_string(),
            },
            era: "12th Century".to_string(),
            region: "Iberia".to_string(),
            condition: "Excellent".to_string(),
            authenticity: "Verified".to_string(),
            price: 150.0,
            quantity: 10,
            image_path: Some("images/coin.png".to_string()),
        }
    }

    fn sword_request() -> NewItemRequest {
        NewItemRequest {
            id: ItemId(1),
            name: "Antique Georgian Sword".to_string(),
            kind: ItemKind::Weapon {
                blade_length_cm: 85.0,
            },
            era: "18th Century".to_string(),
            region: "Kakheti".to_string(),
            condition: "Good".to_string(),
            authenticity: "Verified".to_string(),
            price: 500.0,
            quantity: 2,
            image_path: None,
        }
    }

    #[test]
    fn test_antiquity_summary() {
        let item = Item::new(coin_request()).unwrap();
        assert_eq!(
            item.summary(),
            "Georgian Silver Coin (Coin, 12th Century) - $150"
        );
    }

    #[test]
    fn test_weapon_summary_includes_blade_length() {
        let item = Item::new(sword_request()).unwrap();
        assert_eq!(
            item.summary(),
            "Antique Georgian Sword [Blade: 85cm] - $500"
        );
        assert_eq!(item.category(), "Weapon");
        assert!(item.is_weapon());
        assert_eq!(item.image_path, "");
    }

    #[test]
    fn test_details_lists_every_attribute() {
        let item = Item::new(coin_request()).unwrap();
        let details = item.details();
        assert!(details.starts_with("ID: 3\n"));
        assert!(details.contains("Region: Iberia\n"));
        assert!(details.contains("Price: $150\n"));
        assert!(details.ends_with("Quantity: 10"));
    }

    #[test]
    fn test_reduce_quantity_floors_at_zero() {
        let mut item = Item::new(sword_request()).unwrap();
        item.reduce_quantity(1);
        assert_eq!(item.quantity, 1);
        item.reduce_quantity(u32::MAX);
        assert_eq!(item.quantity, 0);
        assert!(!item.in_stock());
    }

    #[test]
    fn test_update_price_rejects_negative() {
        let mut item = Item::new(coin_request()).unwrap();
        assert!(item.update_price(175.5).is_ok());
        assert_eq!(item.price, 175.5);

        let result = item.update_price(-1.0);
        assert!(matches!(result, Err(ItemError::InvalidPrice { .. })));
        assert_eq!(item.price, 175.5);

        assert!(item.update_price(f64::NAN).is_err());
    }

    #[test]
    fn test_update_condition_replaces_value() {
        let mut item = Item::new(coin_request()).unwrap();
        item.update_condition("Worn");
        assert_eq!(item.condition, "Worn");
    }

    #[test]
    fn test_invalid_requests_rejected() {
        let mut blank_name = coin_request();
        blank_name.name = "   ".to_string();
        assert!(Item::new(blank_name).is_err());

        let mut negative_price = coin_request();
        negative_price.price = -5.0;
        assert!(Item::new(negative_price).is_err());

        let mut no_blade = sword_request();
        no_blade.kind = ItemKind::Weapon {
            blade_length_cm: 0.0,
        };
        assert!(Item::new(no_blade).is_err());
    }

    #[test]
    fn test_kind_serializes_with_type_tag() {
        let json = serde_json::to_value(ItemKind::Weapon {
            blade_length_cm: 85.0,
        })
        .unwrap();
        assert_eq!(json["type"], "weapon");
        assert_eq!(json["blade_length_cm"], 85.0);
    }
}
