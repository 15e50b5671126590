//! Built-in sample catalog used when no catalog file is configured.

use crate::inventory::catalog::Catalog;
use crate::models::item::{Item, ItemId, ItemKind};

#[allow(clippy::too_many_arguments)]
fn antiquity(
    id: u32,
    name: &str,
    category: &str,
    era: &str,
    region: &str,
    condition: &str,
    authenticity: &str,
    price: f64,
    quantity: u32,
    image_path: &str,
) -> Item {
    Item {
        id: ItemId(id),
        name: name.to_string(),
        kind: ItemKind::Antiquity {
            category: category.to_string(),
        },
        era: era.to_string(),
        region: region.to_string(),
        condition: condition.to_string(),
        authenticity: authenticity.to_string(),
        price,
        quantity,
        image_path: image_path.to_string(),
    }
}

pub fn sample_items() -> Vec<Item> {
    let sword = Item {
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
        image_path: "images/sword.png".to_string(),
    };

    vec![
        sword,
        antiquity(2, "Clay Pottery Vessel", "Pottery", "5th Century BC", "Colchis", "Fair", "Partially Verified", 300.0, 5, "images/vessel.png"),
        antiquity(3, "Georgian Silver Coin", "Coin", "12th Century", "Iberia", "Excellent", "Verified", 150.0, 10, "images/coin.png"),
        antiquity(4, "Bronze Pectoral Cross", "Religious Artifact", "10th Century", "Svaneti", "Good", "Verified", 700.0, 1, "images/cross.png"),
        antiquity(5, "Handwoven Georgian Rug", "Textile", "19th Century", "Kakheti", "Good", "Verified", 1200.0, 3, "images/rug.png"),
        antiquity(6, "Ivory Drinking Horn", "Ceremonial", "17th Century", "Samegrelo", "Fair", "Verified", 900.0, 2, "images/horn.png"),
        antiquity(7, "Gold Filigree Necklace", "Jewelry", "14th Century", "Imereti", "Excellent", "Verified", 2000.0, 1, "images/necklace.png"),
        antiquity(8, "Wood Carved Icon", "Religious Artifact", "16th Century", "Kartli", "Fair", "Partially Verified", 650.0, 4, "images/icon.png"),
    ]
}

pub fn sample_catalog() -> Catalog {
    sample_items().into_iter().collect()
}
