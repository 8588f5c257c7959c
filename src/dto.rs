//! Transfer shapes and entity-to-DTO mapping.
//!
//! Conversions are pure structural copies; the character class passes
//! through unchanged.

use crate::model::{Character, Product, RpgClass};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub hit_points: i32,
    pub strength: i32,
    pub defense: i32,
    pub intelligence: i32,
    pub class: RpgClass,
}

impl From<Character> for CharacterDto {
    fn from(c: Character) -> Self {
        CharacterDto {
            id: c.id,
            name: c.name,
            hit_points: c.hit_points,
            strength: c.strength,
            defense: c.defense,
            intelligence: c.intelligence,
            class: c.class,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCharacter {
    pub name: String,
    pub hit_points: i32,
    pub strength: i32,
    pub defense: i32,
    pub intelligence: i32,
    pub class: RpgClass,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacter {
    pub id: i32,
    pub name: String,
    pub hit_points: i32,
    pub strength: i32,
    pub defense: i32,
    pub intelligence: i32,
    pub class: RpgClass,
}

/// Expanded-search row for characters: id always, name and hit points only
/// when selected.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProjection {
    pub id: i32,
    pub name: Option<String>,
    pub hit_points: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name,
            price: p.price,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

/// Expanded-search row for products: id always, name and price only when
/// selected.
#[derive(Debug, Clone, Serialize)]
pub struct ProductProjection {
    pub id: i32,
    pub name: Option<String>,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn character_maps_field_for_field() {
        let dto = CharacterDto::from(Character {
            id: 3,
            name: "Borin".into(),
            hit_points: 20,
            strength: 15,
            defense: 9,
            intelligence: 4,
            class: RpgClass::Knight,
        });
        assert_eq!(dto.id, 3);
        assert_eq!(dto.name, "Borin");
        assert_eq!(dto.hit_points, 20);
        assert_eq!(dto.strength, 15);
        assert_eq!(dto.defense, 9);
        assert_eq!(dto.intelligence, 4);
        assert_eq!(dto.class, RpgClass::Knight);
    }

    #[test]
    fn character_dto_serializes_camel_case() {
        let dto = CharacterDto {
            id: 1,
            name: "Aria".into(),
            hit_points: 10,
            strength: 8,
            defense: 6,
            intelligence: 12,
            class: RpgClass::Mage,
        };
        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            json!({
                "id": 1,
                "name": "Aria",
                "hitPoints": 10,
                "strength": 8,
                "defense": 6,
                "intelligence": 12,
                "class": "Mage"
            })
        );
    }

    #[test]
    fn product_maps_field_for_field() {
        let dto = ProductDto::from(Product {
            id: 7,
            name: "Sword".into(),
            price: 10.0,
        });
        assert_eq!(dto.id, 7);
        assert_eq!(dto.name, "Sword");
        assert_eq!(dto.price, 10.0);
    }

    #[test]
    fn unselected_projection_columns_serialize_as_null_and_zero() {
        let p = CharacterProjection {
            id: 2,
            name: None,
            hit_points: 0,
        };
        assert_eq!(
            serde_json::to_value(p).unwrap(),
            json!({"id": 2, "name": null, "hitPoints": 0})
        );
    }
}
