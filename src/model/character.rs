//! Character record kind.

use crate::dto::{CharacterDto, CharacterProjection, NewCharacter, UpdateCharacter};
use crate::error::AppError;
use crate::grid::SelectedColumns;
use crate::model::GridEntity;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Fighter archetype. Stored as the PostgreSQL enum `rpg_class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "rpg_class", rename_all = "lowercase")]
pub enum RpgClass {
    Knight,
    Mage,
    Cleric,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub hit_points: i32,
    pub strength: i32,
    pub defense: i32,
    pub intelligence: i32,
    pub class: RpgClass,
}

#[async_trait]
impl GridEntity for Character {
    const KIND: &'static str = "Character";
    const TABLE: &'static str = "characters";
    const SELECT_LIST: &'static str =
        "id, name, hit_points, strength, defense, intelligence, class";

    type Dto = CharacterDto;
    type Create = NewCharacter;
    type Update = UpdateCharacter;
    type Projected = CharacterProjection;

    fn id(&self) -> i32 {
        self.id
    }

    fn update_id(input: &UpdateCharacter) -> i32 {
        input.id
    }

    fn sort_column(key: &str) -> Option<&'static str> {
        match key {
            "name" => Some("name"),
            "hitpoints" => Some("hit_points"),
            _ => None,
        }
    }

    fn project(&self, selected: &SelectedColumns) -> CharacterProjection {
        CharacterProjection {
            id: self.id,
            name: selected.contains("name").then(|| self.name.clone()),
            hit_points: if selected.contains("hitpoints") {
                self.hit_points
            } else {
                0
            },
        }
    }

    async fn insert(pool: &PgPool, input: &NewCharacter) -> Result<Self, AppError> {
        let sql = format!(
            "INSERT INTO characters (name, hit_points, strength, defense, intelligence, class) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            Self::SELECT_LIST
        );
        let row = sqlx::query_as::<_, Character>(&sql)
            .bind(&input.name)
            .bind(input.hit_points)
            .bind(input.strength)
            .bind(input.defense)
            .bind(input.intelligence)
            .bind(input.class)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    async fn update_row(pool: &PgPool, input: &UpdateCharacter) -> Result<Option<Self>, AppError> {
        let sql = format!(
            "UPDATE characters SET name = $2, hit_points = $3, strength = $4, defense = $5, \
             intelligence = $6, class = $7 WHERE id = $1 RETURNING {}",
            Self::SELECT_LIST
        );
        let row = sqlx::query_as::<_, Character>(&sql)
            .bind(input.id)
            .bind(&input.name)
            .bind(input.hit_points)
            .bind(input.strength)
            .bind(input.defense)
            .bind(input.intelligence)
            .bind(input.class)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}
