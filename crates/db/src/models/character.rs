//! Character record, the persisted document and request DTOs.

use charcat_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single catalog entry as stored on disk and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub real_name: String,
    pub universe: String,
}

/// The whole backing file: `{ "characters": [...] }` in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub characters: Vec<Character>,
}

/// DTO for creating a character.
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a validation failure instead of a deserialization rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacter {
    #[validate(required, length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universe: Option<String>,
}

impl CreateCharacter {
    /// Build the stored record. Expects `self` to have passed validation.
    pub fn to_character(&self, id: DbId) -> Character {
        Character {
            id,
            name: self.name.clone().unwrap_or_default(),
            real_name: self.real_name.clone().unwrap_or_default(),
            universe: self.universe.clone().unwrap_or_default(),
        }
    }
}

/// DTO for updating a character. Only provided fields are applied; an
/// `id` or unknown key in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacter {
    #[validate(length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[validate(length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universe: Option<String>,
}

impl UpdateCharacter {
    /// True when the body carried none of the mutable fields.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.real_name.is_none() && self.universe.is_none()
    }

    /// Merge the provided fields into `character`, keeping the rest.
    pub fn apply_to(&self, character: &mut Character) {
        if let Some(name) = &self.name {
            character.name.clone_from(name);
        }
        if let Some(real_name) = &self.real_name {
            character.real_name.clone_from(real_name);
        }
        if let Some(universe) = &self.universe {
            character.universe.clone_from(universe);
        }
    }
}
