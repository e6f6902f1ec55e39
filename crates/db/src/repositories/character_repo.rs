//! Repository for the character catalog document.

use charcat_core::character::next_id;
use charcat_core::types::DbId;

use crate::error::StoreError;
use crate::models::character::{Character, CreateCharacter, UpdateCharacter};
use crate::store::JsonStore;

/// Provides list/create/update/delete over the stored characters.
///
/// Mutations return the full post-mutation list, which is what the API
/// hands back to clients.
pub struct CharacterRepo;

impl CharacterRepo {
    /// All characters in insertion order. A broken store reads as empty.
    pub async fn list(store: &JsonStore) -> Vec<Character> {
        store.load().await.characters
    }

    /// Find a character by id.
    pub async fn find_by_id(store: &JsonStore, id: DbId) -> Option<Character> {
        store
            .load()
            .await
            .characters
            .into_iter()
            .find(|c| c.id == id)
    }

    /// Append a new character with the next free id.
    ///
    /// `input` must already have passed validation. Fails with
    /// [`StoreError::IdsExhausted`] when the largest stored id is `i64::MAX`.
    pub async fn create(
        store: &JsonStore,
        input: &CreateCharacter,
    ) -> Result<Vec<Character>, StoreError> {
        let created = store
            .mutate(|doc| {
                let id = next_id(doc.characters.iter().map(|c| c.id))
                    .ok_or(StoreError::IdsExhausted { max: DbId::MAX })?;
                doc.characters.push(input.to_character(id));
                Ok(Some((id, doc.characters.clone())))
            })
            .await?;

        let Some((id, characters)) = created else {
            return Ok(Vec::new());
        };
        tracing::info!(id, "Character created");
        Ok(characters)
    }

    /// Merge `input` into the character with the given id.
    ///
    /// Returns `None` if no character has that id; the file is not touched.
    pub async fn update(
        store: &JsonStore,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Vec<Character>>, StoreError> {
        let characters = store
            .mutate(|doc| {
                let Some(character) = doc.characters.iter_mut().find(|c| c.id == id) else {
                    return Ok(None);
                };
                input.apply_to(character);
                Ok(Some(doc.characters.clone()))
            })
            .await?;

        if characters.is_some() {
            tracing::info!(id, "Character updated");
        }
        Ok(characters)
    }

    /// Remove the character with the given id, keeping the others in order.
    ///
    /// Returns `None` if no character has that id; the file is not touched.
    pub async fn delete(store: &JsonStore, id: DbId) -> Result<Option<Vec<Character>>, StoreError> {
        let characters = store
            .mutate(|doc| {
                let before = doc.characters.len();
                doc.characters.retain(|c| c.id != id);
                if doc.characters.len() == before {
                    return Ok(None);
                }
                Ok(Some(doc.characters.clone()))
            })
            .await?;

        if characters.is_some() {
            tracing::info!(id, "Character deleted");
        }
        Ok(characters)
    }
}
