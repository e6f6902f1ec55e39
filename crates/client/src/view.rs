//! Catalog view state and the user actions that drive it.
//!
//! The view mirrors the server: after every successful call the local list
//! is replaced wholesale by the list the server returned. Nothing is updated
//! optimistically, and a failed call leaves `records` as it was.

use charcat_core::character::{blank_fields, FIELD_NAME, FIELD_REAL_NAME, FIELD_UNIVERSE};
use charcat_core::types::DbId;
use charcat_db::models::character::{Character, CreateCharacter, UpdateCharacter};

use crate::api::{CatalogClient, ClientError, Mutation};
use crate::interaction::Interaction;

/// Local UI state for the character catalog.
pub struct CatalogView {
    client: CatalogClient,
    /// Mirror of the last list the server returned.
    pub records: Vec<Character>,
    /// Fields of the character being composed.
    pub draft: CreateCharacter,
    /// True while the initial or a reload fetch is running.
    pub loading: bool,
    /// Shown instead of the list when the last fetch failed.
    pub error: Option<String>,
}

impl CatalogView {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            records: Vec::new(),
            draft: CreateCharacter::default(),
            loading: false,
            error: None,
        }
    }

    /// Fetch the list. On failure `error` is set and `records` kept.
    pub async fn load(&mut self) -> bool {
        self.loading = true;
        self.error = None;

        let result = self.client.list().await;
        self.loading = false;

        match result {
            Ok(characters) => {
                self.records = characters;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load characters");
                self.error = Some(format!("Could not load characters: {err}"));
                false
            }
        }
    }

    /// Prompt for each draft field in form order. A cancelled prompt leaves
    /// the field empty; [`submit_draft`](Self::submit_draft) catches it.
    pub fn fill_draft(&mut self, ui: &mut impl Interaction) {
        self.draft.name = ui.prompt("Name:");
        self.draft.real_name = ui.prompt("Real name:");
        self.draft.universe = ui.prompt("Universe:");
    }

    /// Send the draft as a new character.
    ///
    /// All three fields must be filled in before anything is sent. This
    /// check only spares a round trip; the server validates again.
    pub async fn submit_draft(&mut self, ui: &mut impl Interaction) -> bool {
        let blanks = blank_fields(&[
            (FIELD_NAME, self.draft.name.as_deref()),
            (FIELD_REAL_NAME, self.draft.real_name.as_deref()),
            (FIELD_UNIVERSE, self.draft.universe.as_deref()),
        ]);
        if !blanks.is_empty() {
            ui.notify(&format!("Fill in every field (missing: {})", blanks.join(", ")));
            return false;
        }

        let result = self.client.create(&self.draft).await;
        if self.apply(ui, result, "Could not add character") {
            self.draft = CreateCharacter::default();
            true
        } else {
            false
        }
    }

    /// Ask for a new name and send it as a partial update.
    pub async fn rename(&mut self, ui: &mut impl Interaction, id: DbId) -> bool {
        let Some(name) = ui.prompt("New name:") else {
            return false;
        };

        let input = UpdateCharacter {
            name: Some(name),
            ..Default::default()
        };
        let result = self.client.update(id, &input).await;
        self.apply(ui, result, "Could not rename character")
    }

    /// Prompt for every field, sending only the ones that changed.
    ///
    /// A blank answer keeps the current value.
    pub async fn edit(&mut self, ui: &mut impl Interaction, id: DbId) -> bool {
        let Some(current) = self.records.iter().find(|c| c.id == id).cloned() else {
            ui.notify(&format!("No character with id {id} in the list"));
            return false;
        };

        let changed = |answer: Option<String>, old: &str| answer.filter(|new| new != old);
        let input = UpdateCharacter {
            name: changed(
                ui.prompt(&format!("Name [{}]:", current.name)),
                &current.name,
            ),
            real_name: changed(
                ui.prompt(&format!("Real name [{}]:", current.real_name)),
                &current.real_name,
            ),
            universe: changed(
                ui.prompt(&format!("Universe [{}]:", current.universe)),
                &current.universe,
            ),
        };

        if input.is_empty() {
            ui.notify("Nothing changed");
            return false;
        }

        let result = self.client.update(id, &input).await;
        self.apply(ui, result, "Could not update character")
    }

    /// Delete after an explicit confirmation.
    pub async fn remove(&mut self, ui: &mut impl Interaction, id: DbId) -> bool {
        let label = self
            .records
            .iter()
            .find(|c| c.id == id)
            .map_or_else(|| format!("#{id}"), |c| c.name.clone());
        if !ui.confirm(&format!("Delete {label}?")) {
            return false;
        }

        let result = self.client.delete(id).await;
        self.apply(ui, result, "Could not delete character")
    }

    /// Text rendering of the current state.
    pub fn render(&self) -> String {
        if self.loading {
            return "Loading...".to_string();
        }
        if let Some(error) = &self.error {
            return error.clone();
        }
        if self.records.is_empty() {
            return "No characters yet. Use `add` to create one.".to_string();
        }

        self.records
            .iter()
            .map(|c| format!("#{:<4} {} ({}) - {}", c.id, c.name, c.real_name, c.universe))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replace `records` with the server's list, or notify on failure.
    fn apply(
        &mut self,
        ui: &mut impl Interaction,
        result: Result<Mutation, ClientError>,
        failure: &str,
    ) -> bool {
        match result {
            Ok(mutation) => {
                tracing::info!(message = %mutation.message, records = mutation.characters.len(), "Catalog updated");
                self.records = mutation.characters;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "{failure}");
                ui.notify(&format!("{failure}: {err}"));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with(records: Vec<Character>) -> CatalogView {
        let mut view = CatalogView::new(CatalogClient::new("http://127.0.0.1:9"));
        view.records = records;
        view
    }

    #[test]
    fn render_lists_records() {
        let view = view_with(vec![Character {
            id: 1,
            name: "Batman".into(),
            real_name: "Bruce Wayne".into(),
            universe: "DC".into(),
        }]);
        assert_eq!(view.render(), "#1    Batman (Bruce Wayne) - DC");
    }

    #[test]
    fn render_prefers_error_over_list() {
        let mut view = view_with(Vec::new());
        view.error = Some("Could not load characters".into());
        assert_eq!(view.render(), "Could not load characters");
    }
}
