use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for CoreError {
    /// Flatten field errors into a single message listing the offending
    /// fields in a stable (sorted) order.
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort_unstable();
        CoreError::Validation(format!(
            "Fields must be present and non-empty: {}",
            fields.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Character",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Character with id 7");
    }

    #[test]
    fn validation_errors_flatten_to_sorted_field_list() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("universe", validator::ValidationError::new("required"));
        errors.add("name", validator::ValidationError::new("length"));

        let err = CoreError::from(errors);
        assert_eq!(
            err.to_string(),
            "Validation failed: Fields must be present and non-empty: name, universe"
        );
    }
}
