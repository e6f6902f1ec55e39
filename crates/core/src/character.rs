//! Character field rules and identifier assignment.
//!
//! The record layout itself lives in `charcat_db::models::character`; this
//! module holds the rules every layer (store, API, client guard) agrees on.

use crate::types::DbId;

/// Entity label used in not-found errors and log fields.
pub const ENTITY: &str = "Character";

/// Wire names of the three required string fields, in form order.
pub const FIELD_NAME: &str = "name";
pub const FIELD_REAL_NAME: &str = "realName";
pub const FIELD_UNIVERSE: &str = "universe";

/// Next identifier for a new record: one past the largest existing id, or
/// `1` for an empty catalog. Ids of deleted records are never reissued
/// while a larger id is still present.
///
/// Returns `None` once the largest id is `DbId::MAX`.
///
/// ```
/// use charcat_core::character::next_id;
///
/// assert_eq!(next_id([]), Some(1));
/// assert_eq!(next_id([1, 4, 2]), Some(5));
/// assert_eq!(next_id([i64::MAX]), None);
/// ```
pub fn next_id<I>(ids: I) -> Option<DbId>
where
    I: IntoIterator<Item = DbId>,
{
    ids.into_iter().fold(0, DbId::max).checked_add(1)
}

/// Names of the fields that are absent or empty.
///
/// Used by the client's advisory guard before a create request; the server
/// applies the same rule authoritatively.
pub fn blank_fields<'a>(fields: &[(&'a str, Option<&str>)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.map_or(true, str::is_empty))
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(Vec::new()), Some(1));
    }

    #[test]
    fn next_id_follows_the_maximum_not_the_count() {
        assert_eq!(next_id([2, 7, 3]), Some(8));
    }

    #[test]
    fn next_id_ignores_non_positive_ids() {
        assert_eq!(next_id([-4, 0]), Some(1));
    }

    #[test]
    fn next_id_is_none_when_ids_are_exhausted() {
        assert_eq!(next_id([3, DbId::MAX]), None);
        assert_eq!(next_id([DbId::MAX - 1]), Some(DbId::MAX));
    }

    #[test]
    fn blank_fields_reports_missing_and_empty() {
        let blanks = blank_fields(&[
            (FIELD_NAME, Some("Batman")),
            (FIELD_REAL_NAME, Some("")),
            (FIELD_UNIVERSE, None),
        ]);
        assert_eq!(blanks, vec![FIELD_REAL_NAME, FIELD_UNIVERSE]);
    }

    #[test]
    fn blank_fields_empty_when_all_present() {
        let blanks = blank_fields(&[
            (FIELD_NAME, Some("Batman")),
            (FIELD_REAL_NAME, Some("Bruce Wayne")),
            (FIELD_UNIVERSE, Some("DC")),
        ]);
        assert!(blanks.is_empty());
    }
}
