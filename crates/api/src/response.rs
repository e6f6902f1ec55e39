//! Response envelopes for the catalog endpoints.
//!
//! List and mutation endpoints always return the complete catalog so the
//! client can replace its local copy wholesale.

use charcat_db::models::character::Character;
use serde::Serialize;

/// `GET /api/characters` body: `{ "characters": [...] }`.
#[derive(Debug, Serialize)]
pub struct CharactersResponse {
    pub characters: Vec<Character>,
}

/// `GET /api/characters/{id}` body: `{ "character": {...} }`.
#[derive(Debug, Serialize)]
pub struct CharacterResponse {
    pub character: Character,
}

/// Body of every successful mutation: `{ "message", "characters" }`.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub message: &'static str,
    pub characters: Vec<Character>,
}
