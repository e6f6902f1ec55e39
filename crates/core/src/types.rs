/// Character identifiers are positive integers assigned by the server.
pub type DbId = i64;
