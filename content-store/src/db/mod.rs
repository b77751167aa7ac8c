/// Database access layer
///
/// Repository functions, one module per entity family. Every function
/// takes an explicit `&PgPool`; there is no process-wide store handle.
pub mod characters;
pub mod comments;
pub mod favorites;
pub mod media;
pub mod planets;
pub mod posts;
pub mod users;
