/// Data models for the content store
///
/// This module defines structures for:
/// - User: Account identity
/// - Post: Content items with media attachments
/// - Media: Attachments on posts
/// - Comment: Comments on posts
/// - Favorite: A user's bookmark of a post
/// - Character / Planet: Fan-content reference catalog, with their
///   per-user favorite join rows
pub mod character;
pub mod comment;
pub mod favorite;
pub mod media;
pub mod planet;
pub mod post;
pub mod user;

pub use character::{Character, CharacterFavorite};
pub use comment::Comment;
pub use favorite::Favorite;
pub use media::{Media, MediaKind, MediaView};
pub use planet::{Planet, PlanetFavorite};
pub use post::{Category, Post};
pub use user::{PublicUser, User};
