//! Resource operations, one module per catalog entity.
//!
//! Each module adds an `impl SpotifyClient` block. Read operations return
//! the response JSON; write operations return a
//! [`StatusMessage`](crate::types::StatusMessage).

mod albums;
mod artists;
mod audiobooks;
mod categories;
mod chapters;
mod episodes;
mod genres;
mod markets;
mod pagination;
mod player;
mod playlists;
mod search;
mod shows;
mod tracks;
mod users;
