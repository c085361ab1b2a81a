//! File formats consumed by the collaborator layer.
//!
//! Only [`map_file`] lives here today: the line-oriented board
//! description the CLI feeds into the engines.

pub mod map_file;

pub use map_file::MapDescription;
