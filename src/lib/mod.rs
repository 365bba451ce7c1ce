//! # dlalbum core library
//!
//! Metadata inference for audio downloaded into an `Artist/Album/` folder.
//! Album and artist come from the directory names, and titles come from the
//! downloaded file names with promotional junk removed. The import and
//! tagging helpers apply that inference to whole album directories.

pub mod audio;
pub mod import;
pub mod metadata;
pub mod pathinfo;
pub mod tagging;
pub mod title;
pub mod utils;
