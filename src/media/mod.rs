/// Media handling module
///
/// This module handles:
/// - Resolving catalog image references against the local assets root
/// - Generating and caching resized thumbnails
/// - Hero reel playback state

pub mod assets;
pub mod player;
pub mod thumbnail;
