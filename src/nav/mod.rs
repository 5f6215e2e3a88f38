/// Quick-nav tracking module
///
/// Owns the scroll-spy store that decides which detail-page anchor the
/// sidebar highlights.

pub mod scroll_spy;
