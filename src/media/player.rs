/// Hero media playback state
///
/// The home hero loops the showcase reel. This widget owns the play/mute
/// booleans that drive the presentation; it is independent of the
/// screenshot gallery and keeps its state across lightbox activity there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroMedia {
    playing: bool,
    muted: bool,
}

impl Default for HeroMedia {
    /// The reel autoplays muted, matching the published site
    fn default() -> Self {
        HeroMedia {
            playing: true,
            muted: true,
        }
    }
}

impl HeroMedia {
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip play/pause and command the underlying presentation
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Flip the mute flag; playback position is unaffected
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Control glyph for the play/pause button
    pub fn play_glyph(&self) -> &'static str {
        if self.playing {
            "⏸"
        } else {
            "▶"
        }
    }

    /// Control glyph for the mute button
    pub fn mute_glyph(&self) -> &'static str {
        if self.muted {
            "🔇"
        } else {
            "🔊"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_playing_and_muted() {
        let media = HeroMedia::default();
        assert!(media.is_playing());
        assert!(media.is_muted());
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut media = HeroMedia::default();

        media.toggle_play();
        assert!(!media.is_playing());
        assert!(media.is_muted());

        media.toggle_mute();
        assert!(!media.is_playing());
        assert!(!media.is_muted());

        media.toggle_play();
        assert!(media.is_playing());
    }
}
