use iced::Rectangle;

/// The slice of the content viewport that counts as "in view".
///
/// Anchors activate while they occupy the upper-middle band of the pane:
/// the top 20% and the bottom 70% of the viewport are excluded, which biases
/// activation toward the section a reading user has scrolled to rather than
/// merely scrolled past.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top: f32,
    pub bottom: f32,
}

/// Fraction of the viewport height excluded above the band
const EXCLUDE_TOP: f32 = 0.20;
/// Fraction of the viewport height excluded below the band
const EXCLUDE_BOTTOM: f32 = 0.70;

impl Band {
    /// Compute the band from the scroll pane's live bounds
    pub fn from_viewport(viewport: Rectangle) -> Self {
        Band {
            top: viewport.y + viewport.height * EXCLUDE_TOP,
            bottom: viewport.y + viewport.height * (1.0 - EXCLUDE_BOTTOM),
        }
    }
}

/// Tracks which anchor of the detail page is active for the quick-nav.
///
/// Visibility reports arrive one anchor at a time from asynchronous widget
/// probes, in no guaranteed order. The spy keeps the latest visible-area
/// fraction per anchor and recomputes the winner on every report, so
/// applying the same report twice changes nothing.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    /// Anchor ids in navigation (document) order
    anchors: Vec<String>,
    /// Latest visible-area fraction per anchor, same order
    fractions: Vec<f32>,
    /// Index of the active anchor
    active: usize,
}

impl ScrollSpy {
    /// Start tracking the given anchors. The first anchor is active until
    /// a visibility report or a click says otherwise.
    pub fn new(anchors: Vec<String>) -> Self {
        let fractions = vec![0.0; anchors.len()];
        ScrollSpy {
            anchors,
            fractions,
            active: 0,
        }
    }

    /// Id of the anchor the sidebar should highlight
    pub fn active_id(&self) -> Option<&str> {
        self.anchors.get(self.active).map(String::as_str)
    }

    /// Anchor ids in navigation order
    pub fn anchors(&self) -> &[String] {
        &self.anchors
    }

    /// Feed one visibility report: the probed anchor's on-screen bounds
    /// (None when the element does not exist or is fully clipped away)
    /// against the current band.
    ///
    /// Reports for anchors this spy does not track are stale probes from a
    /// previous screen and are dropped silently.
    pub fn observe(&mut self, anchor: &str, bounds: Option<Rectangle>, band: Band) {
        let Some(index) = self.anchors.iter().position(|a| a == anchor) else {
            return;
        };

        self.fractions[index] = bounds.map_or(0.0, |rect| visible_fraction(rect, band));
        self.recompute();
    }

    /// Clicking a nav entry activates it immediately, independent of any
    /// in-flight visibility reports.
    pub fn activate(&mut self, anchor: &str) {
        if let Some(index) = self.anchors.iter().position(|a| a == anchor) {
            self.active = index;
        }
    }

    /// Pick the anchor with the greatest visible fraction. Ties keep the
    /// earliest anchor in navigation order; when nothing is in view the
    /// previous winner sticks.
    fn recompute(&mut self) {
        let mut best: Option<(usize, f32)> = None;
        for (index, &fraction) in self.fractions.iter().enumerate() {
            if fraction <= 0.0 {
                continue;
            }
            match best {
                Some((_, best_fraction)) if fraction <= best_fraction => {}
                _ => best = Some((index, fraction)),
            }
        }

        if let Some((index, _)) = best {
            self.active = index;
        }
    }
}

/// How much of a rectangle falls inside the band, as a fraction of the
/// rectangle's height. Degenerate rectangles report zero.
fn visible_fraction(rect: Rectangle, band: Band) -> f32 {
    if rect.height <= 0.0 {
        return 0.0;
    }
    let top = rect.y.max(band.top);
    let bottom = (rect.y + rect.height).min(band.bottom);
    ((bottom - top) / rect.height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band() -> Band {
        // A 1000px viewport at the origin: band spans 200..300.
        Band::from_viewport(Rectangle {
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 1000.0,
        })
    }

    fn rect(y: f32, height: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: 800.0,
            height,
        }
    }

    fn spy() -> ScrollSpy {
        ScrollSpy::new(vec![
            "overview".to_string(),
            "screenshots".to_string(),
            "design".to_string(),
            "reflection".to_string(),
        ])
    }

    #[test]
    fn test_band_excludes_top_and_bottom() {
        let band = band();
        assert_eq!(band.top, 200.0);
        assert_eq!(band.bottom, 300.0);

        // Offset viewports shift the band with them.
        let shifted = Band::from_viewport(Rectangle {
            x: 0.0,
            y: 100.0,
            width: 800.0,
            height: 1000.0,
        });
        assert_eq!(shifted.top, 300.0);
        assert_eq!(shifted.bottom, 400.0);
    }

    #[test]
    fn test_first_anchor_starts_active() {
        assert_eq!(spy().active_id(), Some("overview"));
    }

    #[test]
    fn test_anchor_in_band_becomes_active() {
        let mut spy = spy();
        spy.observe("design", Some(rect(210.0, 80.0)), band());
        assert_eq!(spy.active_id(), Some("design"));
    }

    #[test]
    fn test_anchor_outside_band_does_not_activate() {
        let mut spy = spy();
        // Entirely below the band (band ends at 300).
        spy.observe("design", Some(rect(400.0, 200.0)), band());
        assert_eq!(spy.active_id(), Some("overview"));
    }

    #[test]
    fn test_greatest_fraction_wins() {
        let mut spy = spy();
        // 10% of a 500px section in the band vs all of a 50px section.
        spy.observe("screenshots", Some(rect(250.0, 500.0)), band());
        spy.observe("design", Some(rect(220.0, 50.0)), band());
        assert_eq!(spy.active_id(), Some("design"));
    }

    #[test]
    fn test_tie_keeps_document_order() {
        let mut spy = spy();
        // Both fully inside the band; equal fractions.
        spy.observe("design", Some(rect(200.0, 40.0)), band());
        spy.observe("screenshots", Some(rect(250.0, 40.0)), band());
        assert_eq!(spy.active_id(), Some("screenshots"));
    }

    #[test]
    fn test_sticky_when_nothing_in_view() {
        let mut spy = spy();
        spy.observe("design", Some(rect(210.0, 80.0)), band());
        assert_eq!(spy.active_id(), Some("design"));

        // Fast scroll: every anchor leaves the band. No flicker back to a
        // default.
        spy.observe("overview", Some(rect(-500.0, 100.0)), band());
        spy.observe("screenshots", Some(rect(-300.0, 100.0)), band());
        spy.observe("design", Some(rect(600.0, 100.0)), band());
        spy.observe("reflection", None, band());
        assert_eq!(spy.active_id(), Some("design"));
    }

    #[test]
    fn test_observe_is_idempotent() {
        let mut spy = spy();
        spy.observe("design", Some(rect(210.0, 80.0)), band());
        let first = spy.active_id().map(str::to_string);
        spy.observe("design", Some(rect(210.0, 80.0)), band());
        assert_eq!(spy.active_id().map(str::to_string), first);
    }

    #[test]
    fn test_click_overrides_scroll_state() {
        let mut spy = spy();
        spy.observe("screenshots", Some(rect(210.0, 80.0)), band());
        assert_eq!(spy.active_id(), Some("screenshots"));

        spy.activate("reflection");
        assert_eq!(spy.active_id(), Some("reflection"));
    }

    #[test]
    fn test_missing_anchor_never_activates_by_probe() {
        let mut spy = spy();
        // The element was never mounted; probes keep reporting None.
        spy.observe("reflection", None, band());
        assert_eq!(spy.active_id(), Some("overview"));

        // Direct click still works.
        spy.activate("reflection");
        assert_eq!(spy.active_id(), Some("reflection"));
    }

    #[test]
    fn test_stale_probe_from_other_screen_dropped() {
        let mut spy = spy();
        spy.observe("gameplay", Some(rect(210.0, 80.0)), band());
        assert_eq!(spy.active_id(), Some("overview"));
    }

    #[test]
    fn test_visible_fraction_partial_overlap() {
        let band = band();
        // Bottom half of a 100px rect reaches into the band.
        let fraction = visible_fraction(rect(150.0, 100.0), band);
        assert!((fraction - 0.5).abs() < 1e-6);

        // Zero-height rects report nothing.
        assert_eq!(visible_fraction(rect(250.0, 0.0), band), 0.0);
    }
}
