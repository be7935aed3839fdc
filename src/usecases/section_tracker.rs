//! Scroll-spy use case: maps viewport scroll geometry to the active section.
//!
//! Selection is a pure function over explicit inputs; a watch channel
//! notifies the navigation layer on change only. Runs on the hot scroll
//! path, so `observe` does not allocate.

use crate::domain::{Section, SectionRegion};
use tokio::sync::watch;
use tracing::debug;

/// Vertical clearance the navigation bar needs when scrolling to a section.
pub const NAV_CLEARANCE: f64 = 80.0;

/// Tracks which section is active as the user scrolls.
///
/// Exactly one section is active at any time. When no section straddles the
/// offset line (e.g. mid-transition) the previous value is retained, so the
/// navigation never flickers to an undefined state.
pub struct SectionTracker {
    sections: Vec<Section>,
    offset: f64,
    active: watch::Sender<Section>,
}

impl SectionTracker {
    /// `sections` is the page order; the first entry is active until a
    /// scroll event says otherwise. `offset` is how far below the viewport
    /// top the activation line sits (fixed-header compensation). Duplicate
    /// entries in `sections` are a caller error.
    pub fn new(sections: Vec<Section>, offset: f64) -> Self {
        let initial = sections.first().copied().unwrap_or(Section::Home);
        let (active, _) = watch::channel(initial);
        Self {
            sections,
            offset,
            active,
        }
    }

    /// Currently active section.
    pub fn active(&self) -> Section {
        *self.active.borrow()
    }

    /// Subscribe to activation changes. Dropping the receiver unsubscribes;
    /// dropping the tracker closes the channel, so no handler leaks across
    /// remounts.
    pub fn subscribe(&self) -> watch::Receiver<Section> {
        self.active.subscribe()
    }

    /// Feed one scroll event. `regions` holds each section's current
    /// viewport edges. Subscribers are notified only when the active
    /// section actually changes.
    pub fn observe(&self, regions: &[SectionRegion]) -> Section {
        if let Some(next) = select_active(&self.sections, self.offset, regions) {
            self.active.send_if_modified(|current| {
                if *current == next {
                    false
                } else {
                    debug!(from = %current, to = %next, "active section changed");
                    *current = next;
                    true
                }
            });
        }
        self.active()
    }
}

/// First section in `sections` order whose region straddles the activation
/// line: `top <= offset && bottom >= offset`. `None` when nothing qualifies.
pub fn select_active(
    sections: &[Section],
    offset: f64,
    regions: &[SectionRegion],
) -> Option<Section> {
    sections.iter().copied().find(|section| {
        regions
            .iter()
            .any(|r| r.id == *section && r.top <= offset && r.bottom >= offset)
    })
}

/// Scroll destination when jumping to a section from the navigation:
/// the section's document top minus the nav clearance.
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - NAV_CLEARANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: [Section; 3] = [Section::Home, Section::About, Section::Skills];

    /// Viewport regions for sections laid out at 0-100, 100-250 and 250-400
    /// in document coordinates, seen at the given scroll position.
    fn regions_at(scroll_y: f64) -> [SectionRegion; 3] {
        [
            SectionRegion::new(Section::Home, 0.0 - scroll_y, 100.0 - scroll_y),
            SectionRegion::new(Section::About, 100.0 - scroll_y, 250.0 - scroll_y),
            SectionRegion::new(Section::Skills, 250.0 - scroll_y, 400.0 - scroll_y),
        ]
    }

    #[test]
    fn first_section_is_active_by_default() {
        let tracker = SectionTracker::new(SECTIONS.to_vec(), 0.0);
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn scroll_positions_select_the_straddling_section() {
        let tracker = SectionTracker::new(SECTIONS.to_vec(), 0.0);
        assert_eq!(tracker.observe(&regions_at(50.0)), Section::Home);
        assert_eq!(tracker.observe(&regions_at(150.0)), Section::About);
        assert_eq!(tracker.observe(&regions_at(300.0)), Section::Skills);
    }

    #[test]
    fn scrolling_past_the_last_section_retains_it() {
        let tracker = SectionTracker::new(SECTIONS.to_vec(), 0.0);
        tracker.observe(&regions_at(300.0));
        // Past the last section nothing straddles the line any more.
        assert_eq!(tracker.observe(&regions_at(1000.0)), Section::Skills);
        assert_eq!(tracker.active(), Section::Skills);
    }

    #[test]
    fn no_match_on_the_first_event_keeps_the_default() {
        let tracker = SectionTracker::new(SECTIONS.to_vec(), 0.0);
        assert_eq!(tracker.observe(&regions_at(1000.0)), Section::Home);
    }

    #[test]
    fn first_match_in_list_order_wins_on_the_boundary() {
        // At scroll 100 with offset 0 both Home (bottom == 0) and About
        // (top == 0) touch the line; list order decides.
        assert_eq!(
            select_active(&SECTIONS, 0.0, &regions_at(100.0)),
            Some(Section::Home)
        );
    }

    #[test]
    fn header_offset_shifts_the_activation_line() {
        // With a 100px header, About is already active while its top edge
        // sits 60px below the viewport top.
        assert_eq!(
            select_active(&SECTIONS, 100.0, &regions_at(40.0)),
            Some(Section::About)
        );
    }

    #[tokio::test]
    async fn subscribers_are_notified_on_change_only() {
        let tracker = SectionTracker::new(SECTIONS.to_vec(), 0.0);
        let mut rx = tracker.subscribe();

        tracker.observe(&regions_at(150.0));
        assert!(rx.has_changed().expect("tracker alive"));
        assert_eq!(*rx.borrow_and_update(), Section::About);

        // Same section again and a no-match event: no wakeup either way.
        tracker.observe(&regions_at(160.0));
        tracker.observe(&regions_at(1000.0));
        assert!(!rx.has_changed().expect("tracker alive"));
    }

    #[test]
    fn scroll_target_clears_the_nav() {
        assert_eq!(scroll_target(500.0), 420.0);
    }
}
