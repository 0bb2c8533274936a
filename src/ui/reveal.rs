/// Reveal-on-scroll tracking
///
/// Marketing sections stay hidden until they scroll into the viewport,
/// then appear exactly once. The tracker is a scoped per-view resource:
/// it is built with the new view's registered sections on every
/// navigation, and the previous tracker is dropped with all of its
/// still-pending registrations.

use std::collections::HashSet;

/// A section becomes revealed once at least this fraction of it is
/// inside the viewport.
const VISIBILITY_THRESHOLD: f32 = 0.1;

/// A registered section in page coordinates
#[derive(Debug, Clone)]
pub struct RevealTarget {
    pub id: &'static str,
    pub top: f32,
    pub height: f32,
}

impl RevealTarget {
    pub fn new(id: &'static str, top: f32, height: f32) -> Self {
        RevealTarget { id, top, height }
    }
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    pending: Vec<RevealTarget>,
    revealed: HashSet<&'static str>,
}

impl RevealTracker {
    pub fn new(targets: Vec<RevealTarget>) -> Self {
        RevealTracker {
            pending: targets,
            revealed: HashSet::new(),
        }
    }

    /// Feed the tracker the current viewport. Sections crossing the
    /// visibility threshold are marked revealed and deregistered, so each
    /// fires at most once. Returns how many sections were newly revealed.
    pub fn observe(&mut self, viewport_top: f32, viewport_height: f32) -> usize {
        let viewport_bottom = viewport_top + viewport_height;
        let mut fired = 0;

        self.pending.retain(|target| {
            let overlap = (target.top + target.height).min(viewport_bottom)
                - target.top.max(viewport_top);
            let visible = target.height > 0.0 && overlap / target.height >= VISIBILITY_THRESHOLD;

            if visible {
                self.revealed.insert(target.id);
                fired += 1;
            }
            !visible
        });

        fired
    }

    /// Whether a section should render its content. Ids that were never
    /// registered count as revealed, so a missing registration can never
    /// hide content.
    pub fn is_revealed(&self, id: &str) -> bool {
        !self.pending.iter().any(|target| target.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> RevealTracker {
        RevealTracker::new(vec![
            RevealTarget::new("hero", 0.0, 600.0),
            RevealTarget::new("grid", 800.0, 700.0),
            RevealTarget::new("cta", 2000.0, 300.0),
        ])
    }

    #[test]
    fn test_sections_start_hidden_until_observed() {
        let t = tracker();
        assert!(!t.is_revealed("hero"));
        assert!(!t.is_revealed("cta"));
    }

    #[test]
    fn test_observe_reveals_visible_sections_only() {
        let mut t = tracker();
        let fired = t.observe(0.0, 900.0);

        // hero fully visible; grid overlaps by 100px of 700 (>= 10%)
        assert_eq!(fired, 2);
        assert!(t.is_revealed("hero"));
        assert!(t.is_revealed("grid"));
        assert!(!t.is_revealed("cta"));
    }

    #[test]
    fn test_threshold_requires_ten_percent_visibility() {
        let mut t = RevealTracker::new(vec![RevealTarget::new("late", 1000.0, 1000.0)]);

        // 50px of 1000 visible: below threshold
        t.observe(0.0, 1050.0);
        assert!(!t.is_revealed("late"));

        // 100px of 1000 visible: exactly at threshold
        t.observe(0.0, 1100.0);
        assert!(t.is_revealed("late"));
    }

    #[test]
    fn test_fire_once_semantics() {
        let mut t = tracker();
        assert_eq!(t.observe(0.0, 900.0), 2);

        // Same viewport again: already deregistered, nothing fires
        assert_eq!(t.observe(0.0, 900.0), 0);

        // Scrolling away does not un-reveal
        t.observe(5000.0, 900.0);
        assert!(t.is_revealed("hero"));
    }

    #[test]
    fn test_unregistered_ids_count_as_revealed() {
        let t = RevealTracker::default();
        assert!(t.is_revealed("anything"));
    }

    #[test]
    fn test_replacing_the_tracker_drops_pending_registrations() {
        let mut t = tracker();
        t.observe(0.0, 650.0);
        assert!(t.pending_count() > 0);

        // Navigation builds a fresh tracker; the old registrations go
        // with the old value.
        t = RevealTracker::new(vec![RevealTarget::new("other", 0.0, 400.0)]);
        assert_eq!(t.pending_count(), 1);
        assert!(t.is_revealed("grid"));
    }
}
