use foundation::math::{Vec2, stable_total_cmp_f64};

/// Pointer distance within which a marker counts as hit.
pub const HIT_RADIUS_PX: f64 = 8.0;

/// A projected, visible marker offered to hit-testing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerPoint {
    /// Stable index into the caller's marker set.
    pub index: usize,
    pub position: Vec2,
}

/// Deterministic marker hit-testing.
///
/// Ordering contract:
/// - The closest marker within `radius` wins.
/// - Distance ties resolve to the lower `index`.
pub fn hit_test(markers: &[MarkerPoint], pointer: Vec2, radius: f64) -> Option<usize> {
    let mut best: Option<(f64, usize)> = None;
    for marker in markers {
        let distance = marker.position.distance(pointer);
        if distance > radius {
            continue;
        }
        best = match best {
            None => Some((distance, marker.index)),
            Some((bd, bi)) => {
                let ord = stable_total_cmp_f64(distance, bd)
                    .then_with(|| marker.index.cmp(&bi));
                if ord.is_lt() {
                    Some((distance, marker.index))
                } else {
                    Some((bd, bi))
                }
            }
        };
    }
    best.map(|(_, index)| index)
}

/// Hover transitions to report upward, in emission order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HoverTransition {
    Leave(usize),
    Enter(usize),
}

/// Exclusive hover state: at most one marker is hovered at a time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HoverTracker {
    current: Option<usize>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Fold a hit-test result into the tracker. A direct move from one
    /// marker to another emits the leave before the enter.
    pub fn update(&mut self, hit: Option<usize>) -> Vec<HoverTransition> {
        if hit == self.current {
            return Vec::new();
        }
        let mut transitions = Vec::with_capacity(2);
        if let Some(previous) = self.current {
            transitions.push(HoverTransition::Leave(previous));
        }
        if let Some(next) = hit {
            transitions.push(HoverTransition::Enter(next));
        }
        self.current = hit;
        transitions
    }

    /// Drop any hover (drag start, marker culled). Emits the leave.
    pub fn clear(&mut self) -> Option<HoverTransition> {
        self.current.take().map(HoverTransition::Leave)
    }
}

#[cfg(test)]
mod tests {
    use super::{HIT_RADIUS_PX, HoverTracker, HoverTransition, MarkerPoint, hit_test};
    use foundation::math::Vec2;

    fn marker(index: usize, x: f64, y: f64) -> MarkerPoint {
        MarkerPoint {
            index,
            position: Vec2::new(x, y),
        }
    }

    #[test]
    fn nearest_marker_wins() {
        let markers = [marker(0, 10.0, 0.0), marker(1, 3.0, 0.0)];
        assert_eq!(hit_test(&markers, Vec2::new(0.0, 0.0), HIT_RADIUS_PX), Some(1));
    }

    #[test]
    fn misses_outside_the_radius() {
        let markers = [marker(0, 100.0, 100.0)];
        assert_eq!(hit_test(&markers, Vec2::new(0.0, 0.0), HIT_RADIUS_PX), None);
    }

    #[test]
    fn ties_break_by_lower_index() {
        let markers = [marker(7, 4.0, 0.0), marker(2, -4.0, 0.0)];
        assert_eq!(hit_test(&markers, Vec2::new(0.0, 0.0), HIT_RADIUS_PX), Some(2));
    }

    #[test]
    fn enter_then_leave() {
        let mut tracker = HoverTracker::new();
        assert_eq!(tracker.update(Some(3)), vec![HoverTransition::Enter(3)]);
        assert_eq!(tracker.current(), Some(3));
        assert_eq!(tracker.update(None), vec![HoverTransition::Leave(3)]);
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn marker_to_marker_emits_leave_before_enter() {
        let mut tracker = HoverTracker::new();
        tracker.update(Some(1));
        assert_eq!(
            tracker.update(Some(2)),
            vec![HoverTransition::Leave(1), HoverTransition::Enter(2)]
        );
    }

    #[test]
    fn unchanged_hover_is_silent() {
        let mut tracker = HoverTracker::new();
        tracker.update(Some(1));
        assert!(tracker.update(Some(1)).is_empty());
    }

    #[test]
    fn clear_reports_the_leave() {
        let mut tracker = HoverTracker::new();
        tracker.update(Some(4));
        assert_eq!(tracker.clear(), Some(HoverTransition::Leave(4)));
        assert_eq!(tracker.clear(), None);
    }
}
