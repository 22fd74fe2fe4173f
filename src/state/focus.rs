/// Logical focus model
///
/// The page has no native focus traversal, so focus is explicit state: a
/// target on the page (a filter control or a grid item) or, while the modal
/// is open, one of the modal controls. The view renders the focused target
/// with a highlight; the keyboard handlers move it.

/// A focusable target on the gallery page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFocus {
    /// Filter control at the given position in the category set
    Filter(usize),
    /// Grid item at the given position in the filtered view
    Photo(usize),
}

/// A focusable control inside the detail modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalControl {
    Close,
    Previous,
    Next,
}

/// Roving-focus movement inside the filter tablist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablistMove {
    /// ArrowLeft / ArrowUp
    Previous,
    /// ArrowRight / ArrowDown
    Next,
    /// Home
    First,
    /// End
    Last,
}

/// Advance the page focus by one Tab press.
///
/// Tab order is every filter control followed by every grid item, wrapping
/// at both ends; Shift+Tab walks the same cycle backwards. With nothing
/// focusable the focus stays empty.
pub fn cycle_page_focus(
    current: Option<PageFocus>,
    filter_count: usize,
    photo_count: usize,
    backwards: bool,
) -> Option<PageFocus> {
    let total = filter_count + photo_count;
    if total == 0 {
        return None;
    }

    let flat = |focus: PageFocus| -> usize {
        match focus {
            PageFocus::Filter(i) => i.min(filter_count.saturating_sub(1)),
            PageFocus::Photo(i) => filter_count + i.min(photo_count.saturating_sub(1)),
        }
    };

    let position = match current {
        // First Tab lands on the first (or last, going backwards) target.
        None => {
            if backwards {
                total - 1
            } else {
                0
            }
        }
        Some(focus) => {
            let at = flat(focus);
            if backwards {
                (at + total - 1) % total
            } else {
                (at + 1) % total
            }
        }
    };

    if position < filter_count {
        Some(PageFocus::Filter(position))
    } else {
        Some(PageFocus::Photo(position - filter_count))
    }
}

/// Roving focus within the filter tablist, with wraparound at both ends.
/// Moving never activates a filter; activation stays on Enter/Space.
pub fn tablist_target(movement: TablistMove, current: usize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let target = match movement {
        TablistMove::Previous => {
            if current > 0 {
                current - 1
            } else {
                last
            }
        }
        TablistMove::Next => {
            if current < last {
                current + 1
            } else {
                0
            }
        }
        TablistMove::First => 0,
        TablistMove::Last => last,
    };
    Some(target)
}

/// The modal's focusable controls for the given navigation state.
///
/// Recomputed on every Tab press: a navigation control that is disabled at
/// the current bounds drops out of the cycle, exactly like a disabled
/// button leaves the tab order.
pub fn modal_focus_ring(active_index: usize, photo_count: usize) -> Vec<ModalControl> {
    let mut ring = vec![ModalControl::Close];
    if active_index > 0 {
        ring.push(ModalControl::Previous);
    }
    if active_index + 1 < photo_count {
        ring.push(ModalControl::Next);
    }
    ring
}

/// Move within the modal focus ring: Tab at the last control wraps to the
/// first, Shift+Tab at the first wraps to the last. A focused control that
/// left the ring (e.g. Previous after navigating to the first photo) is
/// treated as if focus sat on the close control.
pub fn cycle_modal_focus(
    ring: &[ModalControl],
    current: Option<ModalControl>,
    backwards: bool,
) -> Option<ModalControl> {
    if ring.is_empty() {
        return None;
    }
    let at = current
        .and_then(|control| ring.iter().position(|c| *c == control))
        .unwrap_or(0);
    let next = if backwards {
        (at + ring.len() - 1) % ring.len()
    } else {
        (at + 1) % ring.len()
    };
    Some(ring[next])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_walks_filters_then_photos_and_wraps() {
        let mut focus = None;
        let mut seen = Vec::new();
        for _ in 0..6 {
            focus = cycle_page_focus(focus, 4, 2, false);
            seen.push(focus.unwrap());
        }
        assert_eq!(
            seen,
            vec![
                PageFocus::Filter(0),
                PageFocus::Filter(1),
                PageFocus::Filter(2),
                PageFocus::Filter(3),
                PageFocus::Photo(0),
                PageFocus::Photo(1),
            ]
        );
        // One more Tab wraps back to the first filter.
        assert_eq!(
            cycle_page_focus(focus, 4, 2, false),
            Some(PageFocus::Filter(0))
        );
    }

    #[test]
    fn shift_tab_wraps_to_the_last_target() {
        assert_eq!(
            cycle_page_focus(Some(PageFocus::Filter(0)), 4, 2, true),
            Some(PageFocus::Photo(1))
        );
        assert_eq!(cycle_page_focus(None, 4, 2, true), Some(PageFocus::Photo(1)));
    }

    #[test]
    fn empty_page_has_no_focus_target() {
        assert_eq!(cycle_page_focus(None, 0, 0, false), None);
    }

    #[test]
    fn focus_on_vanished_photo_clamps_into_range() {
        // Focus sat on photo 5, the view shrank to 2 items.
        assert_eq!(
            cycle_page_focus(Some(PageFocus::Photo(5)), 4, 2, false),
            Some(PageFocus::Filter(0))
        );
    }

    #[test]
    fn tablist_arrows_wrap_both_ways() {
        assert_eq!(tablist_target(TablistMove::Previous, 0, 4), Some(3));
        assert_eq!(tablist_target(TablistMove::Next, 3, 4), Some(0));
        assert_eq!(tablist_target(TablistMove::Previous, 2, 4), Some(1));
        assert_eq!(tablist_target(TablistMove::Next, 1, 4), Some(2));
    }

    #[test]
    fn tablist_home_and_end() {
        assert_eq!(tablist_target(TablistMove::First, 2, 4), Some(0));
        assert_eq!(tablist_target(TablistMove::Last, 1, 4), Some(3));
        assert_eq!(tablist_target(TablistMove::First, 0, 0), None);
    }

    #[test]
    fn modal_ring_drops_disabled_controls() {
        assert_eq!(
            modal_focus_ring(0, 3),
            vec![ModalControl::Close, ModalControl::Next]
        );
        assert_eq!(
            modal_focus_ring(2, 3),
            vec![ModalControl::Close, ModalControl::Previous]
        );
        assert_eq!(
            modal_focus_ring(1, 3),
            vec![
                ModalControl::Close,
                ModalControl::Previous,
                ModalControl::Next
            ]
        );
        // Single photo: only the close control remains.
        assert_eq!(modal_focus_ring(0, 1), vec![ModalControl::Close]);
    }

    #[test]
    fn modal_focus_wraps_in_both_directions() {
        let ring = modal_focus_ring(1, 3);
        assert_eq!(
            cycle_modal_focus(&ring, Some(ModalControl::Next), false),
            Some(ModalControl::Close)
        );
        assert_eq!(
            cycle_modal_focus(&ring, Some(ModalControl::Close), true),
            Some(ModalControl::Next)
        );
    }

    #[test]
    fn focus_on_control_outside_ring_recovers() {
        // Previous was focused, then navigation reached index 0 and the
        // control dropped out of the ring.
        let ring = modal_focus_ring(0, 3);
        assert_eq!(
            cycle_modal_focus(&ring, Some(ModalControl::Previous), false),
            Some(ModalControl::Next)
        );
    }
}
