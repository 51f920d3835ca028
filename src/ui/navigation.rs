//! Shared navigation helpers for list-based views
//!
//! Pure functions computing new selection/scroll state. Each view calls
//! them with its own state and applies the result.

/// Move selection down by one, clamped to `max_index`
pub fn select_next(selected: usize, max_index: usize) -> usize {
    selected.saturating_add(1).min(max_index)
}

/// Move selection up by one
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Index of the last item (0 for an empty list)
pub fn last_index(len: usize) -> usize {
    len.saturating_sub(1)
}

/// Clamp a selection after the list was replaced
pub fn clamp_selection(selected: usize, len: usize) -> usize {
    selected.min(last_index(len))
}

/// Next position in a ring of `len` positions
pub fn cycle_next(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Scroll offset that keeps `selected` inside a window of `visible_count` rows
///
/// A zero-height window leaves the offset unchanged.
pub fn adjust_scroll(selected: usize, scroll_offset: usize, visible_count: usize) -> usize {
    if visible_count == 0 {
        return scroll_offset;
    }
    if selected < scroll_offset {
        selected
    } else if selected >= scroll_offset + visible_count {
        selected + 1 - visible_count
    } else {
        scroll_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_next_clamps() {
        assert_eq!(select_next(0, 3), 1);
        assert_eq!(select_next(3, 3), 3);
        assert_eq!(select_next(0, 0), 0);
    }

    #[test]
    fn test_select_prev_saturates() {
        assert_eq!(select_prev(2), 1);
        assert_eq!(select_prev(0), 0);
    }

    #[test]
    fn test_clamp_selection_after_shrink() {
        assert_eq!(clamp_selection(7, 3), 2);
        assert_eq!(clamp_selection(1, 3), 1);
        assert_eq!(clamp_selection(4, 0), 0);
    }

    #[test]
    fn test_cycle_next_wraps() {
        assert_eq!(cycle_next(0, 3), 1);
        assert_eq!(cycle_next(2, 3), 0);
        assert_eq!(cycle_next(5, 0), 0);
    }

    #[test]
    fn test_adjust_scroll() {
        assert_eq!(adjust_scroll(3, 0, 10), 0);
        assert_eq!(adjust_scroll(2, 5, 10), 2);
        assert_eq!(adjust_scroll(15, 0, 10), 6);
        assert_eq!(adjust_scroll(10, 0, 10), 1);
        assert_eq!(adjust_scroll(5, 3, 0), 3);
    }
}
