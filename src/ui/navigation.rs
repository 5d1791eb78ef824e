//! Shared navigation helpers for list and text views
//!
//! Pure functions over (selection, scroll) pairs. Views apply the results.

/// Next index, clamped to `max_index`
pub fn select_next(selected: usize, max_index: usize) -> usize {
    selected.saturating_add(1).min(max_index)
}

/// Previous index, clamped to 0
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
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
        selected - visible_count + 1
    } else {
        scroll_offset
    }
}

/// Largest scroll offset that still fills the window
pub fn max_scroll(total: usize, visible_count: usize) -> usize {
    total.saturating_sub(visible_count)
}

/// Scroll a text view by half a page, clamped to the content
pub fn half_page(scroll: usize, total: usize, visible_count: usize, down: bool) -> usize {
    let step = (visible_count / 2).max(1);
    if down {
        scroll
            .saturating_add(step)
            .min(max_scroll(total, visible_count))
    } else {
        scroll.saturating_sub(step)
    }
}
