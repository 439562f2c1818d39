//! Viewport and scroll-position helpers.
//!
//! Coordinates are signed so elements scrolled above or left of the viewport
//! can be described.

/// An element's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Bounds {
    /// Build bounds from an origin and a size.
    pub fn new(top: i32, left: i32, width: i32, height: i32) -> Self {
        Self {
            top,
            left,
            bottom: top + height,
            right: left + width,
        }
    }
}

impl From<ratatui::layout::Rect> for Bounds {
    fn from(rect: ratatui::layout::Rect) -> Self {
        Bounds::new(
            i32::from(rect.y),
            i32::from(rect.x),
            i32::from(rect.width),
            i32::from(rect.height),
        )
    }
}

/// The visible page area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Whether `bounds` lies fully inside the viewport.
pub fn is_in_view(bounds: Bounds, viewport: Viewport) -> bool {
    bounds.top >= 0
        && bounds.left >= 0
        && bounds.bottom <= viewport.height
        && bounds.right <= viewport.width
}

/// A container with its own vertical scroll position.
pub trait ScrollArea {
    /// Height of the visible content area.
    fn client_height(&self) -> i32;

    /// Full height of the content, visible or not.
    fn scroll_height(&self) -> i32;

    /// Rendered height of the container itself. Defaults to the client
    /// height, which holds for containers without borders.
    fn offset_height(&self) -> i32 {
        self.client_height()
    }

    /// Current vertical scroll offset.
    fn scroll_top(&self) -> i32;

    /// Scroll so that `top` is the first visible content row.
    fn scroll_to(&mut self, top: i32);
}

/// Whether the content overflows the container's visible area.
pub fn is_scrollable(area: &impl ScrollArea) -> bool {
    area.client_height() < area.scroll_height()
}

/// A child's position inside its scrolling parent's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildMetrics {
    pub offset_top: i32,
    pub offset_height: i32,
}

/// Scroll `parent` the minimum amount needed to show `child`.
///
/// A child above the visible band is aligned to its top; a child extending
/// below it is aligned to its bottom. A child already inside the band leaves
/// the parent untouched.
pub fn maintain_scroll_visibility(child: ChildMetrics, parent: &mut impl ScrollArea) {
    let scroll_top = parent.scroll_top();
    let parent_height = parent.offset_height();

    if child.offset_top < scroll_top {
        parent.scroll_to(child.offset_top);
    } else if child.offset_top + child.offset_height > scroll_top + parent_height {
        parent.scroll_to(child.offset_top - parent_height + child.offset_height);
    }
}

/// Scroll state of a listbox whose options are equally tall rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListboxScroll {
    scroll_top: i32,
    client_height: i32,
    row_height: i32,
    rows: usize,
}

impl ListboxScroll {
    /// A listbox showing `visible_rows` rows of `row_height` each.
    pub fn new(rows: usize, visible_rows: usize, row_height: i32) -> Self {
        let row_height = row_height.max(1);
        Self {
            scroll_top: 0,
            client_height: to_i32(visible_rows).saturating_mul(row_height),
            row_height,
            rows,
        }
    }

    /// Metrics of the option at `index`.
    pub fn child(&self, index: usize) -> ChildMetrics {
        ChildMetrics {
            offset_top: to_i32(index).saturating_mul(self.row_height),
            offset_height: self.row_height,
        }
    }

    /// Index of the first row at least partly visible.
    pub fn first_visible_row(&self) -> usize {
        usize::try_from(self.scroll_top / self.row_height).unwrap_or(0)
    }

    /// Number of rows that fit in the visible area.
    pub fn visible_rows(&self) -> usize {
        usize::try_from(self.client_height / self.row_height).unwrap_or(0)
    }

    pub fn row_height(&self) -> i32 {
        self.row_height
    }
}

impl ScrollArea for ListboxScroll {
    fn client_height(&self) -> i32 {
        self.client_height
    }

    fn scroll_height(&self) -> i32 {
        to_i32(self.rows).saturating_mul(self.row_height)
    }

    fn scroll_top(&self) -> i32 {
        self.scroll_top
    }

    fn scroll_to(&mut self, top: i32) {
        let max = (self.scroll_height() - self.client_height).max(0);
        self.scroll_top = top.clamp(0, max);
    }
}

fn to_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every scroll request.
    struct FakeParent {
        scroll_top: i32,
        height: i32,
        content: i32,
        calls: Vec<i32>,
    }

    impl FakeParent {
        fn new(scroll_top: i32, height: i32) -> Self {
            Self {
                scroll_top,
                height,
                content: 1000,
                calls: Vec::new(),
            }
        }
    }

    impl ScrollArea for FakeParent {
        fn client_height(&self) -> i32 {
            self.height
        }
        fn scroll_height(&self) -> i32 {
            self.content
        }
        fn scroll_top(&self) -> i32 {
            self.scroll_top
        }
        fn scroll_to(&mut self, top: i32) {
            self.calls.push(top);
            self.scroll_top = top;
        }
    }

    #[test]
    fn fully_visible_element_is_in_view() {
        let vp = Viewport::new(80, 24);
        assert!(is_in_view(Bounds::new(0, 0, 80, 24), vp));
        assert!(is_in_view(Bounds::new(10, 5, 20, 1), vp));
    }

    #[test]
    fn element_crossing_any_edge_is_not_in_view() {
        let vp = Viewport::new(80, 24);
        assert!(!is_in_view(Bounds::new(-1, 0, 10, 1), vp));
        assert!(!is_in_view(Bounds::new(0, -1, 10, 1), vp));
        assert!(!is_in_view(Bounds::new(23, 0, 10, 2), vp));
        assert!(!is_in_view(Bounds::new(0, 75, 10, 1), vp));
    }

    #[test]
    fn scrollable_when_content_overflows() {
        let parent = FakeParent::new(0, 100);
        assert!(is_scrollable(&parent));
        let fits = FakeParent {
            content: 100,
            ..FakeParent::new(0, 100)
        };
        assert!(!is_scrollable(&fits));
    }

    #[test]
    fn child_inside_band_does_not_scroll() {
        let mut parent = FakeParent::new(40, 100);
        maintain_scroll_visibility(
            ChildMetrics {
                offset_top: 60,
                offset_height: 20,
            },
            &mut parent,
        );
        assert!(parent.calls.is_empty());
    }

    #[test]
    fn child_above_band_aligns_to_top() {
        let mut parent = FakeParent::new(100, 100);
        maintain_scroll_visibility(
            ChildMetrics {
                offset_top: 60,
                offset_height: 20,
            },
            &mut parent,
        );
        assert_eq!(parent.calls, vec![60]);
    }

    #[test]
    fn child_below_band_aligns_to_bottom() {
        let mut parent = FakeParent::new(0, 100);
        maintain_scroll_visibility(
            ChildMetrics {
                offset_top: 140,
                offset_height: 20,
            },
            &mut parent,
        );
        // childTop - parentHeight + childHeight
        assert_eq!(parent.calls, vec![60]);
    }

    #[test]
    fn listbox_scroll_reports_rows() {
        let mut lb = ListboxScroll::new(30, 10, 1);
        assert!(is_scrollable(&lb));
        assert_eq!(lb.visible_rows(), 10);
        assert_eq!(lb.child(12), ChildMetrics { offset_top: 12, offset_height: 1 });

        maintain_scroll_visibility(lb.child(12), &mut lb);
        assert_eq!(lb.scroll_top(), 3);
        assert_eq!(lb.first_visible_row(), 3);
    }

    #[test]
    fn listbox_scroll_clamps_to_content() {
        let mut lb = ListboxScroll::new(12, 10, 2);
        lb.scroll_to(100);
        assert_eq!(lb.scroll_top(), 4);
        lb.scroll_to(-5);
        assert_eq!(lb.scroll_top(), 0);
    }

    #[test]
    fn short_listbox_is_not_scrollable() {
        let lb = ListboxScroll::new(3, 10, 1);
        assert!(!is_scrollable(&lb));
    }
}
