//! Result paging

/// How many results of a segment are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    visible: usize,
}

impl Pager {
    /// A pager showing one page; a zero page size is treated as one
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self { page_size, visible: page_size }
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn visible(&self) -> usize {
        self.visible
    }

    /// Show one more page, clamped to `[1, total]`
    pub fn show_more(&mut self, total: usize) {
        self.visible = (self.visible + self.page_size).min(total).max(1);
    }

    /// Whether results beyond the visible ones exist
    #[must_use]
    pub const fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// Back to the first page
    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_more_clamps_to_total() {
        let mut pager = Pager::new(4);
        assert_eq!(pager.visible(), 4);
        pager.show_more(10);
        assert_eq!(pager.visible(), 8);
        pager.show_more(10);
        assert_eq!(pager.visible(), 10);
        pager.show_more(10);
        assert_eq!(pager.visible(), 10);
    }

    #[test]
    fn test_has_more() {
        let mut pager = Pager::new(4);
        assert!(pager.has_more(5));
        assert!(!pager.has_more(4));
        pager.show_more(5);
        assert!(!pager.has_more(5));
    }

    #[test]
    fn test_show_more_with_no_results() {
        let mut pager = Pager::new(4);
        pager.show_more(0);
        assert_eq!(pager.visible(), 1);
    }

    #[test]
    fn test_reset() {
        let mut pager = Pager::new(3);
        pager.show_more(10);
        pager.reset();
        assert_eq!(pager.visible(), 3);
    }

    #[test]
    fn test_zero_page_size() {
        let pager = Pager::new(0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.visible(), 1);
    }
}
