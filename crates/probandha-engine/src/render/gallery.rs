/// Active-image cursor for a gallery carousel.
///
/// Next and previous wrap around at the ends. A cursor over an empty gallery
/// stays at index 0 and ignores every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryCursor {
    len: usize,
    index: usize,
}

impl GalleryCursor {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Cursor over `len` images at `index`, clamped to the last image.
    pub fn at(len: usize, index: usize) -> Self {
        Self {
            len,
            index: index.min(len.saturating_sub(1)),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = if self.index == 0 {
                self.len - 1
            } else {
                self.index - 1
            };
        }
    }

    /// Jumps to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// One-based position for display, e.g. `"2 / 5"`.
    pub fn position_label(&self) -> String {
        if self.len == 0 {
            return String::new();
        }
        format!("{} / {}", self.index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(GalleryCursor::new(3).index(), 0);
    }

    #[test]
    fn at_clamps_to_shorter_gallery() {
        let cur = GalleryCursor::at(2, 2);
        assert_eq!(cur.index(), 1);
        assert_eq!(cur.position_label(), "2 / 2");
        assert_eq!(GalleryCursor::at(0, 3).index(), 0);
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut cur = GalleryCursor::new(3);
        cur.select(2);
        cur.next();
        assert_eq!(cur.index(), 0);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut cur = GalleryCursor::new(3);
        cur.previous();
        assert_eq!(cur.index(), 2);
    }

    #[test]
    fn next_and_previous_step_by_one() {
        let mut cur = GalleryCursor::new(4);
        cur.next();
        cur.next();
        assert_eq!(cur.index(), 2);
        cur.previous();
        assert_eq!(cur.index(), 1);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut cur = GalleryCursor::new(2);
        cur.select(1);
        cur.select(5);
        assert_eq!(cur.index(), 1);
    }

    #[test]
    fn single_image_gallery_stays_put() {
        let mut cur = GalleryCursor::new(1);
        cur.next();
        assert_eq!(cur.index(), 0);
        cur.previous();
        assert_eq!(cur.index(), 0);
    }

    #[test]
    fn empty_gallery_is_inert() {
        let mut cur = GalleryCursor::new(0);
        cur.next();
        cur.previous();
        cur.select(0);
        assert_eq!(cur.index(), 0);
        assert!(cur.is_empty());
        assert_eq!(cur.position_label(), "");
    }

    #[test]
    fn position_label_is_one_based() {
        let mut cur = GalleryCursor::new(5);
        cur.next();
        assert_eq!(cur.position_label(), "2 / 5");
    }
}
