/// What a key press did to an open gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    Closed,
    Moved(usize),
    Ignored,
}

/// Screenshot carousel for one project. Closed until [`GalleryState::open`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryState {
    open: bool,
    index: usize,
    len: usize,
}

impl GalleryState {
    pub fn new(len: usize) -> Self {
        Self {
            open: false,
            index: 0,
            len,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
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

    /// Opening always starts from the first image.
    pub fn open(&mut self) {
        self.open = true;
        self.index = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Maps a `KeyboardEvent.key` value onto the gallery.
    pub fn handle_key(&mut self, key: &str) -> GalleryAction {
        if !self.open {
            return GalleryAction::Ignored;
        }
        match key {
            "Escape" => {
                self.close();
                GalleryAction::Closed
            }
            "ArrowLeft" if self.len > 1 => {
                self.prev();
                GalleryAction::Moved(self.index)
            }
            "ArrowRight" if self.len > 1 => {
                self.next();
                GalleryAction::Moved(self.index)
            }
            _ => GalleryAction::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps_both_ways() {
        let mut gallery = GalleryState::new(4);
        gallery.open();
        gallery.prev();
        assert_eq!(gallery.index(), 3);
        gallery.next();
        assert_eq!(gallery.index(), 0);
        gallery.next();
        gallery.next();
        assert_eq!(gallery.index(), 2);
    }

    #[test]
    fn test_reopen_starts_at_first_image() {
        let mut gallery = GalleryState::new(6);
        gallery.open();
        gallery.select(4);
        gallery.close();
        gallery.open();
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut gallery = GalleryState::new(3);
        assert_eq!(gallery.handle_key("ArrowRight"), GalleryAction::Ignored);
        assert_eq!(gallery.handle_key("Escape"), GalleryAction::Ignored);
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut gallery = GalleryState::new(3);
        gallery.open();
        assert_eq!(gallery.handle_key("ArrowLeft"), GalleryAction::Moved(2));
        assert_eq!(gallery.handle_key("ArrowRight"), GalleryAction::Moved(0));
        assert_eq!(gallery.handle_key("Enter"), GalleryAction::Ignored);
        assert_eq!(gallery.handle_key("Escape"), GalleryAction::Closed);
        assert!(!gallery.is_open());
    }

    #[test]
    fn test_empty_and_single_image_galleries_stay_put() {
        let mut empty = GalleryState::new(0);
        empty.open();
        empty.next();
        empty.select(2);
        assert_eq!(empty.index(), 0);

        let mut single = GalleryState::new(1);
        single.open();
        assert_eq!(single.handle_key("ArrowRight"), GalleryAction::Ignored);
        assert_eq!(single.index(), 0);
    }
}
