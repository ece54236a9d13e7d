use crate::catalog::{filter_projects, CategoryFilter, Project};

/// Index into a list whose length can change; `next` and `previous` wrap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
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
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }
}

/// Filtered view over the catalog plus the carousel cursor for it.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectBrowser {
    catalog: &'static [Project],
    filter: CategoryFilter,
    visible: Vec<&'static Project>,
    cursor: Carousel,
}

impl ProjectBrowser {
    pub fn new(catalog: &'static [Project]) -> Self {
        let visible = filter_projects(catalog, CategoryFilter::All);
        let cursor = Carousel::new(visible.len());
        Self {
            catalog,
            filter: CategoryFilter::All,
            visible,
            cursor,
        }
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn visible(&self) -> &[&'static Project] {
        &self.visible
    }

    pub fn cursor(&self) -> Carousel {
        self.cursor
    }

    pub fn current(&self) -> Option<&'static Project> {
        self.visible.get(self.cursor.index()).copied()
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.visible = filter_projects(self.catalog, filter);
        self.cursor.reset(self.visible.len());
    }

    pub fn next(&mut self) {
        self.cursor.next();
    }

    pub fn previous(&mut self) {
        self.cursor.previous();
    }

    pub fn select(&mut self, index: usize) {
        self.cursor.select(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{all_projects, Category};

    #[test]
    fn next_wraps_to_start() {
        let mut carousel = Carousel::new(3);
        carousel.select(2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn previous_wraps_to_end() {
        let mut carousel = Carousel::new(3);
        carousel.previous();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.previous();
        carousel.select(1);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn out_of_range_dot_is_ignored() {
        let mut carousel = Carousel::new(3);
        carousel.select(1);
        carousel.select(7);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn changing_filter_resets_cursor() {
        let mut browser = ProjectBrowser::new(all_projects());
        browser.next();
        browser.next();
        assert_eq!(browser.cursor().index(), 2);

        browser.set_filter(CategoryFilter::Only(Category::WebApp));
        assert_eq!(browser.cursor().index(), 0);
        assert_eq!(browser.cursor().len(), 2);
        assert_eq!(browser.current().map(|p| p.title), Some("Hakeem Art Academy Website"));
    }

    #[test]
    fn cursor_wraps_over_filtered_length() {
        let mut browser = ProjectBrowser::new(all_projects());
        browser.set_filter(CategoryFilter::Only(Category::WebApp));
        browser.next();
        browser.next();
        assert_eq!(browser.cursor().index(), 0);
        browser.previous();
        assert_eq!(browser.current().map(|p| p.title), Some("Car Booking Web App"));
    }
}
