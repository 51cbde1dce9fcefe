//! Experience slide carousel with a contact modal.

use tracing::debug;

use crate::error::ContentError;

/// Horizontal edge a slide animates from or to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Slide change animation. Fixed regardless of navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTransition {
    pub enter_from: Side,
    pub exit_to: Side,
}

pub const SLIDE_TRANSITION: SlideTransition = SlideTransition {
    enter_from: Side::Right,
    exit_to: Side::Left,
};

/// Where a click inside the modal overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// The dimmed area around the dialog.
    Backdrop,
    /// Inside the dialog; stops before reaching the backdrop.
    Body,
}

/// Cyclic index over a non-empty slide list plus modal state.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    slides: Vec<T>,
    current: usize,
    modal_open: bool,
}

impl<T> Carousel<T> {
    pub fn new(slides: Vec<T>) -> Result<Self, ContentError> {
        if slides.is_empty() {
            return Err(ContentError::EmptySlides);
        }
        Ok(Self {
            slides,
            current: 0,
            modal_open: false,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &T {
        &self.slides[self.current]
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    /// Render key; changes exactly when the visible slide does.
    pub fn render_key(&self) -> usize {
        self.current
    }

    pub fn transition(&self) -> SlideTransition {
        SLIDE_TRANSITION
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.slides.len();
        debug!(index = self.current, "Next slide");
    }

    pub fn previous(&mut self) {
        let n = self.slides.len();
        self.current = (self.current + n - 1) % n;
        debug!(index = self.current, "Previous slide");
    }

    /// Jumps to slide `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.slides.len(),
            "slide index {index} out of range for {} slides",
            self.slides.len()
        );
        self.current = index;
        debug!(index, "Jump to slide");
    }

    /// Like [`Carousel::jump_to`] but returns `None` when out of range.
    pub fn try_jump_to(&mut self, index: usize) -> Option<usize> {
        if index < self.slides.len() {
            self.current = index;
            Some(index)
        } else {
            None
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Handles a click on the overlay. Only backdrop clicks close it.
    pub fn handle_modal_click(&mut self, target: ModalClick) {
        if target == ModalClick::Backdrop {
            self.close_modal();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel<usize> {
        Carousel::new((0..n).collect()).unwrap()
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            Carousel::<u8>::new(Vec::new()),
            Err(ContentError::EmptySlides)
        ));
    }

    #[test]
    fn test_next_wraps() {
        for n in 1..6 {
            for start in 0..n {
                let mut c = carousel(n);
                c.jump_to(start);
                for calls in 1..(3 * n) {
                    c.next();
                    assert!(c.current_index() < n);
                    assert_eq!(c.current_index(), (start + calls) % n);
                }
            }
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        for n in 1..6 {
            for start in 0..n {
                let mut c = carousel(n);
                c.jump_to(start);
                c.next();
                c.previous();
                assert_eq!(c.current_index(), start);

                c.previous();
                c.next();
                assert_eq!(c.current_index(), start);
            }
        }
    }

    #[test]
    fn test_previous_from_zero_wraps_to_last() {
        let mut c = carousel(2);
        c.previous();
        assert_eq!(c.current_index(), 1);
        assert_eq!(*c.current(), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_jump_out_of_range_panics() {
        carousel(2).jump_to(2);
    }

    #[test]
    fn test_try_jump_to() {
        let mut c = carousel(3);
        assert_eq!(c.try_jump_to(2), Some(2));
        assert_eq!(c.try_jump_to(3), None);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_transition_fixed_for_both_directions() {
        let mut c = carousel(3);
        c.next();
        let forward = c.transition();
        c.previous();
        assert_eq!(c.transition(), forward);
        assert_eq!(forward.enter_from, Side::Right);
        assert_eq!(forward.exit_to, Side::Left);
    }

    #[test]
    fn test_modal_body_click_keeps_open() {
        let mut c = carousel(2);
        c.open_modal();

        c.handle_modal_click(ModalClick::Body);
        assert!(c.is_modal_open());

        c.handle_modal_click(ModalClick::Backdrop);
        assert!(!c.is_modal_open());
    }

    #[test]
    fn test_modal_independent_of_index() {
        let mut c = carousel(2);
        c.open_modal();
        c.next();
        assert!(c.is_modal_open());
        c.close_modal();
        assert_eq!(c.current_index(), 1);
    }
}
