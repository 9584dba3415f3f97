use std::rc::Rc;

use yew::Reducible;

use crate::config::HEADER_SCROLL_THRESHOLD_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    scrolled: bool,
    mobile: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > HEADER_SCROLL_THRESHOLD_PX;
    }

    /// The mobile menu only exists on narrow viewports, so widening past the
    /// breakpoint closes it.
    pub fn on_viewport(&mut self, mobile: bool) {
        self.mobile = mobile;
        if !mobile {
            self.close();
        }
    }

    /// Page scroll is locked only while the open menu is actually shown.
    pub fn locks_scroll(&self) -> bool {
        self.open && self.mobile
    }
}

pub enum MenuAction {
    Toggle,
    Close,
    Scrolled(f64),
    Viewport { mobile: bool },
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            MenuAction::Toggle => next.toggle(),
            MenuAction::Close => next.close(),
            MenuAction::Scrolled(offset) => next.on_scroll(offset),
            MenuAction::Viewport { mobile } => next.on_viewport(mobile),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_then_close() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn scrolled_flips_past_twenty_pixels() {
        let mut menu = MenuState::default();
        menu.on_scroll(20.0);
        assert!(!menu.is_scrolled());
        menu.on_scroll(21.0);
        assert!(menu.is_scrolled());
        menu.on_scroll(0.0);
        assert!(!menu.is_scrolled());
    }

    #[test]
    fn scrolling_leaves_the_menu_alone() {
        let menu = Rc::new(MenuState::default()).reduce(MenuAction::Toggle);
        let menu = menu.reduce(MenuAction::Scrolled(400.0));
        assert!(menu.is_open());
        assert!(menu.is_scrolled());
    }

    #[test]
    fn unchanged_state_keeps_the_same_rc() {
        let menu = Rc::new(MenuState::default());
        let same = menu.clone().reduce(MenuAction::Scrolled(5.0));
        assert!(Rc::ptr_eq(&menu, &same));
    }

    #[test]
    fn widening_past_the_breakpoint_releases_the_scroll_lock() {
        let menu = Rc::new(MenuState::default()).reduce(MenuAction::Viewport { mobile: true });
        let menu = menu.reduce(MenuAction::Toggle);
        assert!(menu.locks_scroll());

        let menu = menu.reduce(MenuAction::Viewport { mobile: false });
        assert!(!menu.is_open());
        assert!(!menu.locks_scroll());
    }

    #[test]
    fn open_menu_on_desktop_does_not_lock_scroll() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        assert!(!menu.locks_scroll());
        menu.on_viewport(true);
        assert!(menu.locks_scroll());
    }
}
