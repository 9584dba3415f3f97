use web_sys::Element;
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::listeners::{listen, viewport_height};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Stay revealed after the first time the element is seen.
    Once,
    /// Hide again when the element leaves the viewport.
    Repeat,
}

/// Whether a box spanning `top..bottom` (viewport coordinates) has climbed
/// `threshold` of the viewport into view.
pub fn in_view(top: f64, bottom: f64, viewport_height: f64, threshold: f64) -> bool {
    top < viewport_height * (1.0 - threshold) && bottom > viewport_height * threshold
}

#[hook]
pub fn use_reveal(node: NodeRef, mode: RevealMode) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, mode)| {
                let node = node.clone();
                let mode = *mode;
                let listener = listen("scroll", move || {
                    let (Some(element), Some(height)) = (node.cast::<Element>(), viewport_height()) else {
                        return;
                    };
                    let rect = element.get_bounding_client_rect();
                    let seen = in_view(rect.top(), rect.bottom(), height, REVEAL_THRESHOLD);
                    match mode {
                        RevealMode::Once if seen => visible.set(true),
                        RevealMode::Once => {}
                        RevealMode::Repeat => visible.set(seen),
                    }
                });
                if let Some(listener) = &listener {
                    listener.fire();
                }
                move || drop(listener)
            },
            (node, mode),
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_the_fold_is_hidden() {
        assert!(!in_view(900.0, 1400.0, 800.0, 0.2));
        assert!(!in_view(700.0, 1200.0, 800.0, 0.2));
    }

    #[test]
    fn scrolled_past_is_hidden() {
        assert!(!in_view(-600.0, -100.0, 800.0, 0.2));
        assert!(!in_view(-600.0, 150.0, 800.0, 0.2));
    }

    #[test]
    fn partially_visible_past_threshold_is_shown() {
        assert!(in_view(600.0, 1100.0, 800.0, 0.2));
        assert!(in_view(-300.0, 200.0, 800.0, 0.2));
        assert!(in_view(0.0, 800.0, 800.0, 0.0));
    }
}
