use std::rc::Rc;

use yew::Reducible;

use crate::config::SWIPE_THRESHOLD_PX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Cyclic position over a fixed deck plus the autoplay and touch bookkeeping
/// around it.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    len: usize,
    current: usize,
    direction: Direction,
    autoplay: bool,
    touch_origin: Option<f64>,
    /// Bumped on every manual move so the autoplay interval restarts from zero.
    generation: u32,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            current: 0,
            direction: Direction::Forward,
            autoplay: true,
            touch_origin: None,
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    fn step_forward(&mut self) {
        self.direction = Direction::Forward;
        self.current = (self.current + 1) % self.len;
    }

    fn step_backward(&mut self) {
        self.direction = Direction::Backward;
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Manual moves restart autoplay from a full interval.
    fn touched(&mut self) {
        self.autoplay = true;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn next(&mut self) {
        self.step_forward();
        self.touched();
    }

    pub fn previous(&mut self) {
        self.step_backward();
        self.touched();
    }

    /// Jumps straight to `index`. Out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = index;
        self.touched();
        true
    }

    /// Autoplay step. Does nothing while paused.
    pub fn tick(&mut self) {
        if self.autoplay {
            self.step_forward();
        }
    }

    pub fn pause(&mut self) {
        self.autoplay = false;
    }

    pub fn resume(&mut self) {
        self.autoplay = true;
    }

    pub fn touch_start(&mut self, x: f64) {
        self.touch_origin = Some(x);
        self.pause();
    }

    /// Ends a drag at `x`. A drag left past the threshold advances, a drag
    /// right goes back, anything shorter is ignored. Autoplay resumes either way.
    pub fn touch_end(&mut self, x: f64) -> Option<Direction> {
        self.resume();
        let origin = self.touch_origin.take()?;
        let delta = origin - x;
        if delta > SWIPE_THRESHOLD_PX {
            self.next();
            Some(Direction::Forward)
        } else if delta < -SWIPE_THRESHOLD_PX {
            self.previous();
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

pub enum CarouselAction {
    Next,
    Previous,
    GoTo(usize),
    Tick,
    Pause,
    Resume,
    TouchStart(f64),
    TouchEnd(f64),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Previous => next.previous(),
            CarouselAction::GoTo(index) => {
                next.go_to(index);
            }
            CarouselAction::Tick => next.tick(),
            CarouselAction::Pause => next.pause(),
            CarouselAction::Resume => next.resume(),
            CarouselAction::TouchStart(x) => next.touch_start(x),
            CarouselAction::TouchEnd(x) => {
                next.touch_end(x);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_to_lands_on_every_index() {
        let mut deck = Carousel::new(5);
        for i in (0..5).rev().chain(0..5) {
            assert!(deck.go_to(i));
            assert_eq!(deck.current(), i);
        }
    }

    #[test]
    fn go_to_infers_direction_and_rejects_out_of_range() {
        let mut deck = Carousel::new(5);
        deck.go_to(3);
        assert_eq!(deck.direction(), Direction::Forward);
        deck.go_to(1);
        assert_eq!(deck.direction(), Direction::Backward);
        deck.go_to(1);
        assert_eq!(deck.direction(), Direction::Backward);

        assert!(!deck.go_to(5));
        assert_eq!(deck.current(), 1);
    }

    #[test]
    fn next_cycles_back_to_start() {
        for len in 1..=6 {
            let mut deck = Carousel::new(len);
            deck.go_to(len / 2);
            let start = deck.current();
            for _ in 0..len {
                deck.next();
            }
            assert_eq!(deck.current(), start, "deck of {len}");
        }
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut deck = Carousel::new(5);
        deck.previous();
        assert_eq!(deck.current(), 4);
        assert_eq!(deck.direction(), Direction::Backward);
        deck.next();
        assert_eq!(deck.current(), 0);
        assert_eq!(deck.direction(), Direction::Forward);
    }

    #[test]
    fn tick_only_advances_while_autoplaying() {
        let mut deck = Carousel::new(3);
        deck.tick();
        assert_eq!(deck.current(), 1);
        deck.pause();
        deck.tick();
        assert_eq!(deck.current(), 1);
        deck.resume();
        deck.tick();
        assert_eq!(deck.current(), 2);
    }

    #[test]
    fn manual_moves_restart_the_autoplay_clock_but_ticks_do_not() {
        let mut deck = Carousel::new(3);
        let g = deck.generation();
        deck.tick();
        assert_eq!(deck.generation(), g);
        deck.next();
        deck.previous();
        deck.go_to(2);
        assert_eq!(deck.generation(), g + 3);
    }

    #[test]
    fn manual_moves_resume_a_paused_deck() {
        let mut deck = Carousel::new(4);
        deck.pause();
        deck.next();
        assert!(deck.is_autoplaying());

        deck.pause();
        deck.previous();
        assert!(deck.is_autoplaying());

        deck.pause();
        assert!(deck.go_to(2));
        assert!(deck.is_autoplaying());

        deck.pause();
        assert!(!deck.go_to(9));
        assert!(!deck.is_autoplaying());
    }

    #[test]
    fn swipe_past_threshold_navigates() {
        let mut deck = Carousel::new(5);
        deck.touch_start(300.0);
        assert!(!deck.is_autoplaying());
        assert_eq!(deck.touch_end(200.0), Some(Direction::Forward));
        assert_eq!(deck.current(), 1);
        assert!(deck.is_autoplaying());

        deck.touch_start(100.0);
        assert_eq!(deck.touch_end(180.0), Some(Direction::Backward));
        assert_eq!(deck.current(), 0);
    }

    #[test]
    fn short_drags_are_ignored() {
        let mut deck = Carousel::new(5);
        deck.touch_start(100.0);
        assert_eq!(deck.touch_end(50.0), None);
        deck.touch_start(100.0);
        assert_eq!(deck.touch_end(150.0), None);
        assert_eq!(deck.current(), 0);
        assert!(deck.is_autoplaying());
    }

    #[test]
    fn touch_end_without_start_just_resumes() {
        let mut deck = Carousel::new(5);
        deck.pause();
        assert_eq!(deck.touch_end(0.0), None);
        assert!(deck.is_autoplaying());
    }

    #[test]
    fn empty_deck_is_clamped_to_one() {
        let mut deck = Carousel::new(0);
        assert_eq!(deck.len(), 1);
        deck.next();
        deck.previous();
        assert_eq!(deck.current(), 0);
    }

    #[test]
    fn reducer_routes_actions() {
        let deck = Rc::new(Carousel::new(4));
        let deck = deck.reduce(CarouselAction::GoTo(2));
        let deck = deck.reduce(CarouselAction::Next);
        assert_eq!(deck.current(), 3);
        let deck = deck.reduce(CarouselAction::Pause);
        let deck = deck.reduce(CarouselAction::Tick);
        assert_eq!(deck.current(), 3);
        let deck = deck.reduce(CarouselAction::Resume);
        let deck = deck.reduce(CarouselAction::Tick);
        assert_eq!(deck.current(), 0);
    }
}
