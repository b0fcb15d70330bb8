use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Every segment of the route at once
    Total,
    /// Exactly one segment, at the current index
    Single,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Where the operator is in the route. Transitions return a new state; nothing mutates in place.
///
/// The index ranges over `[0, route_len - 2]`, the valid segment indices. It only matters for
/// rendering in `Single` mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub current_index: usize,
    pub mode: Mode,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::initial()
    }
}

impl NavigationState {
    pub fn initial() -> Self {
        Self {
            current_index: 0,
            mode: Mode::Total,
        }
    }

    /// A new route invalidates wherever we were.
    pub fn reset(self) -> Self {
        Self::initial()
    }

    /// Entering `Single` mode starts from the first segment.
    pub fn toggle_mode(self) -> Self {
        match self.mode {
            Mode::Total => Self {
                current_index: 0,
                mode: Mode::Single,
            },
            Mode::Single => Self {
                mode: Mode::Total,
                ..self
            },
        }
    }

    /// Saturates at both ends. Does nothing in `Total` mode.
    pub fn step(self, dir: Direction, route_len: usize) -> Self {
        if !self.can_step(dir, route_len) {
            return self;
        }
        let current_index = match dir {
            Direction::Previous => self.current_index - 1,
            Direction::Next => self.current_index + 1,
        };
        Self {
            current_index,
            ..self
        }
    }

    pub fn can_step(self, dir: Direction, route_len: usize) -> bool {
        if self.mode != Mode::Single {
            return false;
        }
        match dir {
            Direction::Previous => self.current_index > 0,
            // There must be a record after the next segment's first record
            Direction::Next => self.current_index + 2 < route_len,
        }
    }

    /// Jumps straight to a segment, as the slider does. The slider's domain should already be
    /// `[0, route_len - 2]`; anything past that is clamped. Does nothing in `Total` mode.
    pub fn scrub_to(self, idx: usize, route_len: usize) -> Self {
        if self.mode != Mode::Single {
            return self;
        }
        // No segments to scrub through
        let max = match route_len.checked_sub(2) {
            Some(max) => max,
            None => return self,
        };
        if idx > max {
            warn!("Scrubbing to segment {idx}, but the last is {max}. Clamping.");
        }
        Self {
            current_index: idx.min(max),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_at(current_index: usize) -> NavigationState {
        NavigationState {
            current_index,
            mode: Mode::Single,
        }
    }

    #[test]
    fn starts_in_total_mode() {
        assert_eq!(
            NavigationState::initial(),
            NavigationState {
                current_index: 0,
                mode: Mode::Total
            }
        );
        assert_eq!(NavigationState::default(), NavigationState::initial());
    }

    #[test]
    fn toggle_twice() {
        let state = single_at(3).toggle_mode();
        assert_eq!(state.mode, Mode::Total);
        let state = state.toggle_mode();
        // Entering single mode always starts over
        assert_eq!(state, single_at(0));

        let total = NavigationState::initial();
        assert_eq!(total.toggle_mode().toggle_mode(), total);
    }

    #[test]
    fn step_saturates() {
        let route_len = 4;

        assert_eq!(single_at(0).step(Direction::Previous, route_len), single_at(0));
        assert_eq!(single_at(0).step(Direction::Next, route_len), single_at(1));
        assert_eq!(single_at(1).step(Direction::Next, route_len), single_at(2));
        // The last segment
        assert_eq!(single_at(2).step(Direction::Next, route_len), single_at(2));
        assert_eq!(single_at(2).step(Direction::Previous, route_len), single_at(1));
    }

    #[test]
    fn step_on_degenerate_routes() {
        for route_len in 0..3 {
            assert_eq!(single_at(0).step(Direction::Next, route_len), single_at(0));
            assert_eq!(single_at(0).step(Direction::Previous, route_len), single_at(0));
        }
    }

    #[test]
    fn step_ignored_in_total_mode() {
        let state = NavigationState::initial();
        assert_eq!(state.step(Direction::Next, 10), state);
        assert!(!state.can_step(Direction::Next, 10));
    }

    #[test]
    fn scrub() {
        assert_eq!(single_at(0).scrub_to(5, 10), single_at(5));
        assert_eq!(single_at(5).scrub_to(0, 10), single_at(0));
        assert_eq!(single_at(0).scrub_to(8, 10), single_at(8));
        assert_eq!(single_at(0).scrub_to(9, 10), single_at(8));
        assert_eq!(single_at(0).scrub_to(3, 0), single_at(0));
        assert_eq!(single_at(0).scrub_to(3, 1), single_at(0));
        assert_eq!(single_at(0).scrub_to(1, 2), single_at(0));

        let total = NavigationState::initial();
        assert_eq!(total.scrub_to(5, 10), total);
    }

    #[test]
    fn reset_from_anywhere() {
        assert_eq!(single_at(7).reset(), NavigationState::initial());
        assert_eq!(
            NavigationState::initial().reset(),
            NavigationState::initial()
        );
    }
}
