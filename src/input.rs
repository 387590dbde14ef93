//! Backend-independent snapshot of the keys the game cares about.

/// Which controls are held down this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub serve: bool,
}
