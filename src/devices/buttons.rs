//! Brick button interface
//!
//! Button state is owned by an input watcher running on its own clock; the
//! scheduler only reads it. Implementations must therefore be safe to read
//! from another thread.

/// Buttons on the EV3 brick face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Center,
    Back,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Center,
        Button::Back,
    ];
}

/// Debounced button state with edge detection.
pub trait ButtonSource: Send + Sync {
    /// Button went down since the last time this was asked (edge).
    fn is_pressed(&self, button: Button) -> bool;

    /// Button went up since the last time this was asked (edge).
    fn is_released(&self, button: Button) -> bool;

    /// Button is currently held (level).
    fn is_down(&self, button: Button) -> bool;

    /// Button is currently not held (level).
    fn is_up(&self, button: Button) -> bool {
        !self.is_down(button)
    }

    /// Every button currently held
    fn buttons_down(&self) -> Vec<Button> {
        Button::ALL
            .into_iter()
            .filter(|b| self.is_down(*b))
            .collect()
    }
}
