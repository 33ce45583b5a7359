//! Keyboard and gamepad state per player slot
//!
//! The host fills in fresh device snapshots each frame with `update`; the
//! previous snapshots are kept so "newly pressed" can be answered.

/// Number of local player slots
pub const MAX_PLAYERS: usize = 4;

/// Local player slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerIndex {
    #[default]
    One,
    Two,
    Three,
    Four,
}

impl PlayerIndex {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    Escape,
}

/// Gamepad buttons the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    A,
    Start,
}

/// Keys held during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    pressed: Vec<Key>,
}

impl KeyboardState {
    pub fn with_keys(keys: &[Key]) -> Self {
        Self {
            pressed: keys.to_vec(),
        }
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

/// One gamepad during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GamePadState {
    pub connected: bool,
    pressed: Vec<Button>,
}

impl GamePadState {
    pub fn connected_with(buttons: &[Button]) -> Self {
        Self {
            connected: true,
            pressed: buttons.to_vec(),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_button_down(&self, button: Button) -> bool {
        self.connected && self.pressed.contains(&button)
    }
}

/// Input snapshot handed to screens each frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    current_keyboards: [KeyboardState; MAX_PLAYERS],
    last_keyboards: [KeyboardState; MAX_PLAYERS],
    current_gamepads: [GamePadState; MAX_PLAYERS],
    last_gamepads: [GamePadState; MAX_PLAYERS],
    /// Sticky: a slot stays marked once any gamepad was seen on it
    gamepad_was_connected: [bool; MAX_PLAYERS],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll current snapshots into last and store the new frame's devices
    pub fn update(
        &mut self,
        keyboards: [KeyboardState; MAX_PLAYERS],
        gamepads: [GamePadState; MAX_PLAYERS],
    ) {
        self.last_keyboards = std::mem::replace(&mut self.current_keyboards, keyboards);
        self.last_gamepads = std::mem::replace(&mut self.current_gamepads, gamepads);
        for (seen, pad) in self
            .gamepad_was_connected
            .iter_mut()
            .zip(&self.current_gamepads)
        {
            *seen |= pad.connected;
        }
    }

    /// Convenience for single-player hosts: only slot one gets devices
    pub fn update_single(&mut self, keyboard: KeyboardState, gamepad: GamePadState) {
        let mut keyboards: [KeyboardState; MAX_PLAYERS] = Default::default();
        let mut gamepads: [GamePadState; MAX_PLAYERS] = Default::default();
        keyboards[0] = keyboard;
        gamepads[0] = gamepad;
        self.update(keyboards, gamepads);
    }

    pub fn keyboard(&self, player: PlayerIndex) -> &KeyboardState {
        &self.current_keyboards[player.index()]
    }

    pub fn gamepad(&self, player: PlayerIndex) -> &GamePadState {
        &self.current_gamepads[player.index()]
    }

    pub fn gamepad_was_connected(&self, player: PlayerIndex) -> bool {
        self.gamepad_was_connected[player.index()]
    }

    pub fn is_new_key_press(&self, key: Key, player: PlayerIndex) -> bool {
        let i = player.index();
        self.current_keyboards[i].is_key_down(key) && !self.last_keyboards[i].is_key_down(key)
    }

    pub fn is_new_button_press(&self, button: Button, player: PlayerIndex) -> bool {
        let i = player.index();
        self.current_gamepads[i].is_button_down(button)
            && !self.last_gamepads[i].is_button_down(button)
    }

    /// Escape or Start was pressed this frame
    pub fn is_pause_game(&self, player: PlayerIndex) -> bool {
        self.is_new_key_press(Key::Escape, player) || self.is_new_button_press(Button::Start, player)
    }

    /// The slot had a gamepad at some point and it is gone now
    pub fn gamepad_disconnected(&self, player: PlayerIndex) -> bool {
        !self.gamepad(player).connected && self.gamepad_was_connected(player)
    }
}
