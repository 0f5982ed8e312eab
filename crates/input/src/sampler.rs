//! Key sampler - turns a stream of key events into one `InputFrame` per tick.
//!
//! Tracks two things per button:
//!
//! - **held**: the last Press/Repeat time. A button stays held until a Release
//!   arrives (only honoured when the terminal is known to send them) or until
//!   no Press/Repeat was seen for the hold timeout.
//! - **pressed**: a Press/Repeat arrived since the last frame was taken.
//!
//! The platformer reads held state for movement so a key can be kept down;
//! the puzzle reads presses so every key event (including terminal
//! auto-repeat) is one action.
//!
//! Time is passed in as milliseconds so the sampler can be driven by tests.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{map_key, Button, Layout};
use crate::types::InputFrame;

/// After this long without a Press/Repeat a key counts as released.
pub const DEFAULT_HOLD_TIMEOUT_MS: u64 = 160;

#[derive(Debug, Clone)]
pub struct KeySampler {
    layout: Layout,
    last_active: [Option<u64>; Button::COUNT],
    pressed: [bool; Button::COUNT],
    hold_timeout_ms: u64,
    /// Honor Release events. Only set when the terminal reports them.
    pub honor_release: bool,
}

impl KeySampler {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            last_active: [None; Button::COUNT],
            pressed: [false; Button::COUNT],
            hold_timeout_ms: DEFAULT_HOLD_TIMEOUT_MS,
            honor_release: false,
        }
    }

    pub fn with_hold_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.hold_timeout_ms = timeout_ms;
        self
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Feed one key event observed at `now_ms`.
    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64) {
        let Some(button) = map_key(self.layout, key) else {
            return;
        };
        match key.kind {
            KeyEventKind::Release if self.honor_release => self.release(button),
            KeyEventKind::Release => {}
            _ => self.press(button, now_ms),
        }
    }

    pub fn press(&mut self, button: Button, now_ms: u64) {
        self.last_active[button.index()] = Some(now_ms);
        self.pressed[button.index()] = true;
    }

    pub fn release(&mut self, button: Button) {
        self.last_active[button.index()] = None;
    }

    pub fn is_held(&self, button: Button, now_ms: u64) -> bool {
        self.last_active[button.index()]
            .is_some_and(|t| now_ms.saturating_sub(t) < self.hold_timeout_ms)
    }

    /// Feed one terminal event. Returns true for a resize.
    pub fn handle_event(&mut self, event: Event, now_ms: u64) -> bool {
        match event {
            Event::Key(key) => {
                self.handle_key(key, now_ms);
                false
            }
            Event::Resize(..) => true,
            _ => false,
        }
    }

    /// Read every pending terminal event without blocking. Returns true when
    /// any of them was a resize, so the caller can repaint from scratch.
    pub fn drain_terminal(&mut self, now_ms: u64) -> io::Result<bool> {
        let mut resized = false;
        while event::poll(Duration::ZERO)? {
            resized |= self.handle_event(event::read()?, now_ms);
        }
        Ok(resized)
    }

    /// Held movement plus edge-triggered reset/quit; clears pending presses.
    pub fn take_held_frame(&mut self, now_ms: u64) -> InputFrame {
        let held = |b| self.is_held(b, now_ms) || self.pressed[Button::index(b)];
        let frame = InputFrame {
            left: held(Button::Left),
            right: held(Button::Right),
            jump: held(Button::Jump),
            down: held(Button::Down),
            reset: self.pressed[Button::Reset.index()],
            quit: self.pressed[Button::Quit.index()],
            ..InputFrame::IDLE
        };
        self.pressed = [false; Button::COUNT];
        frame
    }

    /// Buttons pressed since the last take; clears them.
    pub fn take_pressed_frame(&mut self) -> InputFrame {
        let p = self.pressed;
        self.pressed = [false; Button::COUNT];
        InputFrame {
            left: p[Button::Left.index()],
            right: p[Button::Right.index()],
            jump: p[Button::Jump.index()],
            down: p[Button::Down.index()],
            rotate: p[Button::Rotate.index()],
            hard_drop: p[Button::HardDrop.index()],
            pause: p[Button::Pause.index()],
            reset: p[Button::Reset.index()],
            quit: p[Button::Quit.index()],
        }
    }

    /// Frame in the style `layout` expects
    pub fn take_frame(&mut self, now_ms: u64) -> InputFrame {
        match self.layout {
            Layout::Platformer => self.take_held_frame(now_ms),
            Layout::Puzzle => self.take_pressed_frame(),
        }
    }
}
