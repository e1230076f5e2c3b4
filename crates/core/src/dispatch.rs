//! Callback dispatch.
//!
//! One ordered subscriber list per category. Registration order is invocation
//! order and the same closure may be registered more than once. Every
//! registration returns a [`SubscriberId`] that can later be passed to
//! [`Subscribers::remove`].
//!
//! Key and button callbacks receive a shared [`InputState`] reference, so a
//! callback can inspect the tables mid-commit but cannot feed new input back
//! into the queue being replayed.

use crate::state::InputState;
use crate::types::{KeyCode, Motion, MouseButton};

pub type KeyCallback = Box<dyn FnMut(KeyCode, &InputState)>;
pub type ButtonCallback = Box<dyn FnMut(MouseButton, &InputState)>;
pub type MotionCallback = Box<dyn FnMut(Motion)>;
pub type WheelCallback = Box<dyn FnMut(i32)>;

/// Handle for one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl SubscriberId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Subscriber category, in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    KeyDown,
    KeyUp,
    ButtonDown,
    ButtonUp,
    Motion,
    Wheel,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::KeyDown => "keyDown",
            Category::KeyUp => "keyUp",
            Category::ButtonDown => "buttonDown",
            Category::ButtonUp => "buttonUp",
            Category::Motion => "motion",
            Category::Wheel => "wheel",
        }
    }
}

struct Entry<F> {
    id: SubscriberId,
    callback: F,
}

fn remove_entry<F>(list: &mut Vec<Entry<F>>, id: SubscriberId) -> bool {
    match list.iter().position(|e| e.id == id) {
        Some(pos) => {
            // `remove`, not `swap_remove`: the rest must keep their order.
            list.remove(pos);
            true
        }
        None => false,
    }
}

#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    key_down: Vec<Entry<KeyCallback>>,
    key_up: Vec<Entry<KeyCallback>>,
    button_down: Vec<Entry<ButtonCallback>>,
    button_up: Vec<Entry<ButtonCallback>>,
    motion: Vec<Entry<MotionCallback>>,
    wheel: Vec<Entry<WheelCallback>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self, category: Category) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        log::debug!("subscribed {} callback #{}", category.as_str(), id.0);
        id
    }

    pub fn add_key_down(&mut self, callback: KeyCallback) -> SubscriberId {
        let id = self.allocate_id(Category::KeyDown);
        self.key_down.push(Entry { id, callback });
        id
    }

    pub fn add_key_up(&mut self, callback: KeyCallback) -> SubscriberId {
        let id = self.allocate_id(Category::KeyUp);
        self.key_up.push(Entry { id, callback });
        id
    }

    pub fn add_button_down(&mut self, callback: ButtonCallback) -> SubscriberId {
        let id = self.allocate_id(Category::ButtonDown);
        self.button_down.push(Entry { id, callback });
        id
    }

    pub fn add_button_up(&mut self, callback: ButtonCallback) -> SubscriberId {
        let id = self.allocate_id(Category::ButtonUp);
        self.button_up.push(Entry { id, callback });
        id
    }

    pub fn add_motion(&mut self, callback: MotionCallback) -> SubscriberId {
        let id = self.allocate_id(Category::Motion);
        self.motion.push(Entry { id, callback });
        id
    }

    pub fn add_wheel(&mut self, callback: WheelCallback) -> SubscriberId {
        let id = self.allocate_id(Category::Wheel);
        self.wheel.push(Entry { id, callback });
        id
    }

    /// Remove one registration. Returns false for unknown or already removed ids.
    pub fn remove(&mut self, id: SubscriberId) -> bool {
        let removed = remove_entry(&mut self.key_down, id)
            || remove_entry(&mut self.key_up, id)
            || remove_entry(&mut self.button_down, id)
            || remove_entry(&mut self.button_up, id)
            || remove_entry(&mut self.motion, id)
            || remove_entry(&mut self.wheel, id);
        if removed {
            log::debug!("unsubscribed callback #{}", id.0);
        }
        removed
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::KeyDown => self.key_down.len(),
            Category::KeyUp => self.key_up.len(),
            Category::ButtonDown => self.button_down.len(),
            Category::ButtonUp => self.button_up.len(),
            Category::Motion => self.motion.len(),
            Category::Wheel => self.wheel.len(),
        }
    }

    pub fn dispatch_key(&mut self, key: KeyCode, is_down: bool, state: &InputState) {
        let list = if is_down {
            &mut self.key_down
        } else {
            &mut self.key_up
        };
        for entry in list.iter_mut() {
            (entry.callback)(key, state);
        }
    }

    pub fn dispatch_button(&mut self, button: MouseButton, is_down: bool, state: &InputState) {
        let list = if is_down {
            &mut self.button_down
        } else {
            &mut self.button_up
        };
        for entry in list.iter_mut() {
            (entry.callback)(button, state);
        }
    }

    pub fn dispatch_motion(&mut self, motion: Motion) {
        for entry in self.motion.iter_mut() {
            (entry.callback)(motion);
        }
    }

    pub fn dispatch_wheel(&mut self, notches: i32) {
        for entry in self.wheel.iter_mut() {
            (entry.callback)(notches);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("key_down", &self.key_down.len())
            .field("key_up", &self.key_up.len())
            .field("button_down", &self.button_down.len())
            .field("button_up", &self.button_up.len())
            .field("motion", &self.motion.len())
            .field("wheel", &self.wheel.len())
            .finish()
    }
}
