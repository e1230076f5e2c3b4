//! The input context: ingestion, commit, and queries.

use crate::config::EngineConfig;
use crate::cursor::{CursorBackend, CursorPolicy};
use crate::deltas::Deltas;
use crate::device::{self, DeviceSource};
use crate::dispatch::{Category, SubscriberId, Subscribers};
use crate::error::CursorError;
use crate::pending::PendingQueue;
use crate::state::InputState;
use crate::text::TextBuffers;
use crate::types::{DeviceInfo, InputEvent, KeyCode, Motion, MouseButton, ScanCode};

/// All engine state for one input session.
///
/// Feed it with the `record_*` methods (or [`ingest`](Self::ingest)) as events
/// arrive, call [`commit`](Self::commit) once per tick, then poll. The context is
/// single-threaded: ingestion and commit must happen on the same thread.
#[derive(Debug, Default)]
pub struct InputContext {
    state: InputState,
    pending: PendingQueue,
    deltas: Deltas,
    text: TextBuffers,
    subscribers: Subscribers,
    cursor: CursorPolicy,
}

impl InputContext {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            text: TextBuffers::new(config.text_input),
            ..Self::default()
        }
    }

    // ============== Ingestion ==============

    /// Queue a virtual key transition. Codes outside the key table are dropped.
    pub fn record_key_transition(&mut self, code: u16, is_down: bool) {
        match KeyCode::from_raw(code) {
            Some(key) => self.pending.push_key(key, is_down),
            None => log::trace!("dropped out-of-range key code {code:#x}"),
        }
    }

    pub fn record_key(&mut self, key: KeyCode, is_down: bool) {
        self.pending.push_key(key, is_down);
    }

    /// Queue a scan code transition. Codes outside the scan table are dropped.
    pub fn record_scan_transition(&mut self, scan_code: u16, is_down: bool) {
        match ScanCode::new(scan_code) {
            Some(scan) => self.pending.push_scan(scan, is_down),
            None => log::trace!("dropped out-of-range scan code {scan_code:#x}"),
        }
    }

    /// Queue a mouse button transition. Indices past the last button are dropped.
    pub fn record_button_transition(&mut self, index: u8, is_down: bool) {
        match MouseButton::from_index(index) {
            Some(button) => self.pending.push_button(button, is_down),
            None => log::trace!("dropped out-of-range mouse button {index}"),
        }
    }

    pub fn record_button(&mut self, button: MouseButton, is_down: bool) {
        self.pending.push_button(button, is_down);
    }

    pub fn record_motion(&mut self, dx: i32, dy: i32) {
        self.deltas.add_motion(dx, dy);
    }

    pub fn record_wheel(&mut self, delta: i32) {
        self.deltas.add_wheel(delta);
    }

    /// Buffer a raw character code. Ignored while text input is disabled.
    pub fn record_character(&mut self, codepoint: u32) {
        if !self.text.push_character(codepoint) {
            log::trace!("text input disabled, dropped character {codepoint:#x}");
        }
    }

    /// Buffer a composed character. Ignored while text input is disabled.
    pub fn record_composed_character(&mut self, ch: char) {
        if !self.text.push_composed(ch) {
            log::trace!("text input disabled, dropped composed character");
        }
    }

    /// Route a normalized event record to the matching `record_*` method.
    pub fn ingest(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { code, is_down } => self.record_key_transition(code, is_down),
            InputEvent::Scan { code, is_down } => self.record_scan_transition(code, is_down),
            InputEvent::MouseButton { index, is_down } => {
                self.record_button_transition(index, is_down)
            }
            InputEvent::Motion { dx, dy } => self.record_motion(dx, dy),
            InputEvent::Wheel { delta } => self.record_wheel(delta),
            InputEvent::Character { codepoint } => self.record_character(codepoint),
            InputEvent::ComposedCharacter { ch } => self.record_composed_character(ch),
        }
    }

    // ============== Commit ==============

    /// Promote pending transitions to current state and fire callbacks.
    ///
    /// Order: snapshot, keys, scan codes, mouse buttons, motion, wheel, clear.
    /// Each key or button subscriber runs right after its transition is
    /// written, so it sees the tables as of that transition.
    pub fn commit(&mut self) {
        let Self {
            state,
            pending,
            deltas,
            subscribers,
            ..
        } = self;

        log::trace!(
            "commit: {} key, {} scan, {} button transition(s)",
            pending.keys.len(),
            pending.scans.len(),
            pending.buttons.len()
        );

        state.snapshot();

        for t in &pending.keys {
            state.set_key(t.code, t.is_down);
            subscribers.dispatch_key(t.code, t.is_down, state);
        }

        for t in &pending.scans {
            state.set_scan(t.code, t.is_down);
        }

        for t in &pending.buttons {
            state.set_button(t.code, t.is_down);
            subscribers.dispatch_button(t.code, t.is_down, state);
        }

        // Motion is reported every commit until consumed.
        let motion = deltas.motion();
        if !motion.is_zero() {
            subscribers.dispatch_motion(motion);
        }

        let notches = deltas.take_wheel_notches();
        if notches != 0 {
            subscribers.dispatch_wheel(notches);
        }

        pending.clear();
    }

    // ============== Edge queries ==============

    /// Committed state, as seen by key and button callbacks.
    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.state.is_key_down(key)
    }

    pub fn key_went_down(&self, key: KeyCode) -> bool {
        self.state.key_went_down(key)
    }

    pub fn key_went_up(&self, key: KeyCode) -> bool {
        self.state.key_went_up(key)
    }

    pub fn is_scan_down(&self, scan: ScanCode) -> bool {
        self.state.is_scan_down(scan)
    }

    pub fn scan_went_down(&self, scan: ScanCode) -> bool {
        self.state.scan_went_down(scan)
    }

    pub fn scan_went_up(&self, scan: ScanCode) -> bool {
        self.state.scan_went_up(scan)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.state.is_button_down(button)
    }

    pub fn button_went_down(&self, button: MouseButton) -> bool {
        self.state.button_went_down(button)
    }

    pub fn button_went_up(&self, button: MouseButton) -> bool {
        self.state.button_went_up(button)
    }

    pub fn any_key_went_down(&self) -> bool {
        self.state.any_key_went_down()
    }

    pub fn any_key_down(&self) -> bool {
        self.state.any_key_down()
    }

    pub fn keys_went_down(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.state.keys_went_down()
    }

    // ============== Read-and-reset ==============

    /// Accumulated motion since the last call; resets it to zero.
    pub fn consume_motion(&mut self) -> Motion {
        self.deltas.take_motion()
    }

    /// Whole wheel notches accumulated so far. The sub-notch remainder is kept.
    pub fn consume_wheel_notches(&mut self) -> i32 {
        self.deltas.take_wheel_notches()
    }

    /// Raw wheel units not yet reported as notches.
    pub fn pending_wheel_units(&self) -> i32 {
        self.deltas.wheel_units()
    }

    /// Remove and return up to `max` raw character codes, oldest first.
    pub fn drain_characters(&mut self, max: usize) -> Vec<u32> {
        self.text.drain_characters(max)
    }

    /// Remove and return up to `max` composed characters, oldest first.
    pub fn drain_composed_text(&mut self, max: usize) -> Vec<char> {
        self.text.drain_composed(max)
    }

    /// Discard everything not yet committed or consumed: pending transitions,
    /// text, motion and wheel. Current and previous tables are left alone.
    pub fn reset_all(&mut self) {
        log::debug!(
            "reset: discarding {} pending transition(s)",
            self.pending.len()
        );
        self.pending.clear();
        self.text.clear();
        self.deltas.clear();
    }

    // ============== Configuration ==============

    pub fn text_input_enabled(&self) -> bool {
        self.text.is_enabled()
    }

    pub fn set_text_input_enabled(&mut self, enabled: bool) {
        self.text.set_enabled(enabled);
    }

    pub fn pending(&self) -> &PendingQueue {
        &self.pending
    }

    // ============== Subscriptions ==============

    pub fn on_key_down<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(KeyCode, &InputState) + 'static,
    {
        self.subscribers.add_key_down(Box::new(callback))
    }

    pub fn on_key_up<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(KeyCode, &InputState) + 'static,
    {
        self.subscribers.add_key_up(Box::new(callback))
    }

    pub fn on_button_down<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(MouseButton, &InputState) + 'static,
    {
        self.subscribers.add_button_down(Box::new(callback))
    }

    pub fn on_button_up<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(MouseButton, &InputState) + 'static,
    {
        self.subscribers.add_button_up(Box::new(callback))
    }

    pub fn on_motion<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(Motion) + 'static,
    {
        self.subscribers.add_motion(Box::new(callback))
    }

    /// Wheel subscribers receive whole notches. A commit with less than one
    /// notch of raw wheel input calls nothing; the remainder carries over.
    pub fn on_wheel<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(i32) + 'static,
    {
        self.subscribers.add_wheel(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self, category: Category) -> usize {
        self.subscribers.count(category)
    }

    // ============== Devices & cursor ==============

    pub fn enumerate_devices(
        &self,
        source: &mut dyn DeviceSource,
        max: usize,
    ) -> Vec<DeviceInfo> {
        device::enumerate_devices(source, max)
    }

    pub fn cursor(&self) -> &CursorPolicy {
        &self.cursor
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor.visible()
    }

    pub fn cursor_clipped(&self) -> bool {
        self.cursor.clipped()
    }

    pub fn set_cursor_visible(
        &mut self,
        backend: &mut dyn CursorBackend,
        visible: bool,
    ) -> Result<(), CursorError> {
        self.cursor.set_visible(backend, visible)
    }

    pub fn clip_cursor(
        &mut self,
        backend: &mut dyn CursorBackend,
        clip: bool,
    ) -> Result<(), CursorError> {
        self.cursor.set_clip(backend, clip)
    }

    pub fn warp_cursor(
        &mut self,
        backend: &mut dyn CursorBackend,
        x: i32,
        y: i32,
    ) -> Result<(), CursorError> {
        self.cursor.warp(backend, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn press(ctx: &mut InputContext, key: KeyCode) {
        ctx.record_key(key, true);
    }

    fn release(ctx: &mut InputContext, key: KeyCode) {
        ctx.record_key(key, false);
    }

    #[test]
    fn test_last_transition_in_tick_wins() {
        let mut ctx = InputContext::new();
        press(&mut ctx, KeyCode::A);
        release(&mut ctx, KeyCode::A);
        press(&mut ctx, KeyCode::A);
        ctx.commit();

        assert!(ctx.is_key_down(KeyCode::A));
        assert!(ctx.key_went_down(KeyCode::A));
    }

    #[test]
    fn test_tap_within_one_tick_fires_both_callbacks_but_leaves_key_up() {
        let mut ctx = InputContext::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let log = Rc::clone(&log);
            ctx.on_key_down(move |k, _| log.borrow_mut().push((k, true)));
        }
        {
            let log = Rc::clone(&log);
            ctx.on_key_up(move |k, _| log.borrow_mut().push((k, false)));
        }

        press(&mut ctx, KeyCode::SPACE);
        release(&mut ctx, KeyCode::SPACE);
        ctx.commit();

        assert_eq!(
            *log.borrow(),
            vec![(KeyCode::SPACE, true), (KeyCode::SPACE, false)]
        );
        assert!(!ctx.is_key_down(KeyCode::SPACE));
        assert!(!ctx.key_went_down(KeyCode::SPACE));
        assert!(!ctx.key_went_up(KeyCode::SPACE));
    }

    #[test]
    fn test_edges_expire_after_next_commit() {
        let mut ctx = InputContext::new();
        press(&mut ctx, KeyCode::W);
        ctx.commit();
        assert!(ctx.key_went_down(KeyCode::W));

        ctx.commit();
        assert!(ctx.is_key_down(KeyCode::W));
        assert!(!ctx.key_went_down(KeyCode::W));

        release(&mut ctx, KeyCode::W);
        ctx.commit();
        assert!(ctx.key_went_up(KeyCode::W));
        ctx.commit();
        assert!(!ctx.key_went_up(KeyCode::W));
    }

    #[test]
    fn test_callback_sees_state_up_to_its_own_transition() {
        let mut ctx = InputContext::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            ctx.on_key_down(move |k, state| {
                seen.borrow_mut().push((
                    k,
                    state.is_key_down(KeyCode::A),
                    state.is_key_down(KeyCode::B),
                ))
            });
        }

        press(&mut ctx, KeyCode::A);
        press(&mut ctx, KeyCode::B);
        ctx.commit();

        assert_eq!(
            *seen.borrow(),
            vec![(KeyCode::A, true, false), (KeyCode::B, true, true)]
        );
    }

    #[test]
    fn test_out_of_range_codes_never_reach_state() {
        let mut ctx = InputContext::new();
        let fired = Rc::new(RefCell::new(0));
        {
            let fired = Rc::clone(&fired);
            ctx.on_key_down(move |_, _| *fired.borrow_mut() += 1);
        }

        ctx.record_key_transition(0x100, true);
        ctx.record_key_transition(u16::MAX, true);
        ctx.record_scan_transition(0x400, true);
        ctx.record_button_transition(5, true);
        assert!(ctx.pending().is_empty());

        ctx.commit();
        assert!(!ctx.any_key_down());
        assert!(!ctx.any_key_went_down());
        assert_eq!(ctx.state().scans_down().count(), 0);
        assert_eq!(ctx.state().buttons_down().count(), 0);
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn test_scan_codes_commit_without_callbacks() {
        let mut ctx = InputContext::new();
        let fired = Rc::new(RefCell::new(0));
        {
            let fired = Rc::clone(&fired);
            ctx.on_key_down(move |_, _| *fired.borrow_mut() += 1);
        }

        ctx.record_scan_transition(0x148, true);
        ctx.commit();

        let up_arrow = ScanCode::from_parts(0x48, true, false);
        assert!(ctx.scan_went_down(up_arrow));
        assert!(!ctx.is_scan_down(ScanCode::from_parts(0x48, false, false)));
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn test_buttons_dispatch_by_edge() {
        let mut ctx = InputContext::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let log = Rc::clone(&log);
            ctx.on_button_down(move |b, s| log.borrow_mut().push((b, s.is_button_down(b))));
        }
        {
            let log = Rc::clone(&log);
            ctx.on_button_up(move |b, s| log.borrow_mut().push((b, s.is_button_down(b))));
        }

        ctx.record_button_transition(1, true);
        ctx.commit();
        assert!(ctx.button_went_down(MouseButton::Right));

        ctx.record_button(MouseButton::Right, false);
        ctx.commit();
        assert!(ctx.button_went_up(MouseButton::Right));

        assert_eq!(
            *log.borrow(),
            vec![(MouseButton::Right, true), (MouseButton::Right, false)]
        );
    }

    #[test]
    fn test_motion_is_reported_every_commit_until_consumed() {
        let mut ctx = InputContext::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            ctx.on_motion(move |m| seen.borrow_mut().push(m));
        }

        ctx.record_motion(2, 3);
        ctx.commit();
        ctx.commit();
        assert_eq!(ctx.consume_motion(), Motion::new(2, 3));
        ctx.commit();

        assert_eq!(*seen.borrow(), vec![Motion::new(2, 3), Motion::new(2, 3)]);
    }

    #[test]
    fn test_wheel_commit_reports_notches_and_keeps_remainder() {
        let mut ctx = InputContext::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            ctx.on_wheel(move |n| seen.borrow_mut().push(n));
        }

        ctx.record_wheel(300);
        ctx.commit();
        assert_eq!(ctx.pending_wheel_units(), 60);

        // Remainder alone is below one notch: nothing to report.
        ctx.commit();

        ctx.record_wheel(60);
        ctx.commit();
        assert_eq!(ctx.pending_wheel_units(), 0);

        assert_eq!(*seen.borrow(), vec![2, 1]);
    }

    #[test]
    fn test_consume_wheel_between_commits_takes_precedence() {
        let mut ctx = InputContext::new();
        let fired = Rc::new(RefCell::new(false));
        {
            let fired = Rc::clone(&fired);
            ctx.on_wheel(move |_| *fired.borrow_mut() = true);
        }

        ctx.record_wheel(-240);
        assert_eq!(ctx.consume_wheel_notches(), -2);
        ctx.commit();
        assert!(!*fired.borrow());
    }

    #[test]
    fn test_reset_all_keeps_tables() {
        let mut ctx = InputContext::with_config(EngineConfig { text_input: true });
        press(&mut ctx, KeyCode::A);
        ctx.commit();

        press(&mut ctx, KeyCode::B);
        ctx.record_motion(1, 1);
        ctx.record_wheel(500);
        ctx.record_character('x' as u32);
        ctx.record_composed_character('é');
        ctx.reset_all();

        assert!(ctx.pending().is_empty());
        assert_eq!(ctx.consume_motion(), Motion::ZERO);
        assert_eq!(ctx.pending_wheel_units(), 0);
        assert!(ctx.drain_characters(8).is_empty());
        assert!(ctx.drain_composed_text(8).is_empty());

        assert!(ctx.is_key_down(KeyCode::A));
        assert!(ctx.key_went_down(KeyCode::A));
        ctx.commit();
        assert!(!ctx.is_key_down(KeyCode::B));
    }

    #[test]
    fn test_ingest_routes_every_event_kind() {
        let mut ctx = InputContext::with_config(EngineConfig::default().with_text_input(true));
        for event in [
            InputEvent::Key {
                code: 0x41,
                is_down: true,
            },
            InputEvent::Scan {
                code: 0x1E,
                is_down: true,
            },
            InputEvent::MouseButton {
                index: 2,
                is_down: true,
            },
            InputEvent::Motion { dx: -4, dy: 9 },
            InputEvent::Wheel { delta: 120 },
            InputEvent::Character { codepoint: 0x61 },
            InputEvent::ComposedCharacter { ch: 'ä' },
        ] {
            ctx.ingest(event);
        }
        ctx.commit();

        assert!(ctx.is_key_down(KeyCode::A));
        assert!(ctx.is_scan_down(ScanCode::from_parts(0x1E, false, false)));
        assert!(ctx.is_button_down(MouseButton::Middle));
        assert_eq!(ctx.consume_motion(), Motion::new(-4, 9));
        assert_eq!(ctx.drain_characters(4), vec![0x61]);
        assert_eq!(ctx.drain_composed_text(4), vec!['ä']);
    }

    #[test]
    fn test_text_toggle_at_runtime() {
        let mut ctx = InputContext::new();
        assert!(!ctx.text_input_enabled());
        ctx.record_character('a' as u32);

        ctx.set_text_input_enabled(true);
        ctx.record_character('b' as u32);
        assert_eq!(ctx.drain_characters(10), vec!['b' as u32]);
    }

    #[test]
    fn test_unsubscribe_through_context() {
        let mut ctx = InputContext::new();
        let id = ctx.on_motion(|_| {});
        assert_eq!(ctx.subscriber_count(Category::Motion), 1);
        assert!(ctx.unsubscribe(id));
        assert_eq!(ctx.subscriber_count(Category::Motion), 0);
    }
}
