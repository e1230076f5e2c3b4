use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use frame_input::core::InputContext;
use frame_input::types::{KeyCode, MouseButton};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

fn feed_tick(ctx: &mut InputContext, i: u32) {
    let key = KeyCode::letter((b'A' + (i % 26) as u8) as char).unwrap_or(KeyCode::A);
    ctx.record_key(key, true);
    ctx.record_key(key, false);
    ctx.record_scan_transition(0x1E, i % 2 == 0);
    ctx.record_button(MouseButton::Left, i % 2 == 0);
    ctx.record_motion(1, -1);
    ctx.record_wheel(120);
}

#[test]
fn ingest_and_commit_do_not_allocate_after_warmup() {
    let mut ctx = InputContext::new();
    let mut counter = 0u32;
    ctx.on_key_down(move |_, state| {
        if state.any_key_down() {
            counter = counter.wrapping_add(1);
        }
    });
    ctx.on_motion(|_| {});
    ctx.on_wheel(|_| {});

    // Warm up queue capacity.
    for i in 0..8 {
        feed_tick(&mut ctx, i);
        ctx.commit();
    }

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            feed_tick(&mut ctx, i);
            ctx.commit();
            let _ = ctx.consume_motion();
            let _ = ctx.key_went_down(KeyCode::A);
            let _ = ctx.any_key_went_down();
        }
    });

    assert!(allocs == 0);
}
