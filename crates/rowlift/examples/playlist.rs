//! Headless drive of the reorder interaction: long-press track 2 of a
//! playlist, drag it toward the bottom edge so the list auto-scrolls, and
//! release. Run with `RUST_LOG=rowlift=trace` to watch the state machine.

use rowlift::*;
use rowlift_core::*;
use std::sync::Arc;
use web_time::{Duration, Instant};

fn print_window(host: &FixedRowTable<String>) {
    let metrics = host.viewport();
    let visible = visible_rows(host);
    println!(
        "offset {:>5.1}  rows {:>2}..{:>2}",
        metrics.offset,
        visible.first().copied().unwrap_or(0),
        visible.last().copied().unwrap_or(0),
    );
}

fn main() {
    env_logger::init();

    let clock = Arc::new(ManualClock::new(Instant::now()));
    set_clock(clock.clone());
    let frame = Duration::from_millis(16);

    let tracks: Vec<String> = (1..=24).map(|n| format!("Track {n:02}")).collect();
    let mut host = FixedRowTable::new(tracks, 44.0, 320.0, 480.0);
    let mut list = ReorderList::new();

    // Press and hold on track 2 (index 1); a frame tick past the hold
    // duration recognizes the motionless press.
    let press = Vec2::new(160.0, 50.0);
    list.handle_pointer(&mut host, &PointerEvent::down(press, clock.now()));
    clock.advance(Duration::from_millis(520));
    list.on_frame(&mut host, clock.now());
    assert!(
        list.controller().is_active(),
        "long press should have been recognized"
    );
    println!("lifted track at row 1");

    // Drag into the bottom scroll zone and let the ticker scroll the list.
    list.handle_pointer(
        &mut host,
        &PointerEvent::moved(Vec2::new(160.0, 440.0), clock.now()),
    );
    for _ in 0..40 {
        clock.advance(frame);
        list.on_frame(&mut host, clock.now());
        print_window(&host);
    }

    // Release and let the visual settle.
    list.handle_pointer(
        &mut host,
        &PointerEvent::up(Vec2::new(160.0, 440.0), clock.now()),
    );
    while list.needs_frames() {
        clock.advance(frame);
        list.on_frame(&mut host, clock.now());
    }

    println!("\nfinal order:");
    for (index, track) in host.values().enumerate() {
        println!("{index:>2}  {track}");
    }
}
