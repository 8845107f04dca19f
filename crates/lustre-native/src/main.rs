//! Headless run of both carousel engines: no DOM, no clock, just the state
//! machines stepped at a simulated 60 fps. Useful for eyeballing the autoplay
//! ping-pong and the drag/inertia/snap hand-off from a terminal.

use lustre_core::{
    AutoplayClock, CoverFlow, FrameOutcome, ItemBounds, MomentumStrip, TickOutcome, ViewportClass,
    EXPLORE_PROFILES, POPULAR_COLLECTIONS, STANDOUT_ITEMS,
};

const FRAME_MS: f64 = 16.0;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!(
        "catalog: {} profiles, {} standout items, {} collections",
        EXPLORE_PROFILES.len(),
        STANDOUT_ITEMS.len(),
        POPULAR_COLLECTIONS.len()
    );

    run_coverflow();
    run_strip();
    Ok(())
}

/// Ten seconds of cover-flow autoplay, then a drag release and a double-tap.
fn run_coverflow() {
    let mut flow = CoverFlow::new(EXPLORE_PROFILES.len(), ViewportClass::Desktop);
    log::info!(
        "[flow] {} cards, starting at {}",
        flow.item_count(),
        flow.active()
    );

    let mut clock = AutoplayClock::default();
    let mut t = 0.0;
    while t < 10_000.0 {
        t += FRAME_MS;
        if clock.advance(FRAME_MS) {
            let outcome = flow.autoplay_tick();
            let label = EXPLORE_PROFILES[flow.active()].label;
            log::info!(
                "[flow] t={:.0}ms active={} ({}) dir={} {:?}",
                t,
                flow.active(),
                label,
                flow.autoplay_dir(),
                outcome
            );
            if outcome == TickOutcome::Suppressed {
                return;
            }
        }
    }

    flow.set_dragging(true);
    flow.set_dragging(false);
    flow.drag_release(-420.0);
    log::info!("[flow] after 420px left drag: active={}", flow.active());

    flow.set_viewport(ViewportClass::Mobile);
    flow.tap(0, t);
    flow.tap(0, t + 200.0);
    log::info!("[flow] after double-tap on 0: active={}", flow.active());
}

/// Autoplay until the first bounce, then a scripted flick with inertia and
/// the closing snap pass.
fn run_strip() {
    let mut strip = MomentumStrip::new();
    let item_w = 380.0;
    let gap = 24.0;
    let count = STANDOUT_ITEMS.len();
    strip.set_metrics(count as f32 * (item_w + gap), 900.0);
    strip.set_items(
        (0..count)
            .map(|i| ItemBounds {
                left: i as f32 * (item_w + gap),
                width: item_w,
            })
            .collect(),
    );
    log::info!(
        "[strip] {} items, max scroll {:.0}px",
        strip.item_count(),
        strip.max_scroll()
    );

    let mut t = 0.0;
    let mut bounces = 0;
    while bounces == 0 && t < 120_000.0 {
        t += FRAME_MS;
        let before = strip.offset();
        strip.frame(t);
        if strip.offset() >= strip.max_scroll() && before < strip.max_scroll() {
            bounces += 1;
            log::info!("[strip] bounced off the right edge at t={:.0}ms", t);
        }
    }

    // flick: 120 px of pointer travel in three samples
    strip.begin_drag(600.0, t);
    for step in 1..=3 {
        t += FRAME_MS;
        strip.drag_move(600.0 - 40.0 * step as f32, t);
    }
    strip.end_drag(t);
    log::info!("[strip] released at offset {:.0}", strip.offset());

    loop {
        t += FRAME_MS;
        match strip.frame(t) {
            FrameOutcome::Settled { snap } => {
                log::info!("[strip] settled at {:.0} (snap: {})", strip.offset(), snap);
                if snap {
                    if let Some(i) = strip.nearest_index() {
                        let target = strip.snap_target(i).unwrap_or(0.0);
                        log::info!(
                            "[strip] snapping to item {} ({}) at {:.0}",
                            i,
                            STANDOUT_ITEMS[i].label,
                            target
                        );
                        strip.start_glide(target, t);
                        continue;
                    }
                }
                break;
            }
            FrameOutcome::Idle => break,
            _ => {}
        }
    }
    log::info!("[strip] final offset {:.0}", strip.offset());
}
