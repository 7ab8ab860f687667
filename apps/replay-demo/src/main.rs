//! Replays canned pointer traces and prints what the recognizer made of
//! them. Run with `RUST_LOG=tactus_core=trace` to watch the state machine
//! work.

use tactus_core::config;
use tactus_testing::GestureScript;

fn main() {
    env_logger::init();

    scenario("quick touch", |script| {
        script.tap_at(1, 100.0, 100.0);
        script.settle();
    });

    scenario("double tap", |script| {
        script.double_tap_at(1, 100.0, 100.0);
        script.settle();
    });

    scenario("swipe right", |script| {
        script.swipe(1, (100.0, 100.0), (220.0, 110.0));
    });

    scenario("swipe up", |script| {
        script.swipe(1, (100.0, 300.0), (100.0, 80.0));
    });

    scenario("held press", |script| {
        script.long_press(1, 100.0, 100.0);
    });

    scenario("tap pre-empted by scroll", |script| {
        script.touch_down(1, 1, 100.0, 100.0);
        script.advance(40);
        script.touch_up(1);
        script.scroll();
        script.settle();
    });

    scenario("wander and return", |script| {
        script.touch_down(1, 1, 100.0, 100.0);
        script.advance(40);
        script.touch_move(1, 100.0 + config::SWIPE_THRESHOLD + 5.0, 100.0);
        script.advance(40);
        script.touch_move(1, 100.0, 100.0);
        script.touch_up(1);
        script.settle();
    });
}

fn scenario(name: &str, steps: impl FnOnce(&mut GestureScript)) {
    let mut script = GestureScript::new();
    steps(&mut script);
    log::info!("replayed {name} over {}ms", script.now());
    let kinds = script.kinds();
    if kinds.is_empty() {
        println!("{name:>24}: (no gesture)");
    } else {
        let list = kinds
            .iter()
            .map(|kind| format!("{kind:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{name:>24}: {list}");
    }
}
