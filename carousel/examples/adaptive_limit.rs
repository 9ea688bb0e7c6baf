// Example: the per-page limit adapts as the container narrows, and the
// animation flag settles after the resize burst.
use carousel::{Carousel, CarouselOptions, Extent};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new(24, |_| Extent::new(120, 80)).with_limit(8),
    );

    for (now_ms, width) in [(0u64, 1600u32), (40, 1200), (80, 800), (120, 500)] {
        c.apply_resize_event(width, now_ms);
        println!(
            "t={now_ms} width={width} visible_limit={} total_pages={} animating={}",
            c.visible_limit(),
            c.total_pages(),
            c.animation_enabled()
        );
    }

    // No further resizes: the settle window elapses and animation returns.
    c.update_animation(120 + 500);
    println!("settled: animating={}", c.animation_enabled());
}
