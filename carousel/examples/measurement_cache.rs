// Example: exporting and re-importing measured extents, e.g. to survive a
// widget rebuild without a visual jump on first paint.
use carousel::{Carousel, CarouselOptions, Extent};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new(6, |_| Extent::new(90, 90)));
    c.set_container_width(800);
    c.measure_many([
        (0, Extent::new(140, 110)),
        (1, Extent::new(60, 95)),
        (2, Extent::new(200, 130)),
    ]);
    println!(
        "measured={} visible_limit={}",
        c.measurement_cache_len(),
        c.visible_limit()
    );

    let cache = c.export_measurement_cache();

    let mut rebuilt = Carousel::new(CarouselOptions::new(6, |_| Extent::new(90, 90)));
    rebuilt.set_container_width(800);
    rebuilt.import_measurement_cache(cache);
    println!(
        "rebuilt: measured={} visible_limit={} viewport_height={}",
        rebuilt.measurement_cache_len(),
        rebuilt.visible_limit(),
        rebuilt.viewport_height()
    );
}
