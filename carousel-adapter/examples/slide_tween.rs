// Example: driving the slide transition from a render loop.
use carousel::{CarouselOptions, Extent};
use carousel_adapter::{Controller, Easing};

fn main() {
    let mut c = Controller::new(CarouselOptions::new(20, |_| Extent::new(120, 80)));
    c.carousel_mut().set_container_width(900);

    c.slide_next(0, 240, Easing::EaseInOutCubic);
    for now in (0..=240).step_by(40) {
        if let Some(offset) = c.tick(now) {
            println!("t={now:>3}ms  slide offset {offset:>5}px");
        }
    }
    println!(
        "settled on page {} of {}",
        c.carousel().active_index() + 1,
        c.carousel().total_pages()
    );
}
