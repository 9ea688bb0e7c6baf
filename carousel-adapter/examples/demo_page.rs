// A text-mode rendition of the classic demo: 30 titled cards, up to 10 per
// page, paged with wrap-around buttons, re-laid-out when the "window" is
// resized to half width.
use carousel::{CarouselOptions, Extent};
use carousel_adapter::{Controller, Easing, capture_active_anchor};

fn render(c: &Controller, titles: &[String]) {
    let engine = c.carousel();
    let range = engine.active_range();
    let page = titles[range.start_index..range.end_index].join(" | ");
    println!(
        "  < [{}] >   (page {}/{}, {} per page)",
        page,
        engine.active_index() + 1,
        engine.total_pages(),
        engine.visible_limit()
    );
}

fn main() {
    let titles: Vec<String> = (1..=30).map(|i| format!("Title {i}")).collect();

    let mut c = Controller::new(
        CarouselOptions::new(titles.len(), |_| Extent::new(140, 90)).with_limit(10),
    );
    c.on_measure_many((0..titles.len()).map(|i| (i, Extent::new(140, 90))));
    c.carousel_mut().set_container_width(1280);

    println!("full width:");
    render(&c, &titles);

    // Two clicks on ">" and one on "<".
    c.slide_next(0, 240, Easing::SmoothStep);
    c.slide_next(300, 240, Easing::SmoothStep);
    c.slide_prev(600, 240, Easing::SmoothStep);
    render(&c, &titles);

    // Resize to half width, keeping the viewer anchored on the same card.
    let anchor = capture_active_anchor(c.carousel());
    c.on_resize(640, 900);
    if let Some(anchor) = anchor {
        c.apply_anchor(&anchor, |key| Some(*key as usize));
    }
    println!("half width:");
    render(&c, &titles);

    // Wrap past the last page back to the first.
    c.tick(1500);
    let last = c.carousel().total_pages() - 1;
    c.carousel_mut().set_active_index(last);
    c.slide_next(2000, 240, Easing::SmoothStep);
    render(&c, &titles);
}
