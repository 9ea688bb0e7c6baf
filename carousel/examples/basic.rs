// Example: minimal usage and wrapping page navigation.
use carousel::{Carousel, CarouselOptions, Extent};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new(30, |_| Extent::new(100, 100)).with_limit(10),
    );
    c.apply_resize_event(1100, 0);

    println!(
        "visible_limit={} total_pages={}",
        c.visible_limit(),
        c.total_pages()
    );

    let mut slots = Vec::new();
    c.collect_page_slots(&mut slots);
    for slot in &slots {
        println!(
            "page {} items {}..{} offset {}",
            slot.index, slot.range.start_index, slot.range.end_index, slot.offset
        );
    }

    c.prev_page();
    println!("after prev from page 0: active={}", c.active_index());
}
