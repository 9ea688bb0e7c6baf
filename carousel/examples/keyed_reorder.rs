// Example: measurements follow item keys across a reorder.
use carousel::{Carousel, CarouselOptions, Extent};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new_with_key(
        4,
        |_| Extent::new(100, 100),
        |i| 100u64 + i as u64,
    ));
    c.measure(0, Extent::new(250, 140));
    println!("item 0 extent: {:?}", c.item_extent(0));

    // The dataset reverses; keys move with the items.
    c.set_get_item_key(|i| 100u64 + (3 - i) as u64);
    c.sync_item_keys();

    println!("after reverse, item 3 extent: {:?}", c.item_extent(3));
}
