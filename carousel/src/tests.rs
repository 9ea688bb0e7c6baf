use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Reference model for `fit::visible_count`: the largest prefix count
/// `k <= limit` such that the scaled widths sum to strictly less than the
/// container width, floored at 1, with zero widths skipped.
fn expected_visible_count(widths: &[u32], container_width: u32, factor: f32, limit: usize) -> usize {
    let limit = limit.max(1);
    let measured: Vec<u32> = widths.iter().copied().filter(|&w| w > 0).collect();
    if measured.is_empty() {
        return limit;
    }
    let mut best = 0usize;
    for k in 0..=measured.len().min(limit) {
        let sum: f32 = measured[..k].iter().map(|&w| w as f32 * factor).sum();
        if sum < container_width as f32 {
            best = k;
        } else {
            break;
        }
    }
    best.clamp(1, limit)
}

fn expected_page_count(count: usize, visible_limit: usize) -> usize {
    if count == 0 {
        1
    } else {
        count.div_ceil(visible_limit.max(1))
    }
}

fn unmeasured(count: usize) -> CarouselOptions<ItemKey> {
    // Estimate of 0x0 means "no size hint": fitting trusts the limit.
    CarouselOptions::new(count, |_| Extent::default())
}

#[test]
fn visible_count_is_largest_fitting_prefix() {
    // 100 * 1.5 = 150 per item; 7 fit under 1100, 8 do not.
    let widths = [100u32; 10];
    assert_eq!(fit::visible_count(widths, 1100, 1.5, 10), 7);
    // Cap at limit.
    assert_eq!(fit::visible_count(widths, 10_000, 1.5, 10), 10);
    // Floor of 1 when even the first item does not fit.
    assert_eq!(fit::visible_count(widths, 100, 1.5, 10), 1);
    // No measurements: trust the caller's hint.
    assert_eq!(fit::visible_count([], 300, 1.5, 5), 5);
    assert_eq!(fit::visible_count([0, 0, 0], 300, 1.5, 5), 5);
}

#[test]
fn visible_count_skips_unmeasured_widths() {
    // Zero widths neither count nor consume width.
    let widths = [0u32, 100, 0, 100, 100];
    assert_eq!(fit::visible_count(widths, 1000, 1.5, 5), 3);
}

#[test]
fn visible_count_matches_model_on_random_inputs() {
    let mut rng = Lcg::new(0xCA80_05E1);
    for _ in 0..500 {
        let n = rng.gen_range_usize(0, 20);
        let widths: Vec<u32> = (0..n).map(|_| rng.gen_range_u32(0, 200)).collect();
        let container = rng.gen_range_u32(1, 2000);
        let limit = rng.gen_range_usize(1, 12);
        assert_eq!(
            fit::visible_count(widths.iter().copied(), container, 1.5, limit),
            expected_visible_count(&widths, container, 1.5, limit),
            "widths={widths:?} container={container} limit={limit}"
        );
    }
}

#[test]
fn observed_widget_scenario() {
    // 30 items, limit 10, container fits exactly 7 items.
    let opts = CarouselOptions::new(30, |_| Extent::new(100, 100))
        .with_limit(10)
        .with_initial_width(Some(1100));
    let c = Carousel::new(opts);

    assert_eq!(c.visible_limit(), 7);
    assert_eq!(c.total_pages(), 5);
    assert_eq!(
        c.page_range(0),
        PageRange {
            start_index: 0,
            end_index: 7
        }
    );
    assert_eq!(
        c.page_range(4),
        PageRange {
            start_index: 28,
            end_index: 30
        }
    );
}

#[test]
fn pages_partition_the_item_sequence() {
    let mut rng = Lcg::new(0x9A6E5);
    for _ in 0..200 {
        let count = rng.gen_range_usize(0, 64);
        let limit = rng.gen_range_usize(1, 12);
        let mut c = Carousel::new(unmeasured(count).with_limit(limit));
        if rng.gen_bool() {
            c.set_container_width(rng.gen_range_u32(1, 2000));
        }

        let mut seen = Vec::new();
        for page in 0..c.total_pages() {
            let range = c.page_range(page);
            assert!(range.len() <= c.visible_limit());
            c.for_each_page_item(page, |it| {
                assert_eq!(it.page, page);
                assert_eq!(it.slot, seen.len() - range.start_index);
                seen.push(it.index);
            });
        }
        let expected: Vec<usize> = (0..count).collect();
        assert_eq!(seen, expected, "count={count} limit={limit}");
        assert_eq!(
            c.total_pages(),
            expected_page_count(count, c.visible_limit())
        );
    }
}

#[test]
fn empty_sequence_yields_a_single_empty_page() {
    let c = Carousel::new(unmeasured(0));
    assert_eq!(c.total_pages(), 1);
    assert!(c.page_range(0).is_empty());
    assert_eq!(c.viewport_height(), 0);
    assert_eq!(c.active_index(), 0);
}

#[test]
fn paging_wraps_at_both_bounds() {
    let mut c = Carousel::new(unmeasured(12).with_limit(5));
    assert_eq!(c.total_pages(), 3);

    c.prev_page();
    assert_eq!(c.active_index(), 2);
    assert_eq!(c.slide_direction(), Some(SlideDirection::Backward));

    c.next_page();
    assert_eq!(c.active_index(), 0);
    assert_eq!(c.slide_direction(), Some(SlideDirection::Forward));

    c.next_page();
    c.next_page();
    assert_eq!(c.active_index(), 2);
    c.next_page();
    assert_eq!(c.active_index(), 0);
}

#[test]
fn single_page_paging_is_a_no_op() {
    let mut c = Carousel::new(unmeasured(3).with_limit(5));
    assert_eq!(c.total_pages(), 1);
    c.next_page();
    assert_eq!(c.active_index(), 0);
    assert_eq!(c.slide_direction(), None);
    c.prev_page();
    assert_eq!(c.active_index(), 0);
}

#[test]
fn active_index_is_clamped_when_pages_shrink() {
    let mut c = Carousel::new(unmeasured(30).with_limit(10));
    assert_eq!(c.total_pages(), 3);
    c.set_active_index(2);

    c.set_count(5);
    assert_eq!(c.total_pages(), 1);
    assert_eq!(c.active_index(), 0);

    // Shrinking via a narrower fit also clamps.
    let mut c = Carousel::new(
        CarouselOptions::new(30, |_| Extent::new(100, 100))
            .with_limit(10)
            .with_initial_width(Some(400)),
    );
    assert_eq!(c.visible_limit(), 2);
    c.set_active_index(14);
    assert_eq!(c.active_index(), 14);
    c.set_container_width(10_000);
    assert_eq!(c.visible_limit(), 10);
    assert!(c.active_index() < c.total_pages());
}

#[test]
fn active_index_stays_in_range_under_random_events() {
    let mut rng = Lcg::new(0xF17);
    let mut c = Carousel::new(
        CarouselOptions::new(40, |_| Extent::new(80, 40))
            .with_limit(8)
            .with_initial_width(Some(900)),
    );
    for step in 0..500 {
        match rng.gen_range_usize(0, 5) {
            0 => c.next_page(),
            1 => c.prev_page(),
            2 => c.set_container_width(rng.gen_range_u32(50, 3000)),
            3 => c.set_count(rng.gen_range_usize(0, 60)),
            _ => c.measure(
                rng.gen_range_usize(0, 60),
                Extent::new(rng.gen_range_u32(1, 300), rng.gen_range_u32(1, 200)),
            ),
        }
        let total = c.total_pages();
        assert!(total >= 1, "step {step}");
        assert!(c.active_index() < total, "step {step}");
        assert!(c.visible_limit() >= 1 && c.visible_limit() <= 8, "step {step}");
    }
}

#[test]
fn slot_offsets_translate_pages_around_the_active_one() {
    let mut c = Carousel::new(
        CarouselOptions::new(30, |_| Extent::new(100, 100))
            .with_limit(10)
            .with_initial_width(Some(1100)),
    );
    c.set_active_index(2);

    let mut slots = Vec::new();
    c.collect_page_slots(&mut slots);
    assert_eq!(slots.len(), 5);
    for slot in &slots {
        assert_eq!(slot.offset, (slot.index as i64 - 2) * 1100);
        assert_eq!(slot.is_active(), slot.index == 2);
    }
    assert_eq!(c.active_slot().unwrap().offset, 0);
}

#[test]
fn content_width_falls_back_while_unmeasured() {
    let c = Carousel::new(unmeasured(10));
    assert_eq!(c.container_width(), None);
    assert_eq!(c.content_width(), 1000);
    assert_eq!(c.slot_offset(1), 1000);

    let mut c = c;
    c.set_container_width(640);
    assert_eq!(c.content_width(), 640);
    assert_eq!(c.slot_offset(1), 640);
}

#[test]
fn viewport_height_tracks_the_tallest_active_item() {
    let mut c = Carousel::new(unmeasured(6).with_limit(3));
    assert_eq!(c.viewport_height(), 0);

    c.set_container_width(1000);
    c.measure_many([
        (0, Extent::new(100, 40)),
        (1, Extent::new(100, 90)),
        (2, Extent::new(100, 55)),
        (3, Extent::new(100, 300)),
    ]);
    // Page 0 holds items 0..3.
    assert_eq!(c.viewport_height(), 90);

    c.next_page();
    assert_eq!(c.viewport_height(), 300);
}

#[test]
fn measurements_follow_keys_after_reorder() {
    let mut c = Carousel::new(CarouselOptions::new(2, |_| Extent::new(1, 1)));
    c.measure(0, Extent::new(10, 10));
    assert_eq!(c.item_extent(0), Some(Extent::new(10, 10)));
    assert_eq!(c.item_extent(1), Some(Extent::new(1, 1)));

    // Simulate a data reorder by changing the key mapping.
    c.set_get_item_key(|i| if i == 0 { 1 } else { 0 });
    c.sync_item_keys();

    // The measured extent should follow key=0, now at index 1.
    assert_eq!(c.item_extent(0), Some(Extent::new(1, 1)));
    assert_eq!(c.item_extent(1), Some(Extent::new(10, 10)));
}

#[test]
fn measurement_cache_round_trips() {
    let mut c = Carousel::new(CarouselOptions::new(3, |_| Extent::new(1, 1)));
    c.measure(1, Extent::new(20, 30));
    c.measure(2, Extent::new(40, 50));
    assert_eq!(c.measurement_cache_len(), 2);

    let cache = c.export_measurement_cache();
    let mut fresh = Carousel::new(CarouselOptions::new(3, |_| Extent::new(1, 1)));
    fresh.import_measurement_cache(cache);
    assert!(fresh.is_measured(1) && fresh.is_measured(2));
    assert!(!fresh.is_measured(0));
    assert_eq!(fresh.item_extent(2), Some(Extent::new(40, 50)));

    fresh.reset_measurements();
    assert_eq!(fresh.measurement_cache_len(), 0);
    assert_eq!(fresh.item_extent(2), Some(Extent::new(1, 1)));
}

#[test]
fn resize_disables_animation_until_events_settle() {
    let mut c = Carousel::new(unmeasured(10).with_animation_reset_delay_ms(500));
    assert!(c.animation_enabled());

    c.apply_resize_event(800, 0);
    assert!(!c.animation_enabled());
    assert_eq!(c.container_width(), Some(800));

    // Still inside the settle window.
    c.update_animation(499);
    assert!(!c.animation_enabled());

    // A fresh resize restarts the window.
    c.apply_resize_event(820, 300);
    c.update_animation(700);
    assert!(!c.animation_enabled());

    c.update_animation(800);
    assert!(c.animation_enabled());
}

#[test]
fn resize_recomputes_limit_synchronously() {
    let mut c = Carousel::new(
        CarouselOptions::new(30, |_| Extent::new(100, 100)).with_limit(10),
    );
    c.apply_resize_event(1100, 0);
    // The fit happens on the event itself, not after the settle delay.
    assert_eq!(c.visible_limit(), 7);
    assert_eq!(c.total_pages(), 5);
}

#[test]
fn cancel_animation_reset_drops_the_pending_re_enable() {
    let mut c = Carousel::new(unmeasured(10));
    c.apply_resize_event(800, 0);
    c.cancel_animation_reset();
    c.update_animation(10_000);
    assert!(!c.animation_enabled());
}

#[test]
fn debounce_delivers_one_trailing_call_with_the_last_payload() {
    let mut d = Debounce::<u32>::new(500);
    for (i, now) in [0u64, 20, 45, 70, 100].iter().enumerate() {
        d.call(i as u32 + 1, *now);
        assert_eq!(d.poll(*now), None);
    }
    assert!(d.is_pending());
    assert_eq!(d.poll(599), None);
    assert_eq!(d.poll(600), Some(5));
    assert_eq!(d.poll(600), None);
    assert!(!d.is_pending());
}

#[test]
fn debounce_cancel_drops_the_pending_payload() {
    let mut d = Debounce::<&str>::new(100);
    d.call("pending", 0);
    d.cancel();
    assert_eq!(d.poll(1000), None);
}

#[test]
fn disabled_engine_returns_empty_results() {
    let mut c = Carousel::new(unmeasured(10).with_enabled(false));
    assert_eq!(c.total_pages(), 0);
    assert_eq!(c.viewport_height(), 0);
    assert!(c.page_slot(0).is_none());
    let mut called = false;
    c.for_each_page_slot(|_| called = true);
    assert!(!called);
    c.next_page();
    assert_eq!(c.active_index(), 0);

    c.set_enabled(true);
    assert_eq!(c.total_pages(), 2);
}

#[test]
fn disabling_cancels_the_pending_settle_timer() {
    let mut c = Carousel::new(unmeasured(10));
    c.apply_resize_event(800, 0);
    c.set_enabled(false);
    c.set_enabled(true);
    // Re-enabling starts from the rest state; the old timer must not fire.
    assert!(c.animation_enabled());
    c.update_animation(10_000);
    assert!(c.animation_enabled());
}

#[test]
fn batch_update_coalesces_notifications() {
    let notified = Arc::new(AtomicUsize::new(0));
    let n = Arc::clone(&notified);
    let mut c = Carousel::new(
        unmeasured(20).with_on_change(Some(move |_: &Carousel, _| {
            n.fetch_add(1, Ordering::Relaxed);
        })),
    );

    notified.store(0, Ordering::Relaxed);
    c.batch_update(|c| {
        c.set_container_width(500);
        c.set_active_index(1);
        c.notify_resize_event(0);
    });
    assert_eq!(notified.load(Ordering::Relaxed), 1);

    notified.store(0, Ordering::Relaxed);
    c.next_page();
    assert_eq!(notified.load(Ordering::Relaxed), 1);
}

#[test]
fn on_change_reports_animation_state() {
    let animated = Arc::new(AtomicUsize::new(usize::MAX));
    let a = Arc::clone(&animated);
    let mut c = Carousel::new(
        unmeasured(10).with_on_change(Some(move |_: &Carousel, enabled| {
            a.store(enabled as usize, Ordering::Relaxed);
        })),
    );
    c.apply_resize_event(800, 0);
    assert_eq!(animated.load(Ordering::Relaxed), 0);
    c.update_animation(1000);
    assert_eq!(animated.load(Ordering::Relaxed), 1);
}

#[test]
fn page_of_item_matches_page_ranges() {
    let c = Carousel::new(unmeasured(23).with_limit(5));
    for index in 0..23 {
        let page = c.page_of_item(index).unwrap();
        let range = c.page_range(page);
        assert!(range.start_index <= index && index < range.end_index);
    }
    assert_eq!(c.page_of_item(23), None);
}

#[test]
fn keyed_page_items_expose_stable_identities() {
    let c = Carousel::new(CarouselOptions::new_with_key(
        6,
        |_| Extent::default(),
        |i| 1000u64 + i as u64,
    ));
    let mut keys = Vec::new();
    c.for_each_page_item_keyed(1, |it| keys.push(it.key));
    assert_eq!(keys, alloc::vec![1005]);
}

#[test]
fn frame_state_round_trips() {
    let mut c = Carousel::new(unmeasured(30).with_limit(5));
    c.set_container_width(720);
    c.set_active_index(3);
    c.notify_resize_event(0);
    let frame = c.frame_state();
    assert_eq!(frame.pager.active_index, 3);
    assert!(!frame.pager.animation_enabled);

    let mut fresh = Carousel::new(unmeasured(30).with_limit(5));
    fresh.restore_frame_state(frame);
    assert_eq!(fresh.container_width(), Some(720));
    assert_eq!(fresh.active_index(), 3);
    assert!(!fresh.animation_enabled());
}

#[test]
fn spacing_factor_is_a_tuning_knob() {
    let opts = CarouselOptions::new(10, |_| Extent::new(100, 100))
        .with_limit(10)
        .with_spacing_factor(1.0)
        .with_initial_width(Some(1100));
    let c = Carousel::new(opts);
    // Unscaled, ten 100-wide items stay under 1100.
    assert_eq!(c.visible_limit(), 10);

    let mut c = c;
    c.set_spacing_factor(2.0);
    assert_eq!(c.visible_limit(), 5);
}
