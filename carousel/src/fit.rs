//! Greedy width-fitting.
//!
//! These are the pure layout heuristics behind the adaptive per-page limit.
//! They operate on injected measurements only, so the pagination math is
//! testable without a rendering surface.

/// Returns how many items fit in a row of `container_width`.
///
/// Item widths are accumulated left-to-right, each scaled by
/// `spacing_factor`, while the running total stays strictly under
/// `container_width`. The result is capped at `limit` and floored at 1: even
/// when the first item does not fit, one item is still shown.
///
/// A width of 0 means "not measured yet"; such items neither count nor
/// consume width. When no width is measured at all there is nothing to fit
/// against, and the caller's `limit` is returned unchanged.
pub fn visible_count(
    widths: impl IntoIterator<Item = u32>,
    container_width: u32,
    spacing_factor: f32,
    limit: usize,
) -> usize {
    let limit = limit.max(1);
    let target = container_width as f32;

    let mut fitted = 0usize;
    let mut measured_any = false;
    let mut total = 0.0f32;
    for width in widths {
        if width == 0 {
            continue;
        }
        measured_any = true;
        let scaled = width as f32 * spacing_factor;
        if total + scaled < target {
            total += scaled;
            fitted += 1;
            if fitted == limit {
                break;
            }
        } else {
            break;
        }
    }

    if !measured_any {
        return limit;
    }
    fitted.clamp(1, limit)
}

/// The tallest of the given heights, 0 when nothing is measured.
pub fn max_height(heights: impl IntoIterator<Item = u32>) -> u32 {
    heights.into_iter().max().unwrap_or(0)
}

/// `ceil(count / visible_limit)` pages, with an empty sequence still
/// producing a single (empty) page.
pub fn page_count(count: usize, visible_limit: usize) -> usize {
    if count == 0 {
        return 1;
    }
    count.div_ceil(visible_limit.max(1))
}
