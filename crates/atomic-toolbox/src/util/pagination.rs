//! Pagination math.

/// `num` clamped to `max`, or `min` when `num <= min`.
pub fn num_in_range(num: usize, max: usize, min: usize) -> usize {
    if num > min {
        num.min(max)
    } else {
        min
    }
}

/// Index of the first item on 1-based `page`.
pub fn start_of_range(page: usize, per_page: usize, count: usize, min: usize) -> usize {
    let start = page.saturating_mul(per_page).saturating_sub(per_page);
    num_in_range(start, count, min)
}

/// Items on 1-based `page`. The whole slice when it fits on one page.
pub fn paginate<T>(items: &[T], per_page: usize, page: usize) -> &[T] {
    if items.len() <= per_page {
        return items;
    }
    let start = start_of_range(page, per_page, items.len(), 0);
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `count` items.
pub fn page_count(count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    count.div_ceil(per_page).max(1)
}
