use crate::enumerate::Keyed;

/// Reorder `data` so that position `i` holds the element that was at `sorted[i].index`.
///
/// Works for any element type by following each cycle of the permutation with swaps, so
/// elements are never cloned and at most `data.len()` swaps are made.
pub fn apply_order<T>(data: &mut [T], sorted: &[Keyed]) {
    debug_assert_eq!(data.len(), sorted.len());

    let mut order: Vec<usize> = sorted.iter().map(|k| k.index).collect();

    for start in 0..order.len() {
        if order[start] == start {
            continue;
        }

        let mut cur = start;
        loop {
            let src = order[cur];
            order[cur] = cur;

            if src == start {
                break;
            }

            data.swap(cur, src);
            cur = src;
        }
    }
}
