use crate::enumerate::Keyed;

/// Sort keyed pairs by key, falling back to input position for ties. Positions are unique, so
/// the unstable sort here still yields a stable order of the original elements.
pub fn comparative_sort(bucket: &mut [Keyed]) {
    bucket.sort_unstable_by_key(|k| (k.key, k.index));
}
