/// An integer key produced by an enumeration function.
///
/// The sorter only ever orders by keys, never by elements, so anything that
/// can cheaply be mapped to one of these types can be radix sorted.
///
///  * `to_wide` must be lossless and order preserving.
///  * The sorter only accepts non-negative keys, unless the sort is rebased with
///    `RadixSortBuilder::with_rebase`, in which case keys are shifted by the
///    minimum key first.
///
/// ```ignore
/// use keyed_radix::EnumKey;
///
/// #[derive(Clone, Copy)]
/// struct Priority(u8);
///
/// impl EnumKey for Priority {
///     #[inline]
///     fn to_wide(self) -> i128 {
///         self.0 as i128
///     }
/// }
/// ```
pub trait EnumKey: Copy {
    fn to_wide(self) -> i128;
}
