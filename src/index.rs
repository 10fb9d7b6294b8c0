/// A depth-first-search index identifying one reachable vertex.
///
/// Indices are contiguous in `[0, N)` with the entry at 0, so they double as
/// positions into the per-vertex arrays of the analysis. `u32::MAX` is
/// reserved as the "absent" sentinel ([`DfsIdx::invalid`]): the spanning-tree
/// parent of the entry, or a virtual-forest node that has not been linked
/// yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "enable-serde",
    derive(::serde::Serialize, ::serde::Deserialize)
)]
pub struct DfsIdx(pub u32);

impl DfsIdx {
    #[inline(always)]
    pub fn new(i: usize) -> Self {
        Self(i as u32)
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        debug_assert!(self.is_valid());
        self.0 as usize
    }

    #[inline(always)]
    pub fn invalid() -> Self {
        Self(u32::MAX)
    }

    #[inline(always)]
    pub fn is_invalid(self) -> bool {
        self == Self::invalid()
    }

    #[inline(always)]
    pub fn is_valid(self) -> bool {
        self != Self::invalid()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sentinel() {
        assert!(DfsIdx::new(0).is_valid());
        assert!(DfsIdx::invalid().is_invalid());
        assert_eq!(DfsIdx::new(7).index(), 7);
        assert!(DfsIdx::new(1) < DfsIdx::new(2));
    }
}
