use bitflags::bitflags;

bitflags! {
    /// What a query target can express natively. The compiler consults these
    /// before lowering; store-specific limitations never leak into the
    /// grammar itself.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TargetCapabilities: u8 {
        /// The target has a native negation combinator. Without it, the
        /// compiler pushes negations down to comparison level first.
        const NATIVE_NOT = 1 << 0;
        /// The target can express `>`, `<`, `>=`, `<=` terms.
        const ORDERED_COMPARISONS = 1 << 1;
    }
}

impl TargetCapabilities {
    pub fn full() -> Self {
        TargetCapabilities::all()
    }
}
