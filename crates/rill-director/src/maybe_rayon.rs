//! Compatibility layer for rayon/sequential execution.
//!
//! With the `parallel` feature this re-exports rayon's prelude. Without it,
//! a sequential stand-in provides `into_par_iter()` so the pass is written
//! once and resolves to the standard `Iterator` methods.

#[cfg(feature = "parallel")]
pub(crate) use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
mod sequential {
    /// Sequential stand-in for `rayon::prelude::IntoParallelIterator`.
    pub(crate) trait IntoParallelIterator {
        type Iter;
        fn into_par_iter(self) -> Self::Iter;
    }

    impl<I: IntoIterator> IntoParallelIterator for I {
        type Iter = I::IntoIter;
        fn into_par_iter(self) -> Self::Iter {
            self.into_iter()
        }
    }
}

#[cfg(not(feature = "parallel"))]
pub(crate) use sequential::*;
