//! Memoisation for recurrences over a DAG of states
//!
//! A problem names the states each state depends on and how to combine their
//! values; [`DpCache`] resolves the dependencies recursively and computes each
//! state exactly once.
//!
//! # Warning: No Cycle Detection
//!
//! Cyclic dependencies recurse until the stack overflows. Dependencies
//! **must** form a DAG.
//!
//! # Example
//!
//! ```rust
//! use aoc_2023::utils::memo::{DpCache, DpProblem};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<u64, u64> for Fibonacci {
//!     fn deps(&self, n: &u64) -> Vec<u64> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!
//!     fn compute(&self, n: &u64, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::new(Fibonacci);
//! assert_eq!(cache.get(&50), 12_586_269_025);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

/// A dynamic programming problem over states `I` with values `K`
pub trait DpProblem<I, K> {
    /// The states this state depends on; empty for base cases
    fn deps(&self, index: &I) -> Vec<I>;

    /// The value of a state given its dependencies' values, in `deps` order
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}

/// Lazily evaluated, hash-map backed memo table for a [`DpProblem`]
pub struct DpCache<I, K, P> {
    values: RefCell<HashMap<I, K>>,
    problem: P,
}

impl<I, K, P> DpCache<I, K, P>
where
    I: Hash + Eq + Clone,
    K: Clone,
    P: DpProblem<I, K>,
{
    pub fn new(problem: P) -> Self {
        Self {
            values: RefCell::new(HashMap::new()),
            problem,
        }
    }

    /// The value of `index`, computing it and its dependencies if needed
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.values.borrow().get(index) {
            return value.clone();
        }

        // no borrow is held while dependencies resolve
        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect();
        let value = self.problem.compute(index, dep_values);

        self.values
            .borrow_mut()
            .entry(index.clone())
            .or_insert(value)
            .clone()
    }

    /// Number of states computed so far
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Paths through an n x m lattice moving only right or down
    struct LatticePaths<'a> {
        computed: &'a Cell<usize>,
    }

    impl DpProblem<(u32, u32), u64> for LatticePaths<'_> {
        fn deps(&self, &(r, c): &(u32, u32)) -> Vec<(u32, u32)> {
            let mut deps = Vec::new();
            if r > 0 {
                deps.push((r - 1, c));
            }
            if c > 0 {
                deps.push((r, c - 1));
            }
            deps
        }

        fn compute(&self, _: &(u32, u32), deps: Vec<u64>) -> u64 {
            self.computed.set(self.computed.get() + 1);
            if deps.is_empty() { 1 } else { deps.iter().sum() }
        }
    }

    #[test]
    fn test_each_state_computed_once() {
        let computed = Cell::new(0);
        let cache = DpCache::new(LatticePaths {
            computed: &computed,
        });

        assert_eq!(cache.get(&(16, 16)), 601_080_390);
        assert_eq!(computed.get(), 17 * 17);
        assert_eq!(cache.len(), 17 * 17);

        assert_eq!(cache.get(&(2, 2)), 6);
        assert_eq!(computed.get(), 17 * 17);
    }
}
