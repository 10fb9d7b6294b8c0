/*
 * Released under the terms of the Apache 2.0 license with LLVM
 * exception. See `LICENSE` for details.
 */

//! Dominator analysis of a rooted control-flow graph.
//!
//! Given an entry vertex and a successor enumerator, [`DominatorTree`]
//! computes the immediate dominator of every vertex reachable from the
//! entry using the Lengauer-Tarjan algorithm, materializes the dominator
//! tree, and answers dominance queries over the result.
//!
//! The graph itself is never materialized here: the caller supplies a
//! vertex type that is cheap to copy, compare and hash, plus a closure
//! enumerating each vertex's successors in a fixed order. Two runs over
//! inputs that compare equal vertex-for-vertex and enumerate successors in
//! the same order produce identical results.
//!
//! ```
//! use dominator::DominatorTree;
//!
//! // A diamond: 0 -> {1, 2} -> 3.
//! let succs = vec![vec![1, 2], vec![3], vec![3], vec![]];
//! let dom = DominatorTree::compute(0usize, 4, |v| succs[v].iter().copied()).unwrap();
//! assert!(dom.dominates(0, 3).unwrap());
//! assert!(!dom.dominates(1, 3).unwrap());
//! assert_eq!(dom.dominators_of(3).unwrap(), vec![0]);
//! ```

pub(crate) mod dfs;
pub(crate) mod domtree;
mod index;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;


pub use index::DfsIdx;

use fxhash::FxHashMap;
use log::trace;
use std::hash::Hash;

/// An error that aborts the analysis or a query. Every variant indicates a
/// bug in the caller; none is recoverable.
#[derive(Clone, Debug)]
pub enum DomTreeError {
    /// The declared vertex capacity is zero: there is nothing to number.
    EmptyGraph,
    /// A query received a vertex that is not reachable from the entry (or
    /// not part of the analyzed graph at all).
    UnknownVertex,
    /// The successor enumerator produced more reachable vertices than the
    /// declared capacity, so the graph is not the one the caller described.
    InvalidGraph,
}

impl std::fmt::Display for DomTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for DomTreeError {}

/// The result of one dominator analysis: the DFS numbering of the subgraph
/// reachable from the entry, the immediate-dominator array, and the
/// dominator tree built from it.
///
/// Instances are immutable once constructed; every query below is
/// read-only, so a constructed tree can be shared freely across threads.
#[derive(Clone, Debug)]
pub struct DominatorTree<V> {
    /// Vertices in DFS order; `vertex[i]` is the vertex with DFS index i.
    vertex: Vec<V>,
    /// Inverse of `vertex`.
    index: FxHashMap<V, DfsIdx>,
    /// Immediate dominator per DFS index; `idom[0] = 0`.
    idom: Vec<DfsIdx>,
    /// Children per dominator-tree parent, in DFS order. Leaves have no
    /// entry.
    tree: FxHashMap<DfsIdx, Vec<DfsIdx>>,
}

impl<V: Copy + Eq + Hash> DominatorTree<V> {
    /// Runs the analysis.
    ///
    /// `num_vertices` is an upper bound on the number of vertices reachable
    /// from `entry`; extra capacity is fine. `successors` must enumerate a
    /// vertex's successors in a deterministic order and must describe the
    /// same graph every time it is called during this run.
    pub fn compute<S, I>(entry: V, num_vertices: usize, successors: S) -> Result<Self, DomTreeError>
    where
        S: FnMut(V) -> I,
        I: IntoIterator<Item = V>,
    {
        if num_vertices == 0 {
            return Err(DomTreeError::EmptyGraph);
        }

        let dfs = dfs::number(entry, num_vertices, successors)?;
        let num_reachable = dfs.vertex.len();
        trace!(
            "dominator analysis: {} of {} vertices reachable",
            num_reachable,
            num_vertices
        );

        let idom = domtree::calculate(num_reachable, &dfs.parent, |w| &dfs.preds[w.index()][..]);

        let mut tree: FxHashMap<DfsIdx, Vec<DfsIdx>> = FxHashMap::default();
        for i in 1..num_reachable {
            tree.entry(idom[i]).or_default().push(DfsIdx::new(i));
        }

        Ok(Self {
            vertex: dfs.vertex,
            index: dfs.index,
            idom,
            tree,
        })
    }

    /// Vertices in DFS order: element i is the vertex whose DFS index is i.
    pub fn vertices(&self) -> &[V] {
        &self.vertex
    }

    /// The DFS index of every reachable vertex.
    pub fn vertex_indices(&self) -> &FxHashMap<V, DfsIdx> {
        &self.index
    }

    /// Immediate dominators per DFS index. The entry maps to itself; every
    /// other vertex maps to a strictly smaller index.
    pub fn immediate_dominators(&self) -> &[DfsIdx] {
        &self.idom
    }

    /// The dominator tree: each parent that immediately dominates at least
    /// one vertex, mapped to its children in DFS order.
    pub fn dominator_tree(&self) -> &FxHashMap<DfsIdx, Vec<DfsIdx>> {
        &self.tree
    }

    /// Checks whether `a` dominates `b`. Reflexive: a vertex dominates
    /// itself.
    pub fn dominates(&self, a: V, b: V) -> Result<bool, DomTreeError> {
        let a = self.resolve(a)?;
        let b = self.resolve(b)?;
        Ok(domtree::dominates(&self.idom, a, b))
    }

    /// The vertices strictly dominating `v`: the entry first, then `v`'s
    /// idom chain from the immediate dominator upward. The entry is always
    /// included, even for `v` = entry; `v` itself never is.
    pub fn dominators_of(&self, v: V) -> Result<Vec<V>, DomTreeError> {
        let vi = self.resolve(v)?;
        let mut dominators = vec![self.vertex[0]];
        let mut cur = self.idom[vi.index()];
        while cur != DfsIdx::new(0) {
            dominators.push(self.vertex[cur.index()]);
            cur = self.idom[cur.index()];
        }
        Ok(dominators)
    }

    fn resolve(&self, v: V) -> Result<DfsIdx, DomTreeError> {
        self.index
            .get(&v)
            .copied()
            .ok_or(DomTreeError::UnknownVertex)
    }
}
