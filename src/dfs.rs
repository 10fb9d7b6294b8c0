/*
 * Released under the terms of the Apache 2.0 license with LLVM
 * exception. See `LICENSE` for details.
 */

//! Depth-first numbering of the reachable subgraph.

use crate::{DfsIdx, DomTreeError};
use fxhash::FxHashMap;
use smallvec::{smallvec, SmallVec};
use std::hash::Hash;

/// Arrays produced by the numbering pass, all indexed by DFS index and of
/// length N, the number of vertices reachable from the entry.
pub(crate) struct DfsTree<V> {
    /// Vertices in DFS order: `vertex[i]` is the vertex with index i.
    pub vertex: Vec<V>,
    /// Inverse of `vertex`.
    pub index: FxHashMap<V, DfsIdx>,
    /// DFS spanning-tree parent; invalid only for the entry.
    pub parent: Vec<DfsIdx>,
    /// Graph predecessors in DFS-index terms. Parallel edges collapse.
    pub preds: Vec<SmallVec<[DfsIdx; 4]>>,
}

/// Walks the graph from `entry`, assigning contiguous DFS indices starting
/// at 0 and recording spanning-tree parents and predecessor sets.
///
/// The traversal keeps an explicit stack of in-progress successor
/// enumerations, so deep graphs cannot overflow the call stack; index
/// assignment order is the same as the recursive formulation for a given
/// successor order.
pub(crate) fn number<V, S, I>(
    entry: V,
    num_vertices: usize,
    mut successors: S,
) -> Result<DfsTree<V>, DomTreeError>
where
    V: Copy + Eq + Hash,
    S: FnMut(V) -> I,
    I: IntoIterator<Item = V>,
{
    debug_assert!(num_vertices > 0);

    struct Frame<It> {
        idx: DfsIdx,
        succs: It,
    }

    let mut vertex = Vec::with_capacity(num_vertices);
    let mut index = FxHashMap::default();
    let mut parent = Vec::with_capacity(num_vertices);
    let mut preds: Vec<SmallVec<[DfsIdx; 4]>> = Vec::with_capacity(num_vertices);

    index.insert(entry, DfsIdx::new(0));
    vertex.push(entry);
    parent.push(DfsIdx::invalid());
    preds.push(SmallVec::new());

    let mut stack: SmallVec<[Frame<I::IntoIter>; 64]> = smallvec![Frame {
        idx: DfsIdx::new(0),
        succs: successors(entry).into_iter(),
    }];

    while let Some(frame) = stack.last_mut() {
        let vi = frame.idx;
        match frame.succs.next() {
            None => {
                stack.pop();
            }
            Some(w) => {
                let wi = match index.get(&w) {
                    Some(&wi) => wi,
                    None => {
                        // First visit: number w, then descend into it.
                        if vertex.len() == num_vertices {
                            return Err(DomTreeError::InvalidGraph);
                        }
                        let wi = DfsIdx::new(vertex.len());
                        index.insert(w, wi);
                        vertex.push(w);
                        parent.push(vi);
                        preds.push(SmallVec::new());
                        stack.push(Frame {
                            idx: wi,
                            succs: successors(w).into_iter(),
                        });
                        wi
                    }
                };
                let ps = &mut preds[wi.index()];
                if !ps.contains(&vi) {
                    ps.push(vi);
                }
            }
        }
    }

    Ok(DfsTree {
        vertex,
        index,
        parent,
        preds,
    })
}
