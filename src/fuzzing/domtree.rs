//! Fuzz the dominator-tree calculation.

use crate::DominatorTree;
use arbitrary::{Arbitrary, Result, Unstructured};
use std::collections::HashSet;

/// A random control-flow graph over vertices `0..num_vertices`, entry 0.
/// Edges may point anywhere, including backward and at the vertex itself,
/// and not every vertex need be reachable.
#[derive(Clone, Debug)]
pub struct Cfg {
    num_vertices: usize,
    succs: Vec<Vec<usize>>,
}

impl Arbitrary<'_> for Cfg {
    fn arbitrary(u: &mut Unstructured) -> Result<Cfg> {
        let num_vertices = u.int_in_range(1..=1000)?;
        let mut succs = vec![];
        for _ in 0..num_vertices {
            let mut vertex_succs = vec![];
            for _ in 0..u.int_in_range(0..=5)? {
                vertex_succs.push(u.int_in_range(0..=(num_vertices - 1))?);
            }
            succs.push(vertex_succs);
        }
        Ok(Cfg {
            num_vertices,
            succs,
        })
    }
}

/// A random walk through a [`Cfg`], starting at the entry.
#[derive(Clone, Debug)]
pub struct Path {
    vertices: Vec<usize>,
}

impl Path {
    fn choose_from_cfg(cfg: &Cfg, u: &mut Unstructured) -> Result<Path> {
        let steps = u.int_in_range(0..=(2 * cfg.num_vertices))?;
        let mut vertex = 0;
        let mut vertices = vec![vertex];
        for _ in 0..steps {
            if cfg.succs[vertex].is_empty() {
                break;
            }
            vertex = *u.choose(&cfg.succs[vertex])?;
            vertices.push(vertex);
        }
        Ok(Path { vertices })
    }
}

fn check_idom_violations(dom: &DominatorTree<usize>, path: &Path) {
    // "a dom b" means that any path from the entry through the CFG that
    // contains a and b will contain a before b. So for each vertex b_i of
    // the random path, we have the prefix set S of b_0 .. b_{i-1}, and we
    // collect all dominators of b_i; each must appear in S. (Otherwise we
    // have a counterexample path on which a dominator of b_i does not
    // precede it.)
    let mut visited = HashSet::new();
    visited.insert(0);
    for &v in &path.vertices {
        let mut domset = HashSet::new();
        domset.insert(v);
        for &d in dom.dominators_of(v).unwrap().iter() {
            assert!(visited.contains(&d));
            domset.insert(d);
        }

        // Check that `dominates()` agrees with the explicit dominator set
        // for every vertex in the analysis.
        for &u in dom.vertices() {
            assert_eq!(domset.contains(&u), dom.dominates(u, v).unwrap());
        }
        visited.insert(v);
    }
}

/// A control-flow graph ([`Cfg`]) and a [`Path`] through it.
#[derive(Clone, Debug)]
pub struct TestCase {
    cfg: Cfg,
    path: Path,
}

impl Arbitrary<'_> for TestCase {
    fn arbitrary(u: &mut Unstructured) -> Result<TestCase> {
        let cfg = Cfg::arbitrary(u)?;
        let path = Path::choose_from_cfg(&cfg, u)?;
        Ok(TestCase { cfg, path })
    }
}

pub fn check(t: TestCase) {
    let dom = DominatorTree::compute(0usize, t.cfg.num_vertices, |v| {
        t.cfg.succs[v].iter().copied()
    })
    .unwrap();
    check_idom_violations(&dom, &t.path);
}

#[test]
fn smoke() {
    arbtest::arbtest(|u| {
        let test_case = TestCase::arbitrary(u)?;
        check(test_case);
        Ok(())
    })
    .budget_ms(1_000);
}
