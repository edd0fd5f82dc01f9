//! Cycle-safe, depth-bounded closure traversal.
//!
//! The taxonomy's adjacency graph is *not* guaranteed to be a DAG: authoring
//! defects introduce cycles, and multi-parent concepts make diamonds the
//! common case rather than the exception. Every traversal here is therefore
//! guarded by a per-call visited set so each reachable node is expanded at
//! most once, giving O(V+E) work and guaranteed termination regardless of
//! cycles. Depth bookkeeping only gates how far to explore, never whether a
//! node may be revisited.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// Breadth-first bounded closure over an arbitrary neighbor function.
///
/// Returns every node reachable from `root` by paths of at most `max_depth`
/// hops. `root` itself is not included. The result is a `BTreeSet` so
/// iteration order is deterministic for identical inputs.
pub fn bounded_closure<'a, F>(root: &str, max_depth: usize, neighbors: F) -> BTreeSet<String>
where
    F: Fn(&str) -> Option<&'a [String]>,
{
    let mut reached: BTreeSet<String> = BTreeSet::new();
    if max_depth == 0 {
        return reached;
    }

    let mut frontier: Vec<&'a str> = match neighbors(root) {
        Some(direct) => direct.iter().map(String::as_str).collect(),
        None => return reached,
    };

    let mut depth = 0;
    while !frontier.is_empty() && depth < max_depth {
        let mut next: Vec<&'a str> = Vec::new();
        for node in frontier {
            // First visit only: diamonds and cycles collapse here.
            if reached.insert(node.to_string()) {
                if let Some(children) = neighbors(node) {
                    next.extend(children.iter().map(String::as_str));
                }
            }
        }
        frontier = next;
        depth += 1;
    }

    reached
}

/// Descendant closure over a forward adjacency table.
pub fn descendants(
    edges: &HashMap<String, Vec<String>>,
    root: &str,
    max_depth: usize,
) -> BTreeSet<String> {
    bounded_closure(root, max_depth, |iri| edges.get(iri).map(Vec::as_slice))
}

/// One detected cycle, reported with a stable representative so output is
/// deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Lexicographically smallest member.
    pub representative: String,
    /// All members of the cycle, sorted.
    pub members: Vec<String>,
}

/// Detect every cycle in the adjacency table.
///
/// Runs an iterative Tarjan strongly-connected-component pass over all nodes
/// (sorted, for deterministic output). A component is a cycle when it has
/// more than one member, or when its single member carries a self-edge.
/// Returns cycles sorted by representative.
pub fn find_cycles(edges: &HashMap<String, Vec<String>>) -> Vec<Cycle> {
    // Stable node numbering over every IRI mentioned on either edge side.
    let mut node_set: BTreeSet<&str> = BTreeSet::new();
    for (parent, children) in edges {
        node_set.insert(parent.as_str());
        for child in children {
            node_set.insert(child.as_str());
        }
    }
    let nodes: Vec<&str> = node_set.into_iter().collect();
    let ids: HashMap<&str, usize> = nodes.iter().enumerate().map(|(i, n)| (*n, i)).collect();

    let adjacency: Vec<Vec<usize>> = nodes
        .iter()
        .map(|node| {
            edges
                .get(*node)
                .map(|children| children.iter().map(|c| ids[c.as_str()]).collect())
                .unwrap_or_default()
        })
        .collect();

    let n = nodes.len();
    let mut index_of: Vec<Option<usize>> = vec![None; n];
    let mut lowlink: Vec<usize> = vec![0; n];
    let mut on_stack: Vec<bool> = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut next_index = 0usize;
    let mut components: Vec<Vec<usize>> = Vec::new();

    // Explicit call stack of (node, next child offset) frames instead of
    // recursion: taxonomy depth is author-controlled input.
    for start in 0..n {
        if index_of[start].is_some() {
            continue;
        }
        let mut call_stack: Vec<(usize, usize)> = vec![(start, 0)];
        while let Some(frame) = call_stack.last_mut() {
            let (v, child_pos) = (frame.0, frame.1);
            if child_pos == 0 && index_of[v].is_none() {
                index_of[v] = Some(next_index);
                lowlink[v] = next_index;
                next_index += 1;
                stack.push(v);
                on_stack[v] = true;
            }

            if let Some(&w) = adjacency[v].get(child_pos) {
                frame.1 += 1;
                match index_of[w] {
                    None => call_stack.push((w, 0)),
                    Some(w_index) => {
                        if on_stack[w] {
                            lowlink[v] = lowlink[v].min(w_index);
                        }
                    }
                }
            } else {
                // All children explored; close the frame.
                call_stack.pop();
                if let Some(&(parent, _)) = call_stack.last() {
                    lowlink[parent] = lowlink[parent].min(lowlink[v]);
                }
                if index_of[v] == Some(lowlink[v]) {
                    let mut component = Vec::new();
                    loop {
                        let w = stack.pop().expect("Tarjan stack underflow");
                        on_stack[w] = false;
                        component.push(w);
                        if w == v {
                            break;
                        }
                    }
                    components.push(component);
                }
            }
        }
    }

    let mut cycles: Vec<Cycle> = components
        .into_iter()
        .filter(|component| {
            component.len() > 1 || {
                let v = component[0];
                adjacency[v].contains(&v)
            }
        })
        .map(|component| {
            let mut members: Vec<String> =
                component.iter().map(|&v| nodes[v].to_string()).collect();
            members.sort();
            Cycle {
                representative: members[0].clone(),
                members,
            }
        })
        .collect();
    cycles.sort_by(|a, b| a.representative.cmp(&b.representative));
    cycles
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxo_core::defaults::UNLIMITED_DEPTH;

    fn edges(pairs: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(parent, children)| {
                (
                    parent.to_string(),
                    children.iter().map(|c| c.to_string()).collect(),
                )
            })
            .collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_depth_zero_is_empty() {
        let e = edges(&[("A", &["B", "C"])]);
        assert!(descendants(&e, "A", 0).is_empty());
    }

    #[test]
    fn test_depth_one_is_direct_children() {
        let e = edges(&[("A", &["B", "C"]), ("B", &["D"])]);
        assert_eq!(descendants(&e, "A", 1), set(&["B", "C"]));
    }

    #[test]
    fn test_depth_two_reaches_grandchildren() {
        let e = edges(&[("A", &["B"]), ("B", &["C"]), ("C", &["D"])]);
        assert_eq!(descendants(&e, "A", 2), set(&["B", "C"]));
    }

    #[test]
    fn test_unlimited_depth_reaches_everything() {
        let e = edges(&[("A", &["B"]), ("B", &["C"]), ("C", &["D"])]);
        assert_eq!(descendants(&e, "A", UNLIMITED_DEPTH), set(&["B", "C", "D"]));
    }

    #[test]
    fn test_absent_root_returns_empty_set() {
        let e = edges(&[("A", &["B"])]);
        assert!(descendants(&e, "missing", UNLIMITED_DEPTH).is_empty());
    }

    #[test]
    fn test_diamond_counted_once() {
        // A -> {B, C}, B -> D, C -> D
        let e = edges(&[("A", &["B", "C"]), ("B", &["D"]), ("C", &["D"])]);
        let result = descendants(&e, "A", UNLIMITED_DEPTH);
        assert_eq!(result, set(&["B", "C", "D"]));
    }

    #[test]
    fn test_cycle_terminates_with_unlimited_depth() {
        // A -> B -> C -> A
        let e = edges(&[("A", &["B"]), ("B", &["C"]), ("C", &["A"])]);
        let result = descendants(&e, "A", UNLIMITED_DEPTH);
        // A is reachable from itself through the cycle.
        assert_eq!(result, set(&["A", "B", "C"]));
    }

    #[test]
    fn test_self_loop_terminates() {
        let e = edges(&[("A", &["A", "B"])]);
        assert_eq!(descendants(&e, "A", UNLIMITED_DEPTH), set(&["A", "B"]));
    }

    #[test]
    fn test_repeated_calls_identical() {
        let e = edges(&[("A", &["B", "C"]), ("C", &["D"]), ("D", &["A"])]);
        let first = descendants(&e, "A", UNLIMITED_DEPTH);
        let second = descendants(&e, "A", UNLIMITED_DEPTH);
        assert_eq!(first, second);
    }

    #[test]
    fn test_wide_diamond_linear_work() {
        // Layered graph where naive per-path expansion is exponential:
        // every node in layer i points at both nodes in layer i+1.
        let mut pairs: Vec<(String, Vec<String>)> = Vec::new();
        for layer in 0..30u32 {
            for slot in 0..2u32 {
                let from = format!("L{layer}_{slot}");
                let to = vec![format!("L{}_0", layer + 1), format!("L{}_1", layer + 1)];
                pairs.push((from, to));
            }
        }
        let e: HashMap<String, Vec<String>> = pairs.into_iter().collect();
        let result = descendants(&e, "L0_0", UNLIMITED_DEPTH);
        // 2 nodes per layer for layers 1..=30, plus the sibling L0_1 is not
        // reachable from L0_0.
        assert_eq!(result.len(), 60);
    }

    #[test]
    fn test_find_cycles_none_in_dag() {
        let e = edges(&[("A", &["B", "C"]), ("B", &["D"]), ("C", &["D"])]);
        assert!(find_cycles(&e).is_empty());
    }

    #[test]
    fn test_find_cycles_simple_cycle() {
        let e = edges(&[("A", &["B"]), ("B", &["C"]), ("C", &["A"])]);
        let cycles = find_cycles(&e);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].representative, "A");
        assert_eq!(cycles[0].members, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_find_cycles_self_loop() {
        let e = edges(&[("A", &["A"]), ("B", &["C"])]);
        let cycles = find_cycles(&e);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].members, vec!["A"]);
    }

    #[test]
    fn test_find_cycles_two_disjoint_cycles_sorted() {
        let e = edges(&[
            ("X", &["Y"]),
            ("Y", &["X"]),
            ("A", &["B"]),
            ("B", &["A"]),
        ]);
        let cycles = find_cycles(&e);
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0].representative, "A");
        assert_eq!(cycles[1].representative, "X");
    }

    #[test]
    fn test_find_cycles_representative_is_smallest() {
        let e = edges(&[("M", &["Z"]), ("Z", &["B"]), ("B", &["M"])]);
        let cycles = find_cycles(&e);
        assert_eq!(cycles[0].representative, "B");
        assert_eq!(cycles[0].members, vec!["B", "M", "Z"]);
    }

    #[test]
    fn test_find_cycles_deep_chain_no_overflow() {
        // A long path must not blow the stack: the walker is iterative.
        let mut pairs: Vec<(String, Vec<String>)> = Vec::new();
        for i in 0..50_000u32 {
            pairs.push((format!("N{i}"), vec![format!("N{}", i + 1)]));
        }
        let e: HashMap<String, Vec<String>> = pairs.into_iter().collect();
        assert!(find_cycles(&e).is_empty());
    }
}
