use crate::grammar;
use crate::value::{ValueNode, from_nodes, join_by_operator, split_by_operator, to_list};

pub(crate) fn longest_span(
    nodes: &[ValueNode],
    cursor: usize,
    test: impl Fn(&[ValueNode]) -> bool,
) -> Option<usize> {
    let mut longest = None;
    for end in cursor + 1..=nodes.len() {
        if test(&nodes[cursor..end]) {
            longest = Some(end);
        }
    }
    longest
}

// Each pass commits the first unmatched alternative, in declared order, at its
// longest span. A pass that commits nothing stops the scan.
pub fn match_unordered<const N: usize>(
    alternatives: [&str; N],
    value: &ValueNode,
) -> ([Option<ValueNode>; N], ValueNode) {
    unordered_by::<N>(value, |idx, span| grammar::matches(alternatives[idx], span))
}

pub(crate) fn unordered_by<const N: usize>(
    value: &ValueNode,
    test: impl Fn(usize, &[ValueNode]) -> bool,
) -> ([Option<ValueNode>; N], ValueNode) {
    let nodes = to_list(value);
    let mut found: [Option<ValueNode>; N] = std::array::from_fn(|_| None);
    let mut cursor = 0usize;
    while cursor < nodes.len() {
        let mut committed = false;
        for idx in 0..N {
            if found[idx].is_some() {
                continue;
            }
            if let Some(end) = longest_span(&nodes, cursor, |span| test(idx, span)) {
                found[idx] = Some(from_nodes(&nodes[cursor..end]));
                cursor = end;
                committed = true;
                break;
            }
        }
        if !committed {
            break;
        }
    }
    (found, ValueNode::List(nodes[cursor..].to_vec()))
}

pub fn match_repeated<const N: usize, F>(value: &ValueNode, mut parse_single: F) -> [ValueNode; N]
where
    F: FnMut(&ValueNode) -> [ValueNode; N],
{
    let mut fields: [Vec<ValueNode>; N] = std::array::from_fn(|_| Vec::new());
    for layer in split_by_operator(value, ",") {
        for (idx, node) in parse_single(&layer).into_iter().enumerate() {
            fields[idx].push(node);
        }
    }
    fields.map(|layers| join_by_operator(layers, ","))
}
