use crate::shorthand::LonghandPair;
use crate::value::{ValueNode, empty_value, to_list};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl BoxEdge {
    pub const ALL: [BoxEdge; 4] = [BoxEdge::Top, BoxEdge::Right, BoxEdge::Bottom, BoxEdge::Left];

    pub fn name(self) -> &'static str {
        match self {
            BoxEdge::Top => "top",
            BoxEdge::Right => "right",
            BoxEdge::Bottom => "bottom",
            BoxEdge::Left => "left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalEdge {
    Start,
    End,
}

impl LogicalEdge {
    pub const ALL: [LogicalEdge; 2] = [LogicalEdge::Start, LogicalEdge::End];

    pub fn name(self) -> &'static str {
        match self {
            LogicalEdge::Start => "start",
            LogicalEdge::End => "end",
        }
    }
}

pub(crate) fn box_values(value: &ValueNode) -> [ValueNode; 4] {
    let nodes = to_list(value);
    let top = nodes.first().cloned().unwrap_or_else(empty_value);
    let right = nodes.get(1).cloned().unwrap_or_else(|| top.clone());
    let bottom = nodes.get(2).cloned().unwrap_or_else(|| top.clone());
    let left = nodes.get(3).cloned().unwrap_or_else(|| right.clone());
    [top, right, bottom, left]
}

pub fn expand_box(name: impl Fn(BoxEdge) -> String, value: &ValueNode) -> Vec<LonghandPair> {
    BoxEdge::ALL
        .into_iter()
        .zip(box_values(value))
        .map(|(edge, value)| LonghandPair::new(name(edge), value))
        .collect()
}

pub fn expand_logical(
    name: impl Fn(LogicalEdge) -> String,
    value: &ValueNode,
) -> Vec<LonghandPair> {
    let nodes = to_list(value);
    let start = nodes.first().cloned().unwrap_or_else(empty_value);
    let end = nodes.get(1).cloned().unwrap_or_else(|| start.clone());
    LogicalEdge::ALL
        .into_iter()
        .zip([start, end])
        .map(|(edge, value)| LonghandPair::new(name(edge), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{generate, parse_value};

    fn margin(edge: BoxEdge) -> String {
        format!("margin-{}", edge.name())
    }

    fn inline(edge: LogicalEdge) -> String {
        format!("margin-inline-{}", edge.name())
    }

    fn rendered(pairs: &[LonghandPair]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|pair| (pair.property.clone(), generate(&pair.value).expect("serializable")))
            .collect()
    }

    #[test]
    fn three_values_reuse_right_for_left() {
        let value = parse_value("1px 2px 3px").expect("parse");
        assert_eq!(
            rendered(&expand_box(margin, &value)),
            vec![
                ("margin-top".to_string(), "1px".to_string()),
                ("margin-right".to_string(), "2px".to_string()),
                ("margin-bottom".to_string(), "3px".to_string()),
                ("margin-left".to_string(), "2px".to_string()),
            ]
        );
    }

    #[test]
    fn single_value_fills_every_edge() {
        for v in ["0", "auto", "calc(1px + 2%)", "var(--gap)"] {
            let one = parse_value(v).expect("parse");
            let expected = rendered(&expand_box(margin, &one));
            for count in 2..=4 {
                let repeated = parse_value(&vec![v; count].join(" ")).expect("parse");
                assert_eq!(rendered(&expand_box(margin, &repeated)), expected, "{v} x{count}");
            }
        }
    }

    #[test]
    fn logical_end_defaults_to_start() {
        for v in ["1em", "auto"] {
            let one = parse_value(v).expect("parse");
            let two = parse_value(&format!("{v} {v}")).expect("parse");
            assert_eq!(
                rendered(&expand_logical(inline, &one)),
                rendered(&expand_logical(inline, &two))
            );
        }
        let value = parse_value("1px 2px").expect("parse");
        let pairs = rendered(&expand_logical(inline, &value));
        assert_eq!(
            pairs,
            vec![
                ("margin-inline-start".to_string(), "1px".to_string()),
                ("margin-inline-end".to_string(), "2px".to_string()),
            ]
        );
    }
}
