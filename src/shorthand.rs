use crate::debug::{DebugLogger, json_string, warn_longhand_dropped_once};
use crate::edges::{BoxEdge, LogicalEdge, box_values, expand_box, expand_logical};
use crate::grammar::{self, is_css_wide_keyword};
use crate::matcher::{longest_span, match_repeated, match_unordered, unordered_by};
use crate::value::{
    ValueNode, dimension, empty_value, from_nodes, generate, identifier, number, percentage,
    split_by_operator, split_by_operator_keep_empty, to_list,
};
use std::collections::HashMap;
use std::sync::OnceLock;

const MAX_EXPANSION_DEPTH: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct LonghandPair {
    pub property: String,
    pub value: ValueNode,
}

impl LonghandPair {
    pub fn new(property: impl Into<String>, value: ValueNode) -> Self {
        Self {
            property: property.into(),
            value,
        }
    }
}

type ExpandFn = fn(&str, &ValueNode) -> Vec<LonghandPair>;

const SHORTHANDS: &[(&str, ExpandFn)] = &[
    ("margin", expand_box_family),
    ("padding", expand_box_family),
    ("inset", expand_box_family),
    ("scroll-margin", expand_box_family),
    ("scroll-padding", expand_box_family),
    ("border-width", expand_box_family),
    ("border-style", expand_box_family),
    ("border-color", expand_box_family),
    ("margin-inline", expand_logical_family),
    ("margin-block", expand_logical_family),
    ("padding-inline", expand_logical_family),
    ("padding-block", expand_logical_family),
    ("inset-inline", expand_logical_family),
    ("inset-block", expand_logical_family),
    ("scroll-margin-inline", expand_logical_family),
    ("scroll-margin-block", expand_logical_family),
    ("scroll-padding-inline", expand_logical_family),
    ("scroll-padding-block", expand_logical_family),
    ("border-inline-width", expand_logical_family),
    ("border-inline-style", expand_logical_family),
    ("border-inline-color", expand_logical_family),
    ("border-block-width", expand_logical_family),
    ("border-block-style", expand_logical_family),
    ("border-block-color", expand_logical_family),
    ("border", expand_border),
    ("border-top", expand_line),
    ("border-right", expand_line),
    ("border-bottom", expand_line),
    ("border-left", expand_line),
    ("border-inline", expand_line),
    ("border-block", expand_line),
    ("border-inline-start", expand_line),
    ("border-inline-end", expand_line),
    ("border-block-start", expand_line),
    ("border-block-end", expand_line),
    ("column-rule", expand_line),
    ("outline", expand_outline),
    ("border-radius", expand_border_radius),
    ("border-image", expand_border_image),
    ("mask-border", expand_mask_border),
    ("font", expand_font),
    ("font-synthesis", expand_font_synthesis),
    ("font-variant", expand_font_variant),
    ("flex", expand_flex),
    ("flex-flow", expand_flex_flow),
    ("animation", expand_animation),
    ("animation-range", expand_animation_range),
    ("transition", expand_transition),
    ("mask", expand_mask),
    ("offset", expand_offset),
    ("scroll-timeline", expand_scroll_timeline),
    ("view-timeline", expand_view_timeline),
    ("grid-template", expand_grid_template),
    ("grid", expand_grid),
    ("grid-row", expand_grid_line),
    ("grid-column", expand_grid_line),
    ("grid-area", expand_grid_area),
    ("white-space", expand_white_space),
    ("text-wrap", expand_text_wrap),
    ("background", expand_background),
    ("background-position", expand_background_position),
    ("text-decoration", expand_text_decoration),
    ("text-emphasis", expand_text_emphasis),
    ("columns", expand_columns),
    ("list-style", expand_list_style),
    ("overflow", expand_axis_pair),
    ("overscroll-behavior", expand_axis_pair),
    ("gap", expand_axis_pair),
    ("grid-gap", expand_axis_pair),
    ("place-content", expand_place),
    ("place-items", expand_place),
    ("place-self", expand_place),
    ("container", expand_container),
    ("contain-intrinsic-size", expand_contain_intrinsic_size),
    ("caret", expand_caret),
    ("position-try", expand_position_try),
];

fn lookup(property: &str) -> Option<ExpandFn> {
    static TABLE: OnceLock<HashMap<&'static str, ExpandFn>> = OnceLock::new();
    TABLE
        .get_or_init(|| SHORTHANDS.iter().copied().collect())
        .get(property)
        .copied()
}

pub fn is_shorthand(property: &str) -> bool {
    lookup(&property.to_ascii_lowercase()).is_some()
}

pub fn supported_shorthands() -> Vec<&'static str> {
    SHORTHANDS.iter().map(|(name, _)| *name).collect()
}

pub fn longhands_of(property: &str) -> Option<Vec<String>> {
    let property = property.to_ascii_lowercase();
    lookup(&property)?;
    Some(longhand_names(&property, 0))
}

fn longhand_names(property: &str, depth: usize) -> Vec<String> {
    match lookup(property) {
        Some(expand) if depth <= MAX_EXPANSION_DEPTH => expand(property, &empty_value())
            .into_iter()
            .flat_map(|pair| longhand_names(&pair.property, depth + 1))
            .collect(),
        _ => vec![property.to_string()],
    }
}

pub fn expand_shorthand(property: &str, value: &ValueNode) -> Vec<LonghandPair> {
    expand_at_depth(property, value, 0)
}

fn expand_at_depth(property: &str, value: &ValueNode, depth: usize) -> Vec<LonghandPair> {
    let name = property.to_ascii_lowercase();
    let Some(expand) = lookup(&name) else {
        return vec![LonghandPair::new(property, value.clone())];
    };
    if depth > MAX_EXPANSION_DEPTH {
        return vec![LonghandPair::new(property, value.clone())];
    }
    let nodes = to_list(value);
    if let [keyword] = nodes.as_slice() {
        if is_css_wide_keyword(keyword) {
            return fill_all(&name, keyword);
        }
    }
    if is_empty_value(&nodes) {
        return fill_all(&name, &identifier("unset"));
    }
    expand(&name, value)
        .into_iter()
        .flat_map(|pair| expand_at_depth(&pair.property, &pair.value, depth + 1))
        .collect()
}

fn fill_all(shorthand: &str, keyword: &ValueNode) -> Vec<LonghandPair> {
    longhand_names(shorthand, 0)
        .into_iter()
        .map(|name| LonghandPair::new(name, keyword.clone()))
        .collect()
}

fn is_empty_value(nodes: &[ValueNode]) -> bool {
    match nodes {
        [] => true,
        [ValueNode::String(text)] => text.is_empty(),
        _ => false,
    }
}

pub(crate) fn serialize_longhands(
    pairs: Vec<LonghandPair>,
    debug: Option<&DebugLogger>,
) -> Vec<(String, String)> {
    let mut out = Vec::with_capacity(pairs.len());
    for pair in pairs {
        match generate(&pair.value) {
            Ok(text) => out.push((pair.property, text)),
            Err(err) => {
                let reason = err.to_string();
                warn_longhand_dropped_once(&pair.property, &reason);
                if let Some(logger) = debug {
                    let json = format!(
                        "{{\"type\":\"css.longhand.dropped\",\"property\":{},\"reason\":{}}}",
                        json_string(&pair.property),
                        json_string(&reason)
                    );
                    logger.log_json(&json);
                    logger.increment("css.longhand.dropped", 1);
                }
            }
        }
    }
    out
}

fn pairs<const N: usize>(names: [&str; N], values: [ValueNode; N]) -> Vec<LonghandPair> {
    names
        .into_iter()
        .zip(values)
        .map(|(name, value)| LonghandPair::new(name, value))
        .collect()
}

fn or_ident(found: Option<ValueNode>, default: &str) -> ValueNode {
    found.unwrap_or_else(|| identifier(default))
}

fn single_ident<'a>(nodes: &'a [ValueNode]) -> Option<&'a str> {
    match nodes {
        [node] => node.as_ident(),
        _ => None,
    }
}

fn take_longest(nodes: &[ValueNode], cursor: &mut usize, syntax: &str) -> Option<ValueNode> {
    let end = longest_span(nodes, *cursor, |span| grammar::matches(syntax, span))?;
    let node = from_nodes(&nodes[*cursor..end]);
    *cursor = end;
    Some(node)
}

fn segment_or(segments: &[ValueNode], idx: usize, default: impl FnOnce() -> ValueNode) -> ValueNode {
    segments
        .get(idx)
        .filter(|segment| !segment.is_empty())
        .cloned()
        .unwrap_or_else(default)
}

fn expand_box_family(shorthand: &str, value: &ValueNode) -> Vec<LonghandPair> {
    expand_box(
        |edge: BoxEdge| match shorthand {
            "inset" => edge.name().to_string(),
            _ => match shorthand.strip_prefix("border-") {
                Some(kind) => format!("border-{}-{}", edge.name(), kind),
                None => format!("{}-{}", shorthand, edge.name()),
            },
        },
        value,
    )
}

fn expand_logical_family(shorthand: &str, value: &ValueNode) -> Vec<LonghandPair> {
    expand_logical(
        |edge: LogicalEdge| {
            match shorthand
                .strip_prefix("border-")
                .and_then(|rest| rest.split_once('-'))
            {
                Some((axis, kind)) => format!("border-{}-{}-{}", axis, edge.name(), kind),
                None => format!("{}-{}", shorthand, edge.name()),
            }
        },
        value,
    )
}

fn expand_border(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    BoxEdge::ALL
        .into_iter()
        .map(|edge| LonghandPair::new(format!("border-{}", edge.name()), value.clone()))
        .collect()
}

fn expand_line(shorthand: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let ([width, style, color], _) =
        match_unordered(["<line-width>", "<line-style>", "<color>"], value);
    vec![
        LonghandPair::new(format!("{shorthand}-width"), or_ident(width, "medium")),
        LonghandPair::new(format!("{shorthand}-style"), or_ident(style, "none")),
        LonghandPair::new(format!("{shorthand}-color"), or_ident(color, "currentcolor")),
    ]
}

fn expand_outline(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    // `auto` is both a style and a color; style claims it first.
    let ([style, width, color], _) = match_unordered(
        ["<'outline-style'>", "<'outline-width'>", "<'outline-color'>"],
        value,
    );
    pairs(
        ["outline-width", "outline-style", "outline-color"],
        [
            or_ident(width, "medium"),
            or_ident(style, "none"),
            or_ident(color, "currentcolor"),
        ],
    )
}

fn expand_border_radius(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    const CORNERS: [&str; 4] = ["top-left", "top-right", "bottom-right", "bottom-left"];
    let groups = split_by_operator(value, "/");
    let first = groups
        .first()
        .map(box_values)
        .unwrap_or_else(|| box_values(&empty_value()));
    let second = groups.get(1).map(box_values);
    CORNERS
        .iter()
        .enumerate()
        .map(|(idx, corner)| {
            let radius = match &second {
                Some(second) => ValueNode::List(vec![first[idx].clone(), second[idx].clone()]),
                None => first[idx].clone(),
            };
            LonghandPair::new(format!("border-{corner}-radius"), radius)
        })
        .collect()
}

fn slice_pairs(prefix: &str, slice: Option<ValueNode>) -> Vec<LonghandPair> {
    let segments = slice
        .map(|slice| split_by_operator_keep_empty(&slice, "/"))
        .unwrap_or_default();
    ["slice", "width", "outset"]
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            LonghandPair::new(
                format!("{prefix}-{field}"),
                segment_or(&segments, idx, || identifier("initial")),
            )
        })
        .collect()
}

fn expand_border_image(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let ([source, slice, repeat], _) = match_unordered(
        [
            "<'border-image-source'>",
            "<'border-image-slice'> [ / <'border-image-width'> | / <'border-image-width'>? / <'border-image-outset'> ]?",
            "<'border-image-repeat'>",
        ],
        value,
    );
    let mut out = vec![LonghandPair::new("border-image-source", or_ident(source, "initial"))];
    out.extend(slice_pairs("border-image", slice));
    out.push(LonghandPair::new("border-image-repeat", or_ident(repeat, "initial")));
    out
}

fn expand_mask_border(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let ([source, slice, repeat, mode], _) = match_unordered(
        [
            "<'mask-border-source'>",
            "<'mask-border-slice'> [ / <'mask-border-width'> | / <'mask-border-width'>? / <'mask-border-outset'> ]?",
            "<'mask-border-repeat'>",
            "<'mask-border-mode'>",
        ],
        value,
    );
    let mut out = vec![LonghandPair::new("mask-border-source", or_ident(source, "initial"))];
    out.extend(slice_pairs("mask-border", slice));
    out.push(LonghandPair::new("mask-border-repeat", or_ident(repeat, "initial")));
    out.push(LonghandPair::new("mask-border-mode", or_ident(mode, "initial")));
    out
}

const FONT_LONGHANDS: [&str; 7] = [
    "font-style",
    "font-variant-caps",
    "font-weight",
    "font-stretch",
    "font-size",
    "line-height",
    "font-family",
];

const SYSTEM_FONTS: [&str; 6] = [
    "caption",
    "icon",
    "menu",
    "message-box",
    "small-caption",
    "status-bar",
];

fn expand_font(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let nodes = to_list(value);
    if let Some(system) = single_ident(&nodes) {
        if SYSTEM_FONTS.iter().any(|font| system.eq_ignore_ascii_case(font)) {
            let family = identifier(system);
            return FONT_LONGHANDS
                .iter()
                .map(|name| match *name {
                    "font-family" => LonghandPair::new(*name, family.clone()),
                    _ => LonghandPair::new(*name, identifier("initial")),
                })
                .collect();
        }
    }
    let ([style, caps, weight, stretch], rest) = match_unordered(
        [
            "<'font-style'>",
            "normal | small-caps",
            "<'font-weight'>",
            "<font-stretch-css3>",
        ],
        value,
    );
    let rest = to_list(&rest);
    let head = &rest[..rest.len().min(3)];
    let (size, line_height, family) =
        if head.len() == 3 && grammar::matches("<'font-size'> / <'line-height'>", head) {
            (Some(rest[0].clone()), Some(rest[2].clone()), &rest[3..])
        } else {
            (rest.first().cloned(), None, rest.get(1..).unwrap_or(&[]))
        };
    let family = if family.is_empty() {
        identifier("initial")
    } else {
        from_nodes(family)
    };
    pairs(
        FONT_LONGHANDS,
        [
            or_ident(style, "initial"),
            or_ident(caps, "initial"),
            or_ident(weight, "initial"),
            or_ident(stretch, "initial"),
            or_ident(size, "initial"),
            or_ident(line_height, "normal"),
            family,
        ],
    )
}

fn expand_font_synthesis(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let nodes = to_list(value);
    let none = single_ident(&nodes).is_some_and(|ident| ident.eq_ignore_ascii_case("none"));
    let (flags, _) = match_unordered(["weight", "style", "small-caps", "position"], value);
    let [weight, style, small_caps, position] =
        flags.map(|flag| identifier(if flag.is_some() && !none { "auto" } else { "none" }));
    pairs(
        [
            "font-synthesis-weight",
            "font-synthesis-style",
            "font-synthesis-small-caps",
            "font-synthesis-position",
        ],
        [weight, style, small_caps, position],
    )
}

const FONT_VARIANT_LONGHANDS: [&str; 7] = [
    "font-variant-ligatures",
    "font-variant-caps",
    "font-variant-alternates",
    "font-variant-numeric",
    "font-variant-east-asian",
    "font-variant-position",
    "font-variant-emoji",
];

fn expand_font_variant(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let nodes = to_list(value);
    if let Some(keyword) = single_ident(&nodes) {
        let keyword = keyword.to_ascii_lowercase();
        if keyword == "normal" || keyword == "none" {
            return FONT_VARIANT_LONGHANDS
                .iter()
                .map(|name| {
                    let value = match *name {
                        "font-variant-ligatures" => keyword.as_str(),
                        _ => "normal",
                    };
                    LonghandPair::new(*name, identifier(value))
                })
                .collect();
        }
    }
    let (found, _) = match_unordered(
        [
            "<ligatures-list>",
            "small-caps | all-small-caps | petite-caps | all-petite-caps | unicase | titling-caps",
            "<alternates-list>",
            "<numeric-list>",
            "<east-asian-list>",
            "sub | super",
            "text | emoji | unicode",
        ],
        value,
    );
    pairs(
        FONT_VARIANT_LONGHANDS,
        found.map(|found| or_ident(found, "normal")),
    )
}

fn expand_flex(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let nodes = to_list(value);
    let keyword = single_ident(&nodes).map(str::to_ascii_lowercase);
    let values = match keyword.as_deref() {
        Some("auto") => [number("1"), number("1"), identifier("auto")],
        Some("none") => [number("0"), number("0"), identifier("auto")],
        _ => {
            let ([grow, shrink, basis], _) =
                match_unordered(["<'flex-grow'>", "<'flex-shrink'>", "<'flex-basis'>"], value);
            [
                grow.unwrap_or_else(|| number("1")),
                shrink.unwrap_or_else(|| number("1")),
                basis.unwrap_or_else(|| number("0")),
            ]
        }
    };
    pairs(["flex-grow", "flex-shrink", "flex-basis"], values)
}

fn expand_flex_flow(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let ([direction, wrap], _) =
        match_unordered(["<'flex-direction'>", "<'flex-wrap'>"], value);
    pairs(
        ["flex-direction", "flex-wrap"],
        [or_ident(direction, "row"), or_ident(wrap, "nowrap")],
    )
}

fn expand_animation(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let [name, duration, timing, delay, iteration, direction, fill, play_state] =
        match_repeated(value, |layer| {
            // The name goes last so keywords are claimed by their own fields.
            let ([duration, timing, delay, iteration, direction, fill, play_state, name], _) =
                match_unordered(
                    [
                        "<time>",
                        "<easing-function>",
                        "<time>",
                        "<single-animation-iteration-count>",
                        "<single-animation-direction>",
                        "<single-animation-fill-mode>",
                        "<single-animation-play-state>",
                        "none | <keyframes-name>",
                    ],
                    layer,
                );
            [
                or_ident(name, "none"),
                duration.unwrap_or_else(|| dimension("0", "s")),
                or_ident(timing, "ease"),
                delay.unwrap_or_else(|| dimension("0", "s")),
                iteration.unwrap_or_else(|| number("1")),
                or_ident(direction, "normal"),
                or_ident(fill, "none"),
                or_ident(play_state, "running"),
            ]
        });
    pairs(
        [
            "animation-name",
            "animation-duration",
            "animation-timing-function",
            "animation-delay",
            "animation-iteration-count",
            "animation-direction",
            "animation-fill-mode",
            "animation-play-state",
            "animation-timeline",
            "animation-range-start",
            "animation-range-end",
        ],
        [
            name,
            duration,
            timing,
            delay,
            iteration,
            direction,
            fill,
            play_state,
            identifier("auto"),
            identifier("normal"),
            identifier("normal"),
        ],
    )
}

fn expand_animation_range(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let [start, end] = match_repeated(value, |layer| {
        let nodes = to_list(layer);
        let is_range_name =
            |node: &ValueNode| grammar::matches_node("<timeline-range-name>", node);
        let start_len = match nodes.as_slice() {
            [name, offset, ..]
                if is_range_name(name) && grammar::matches_node("<length-percentage>", offset) =>
            {
                2
            }
            _ => nodes.len().min(1),
        };
        let start = from_nodes(&nodes[..start_len]);
        let rest = &nodes[start_len..];
        let end = if !rest.is_empty() {
            from_nodes(rest)
        } else {
            match nodes.first() {
                Some(name) if is_range_name(name) => name.clone(),
                _ => identifier("normal"),
            }
        };
        [start, end]
    });
    pairs(["animation-range-start", "animation-range-end"], [start, end])
}

fn expand_transition(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let fields = match_repeated(value, |layer| {
        let ([duration, timing, delay, behavior, property], _) = match_unordered(
            [
                "<time>",
                "<easing-function>",
                "<time>",
                "<transition-behavior-value>",
                "none | <single-transition-property>",
            ],
            layer,
        );
        [
            or_ident(property, "all"),
            duration.unwrap_or_else(|| dimension("0", "s")),
            or_ident(timing, "ease"),
            delay.unwrap_or_else(|| dimension("0", "s")),
            or_ident(behavior, "normal"),
        ]
    });
    pairs(
        [
            "transition-property",
            "transition-duration",
            "transition-timing-function",
            "transition-delay",
            "transition-behavior",
        ],
        fields,
    )
}

fn split_position_size(position: Option<ValueNode>) -> (Option<ValueNode>, Option<ValueNode>) {
    match position {
        Some(position) => {
            let parts = split_by_operator(&position, "/");
            (parts.first().cloned(), parts.get(1).cloned())
        }
        None => (None, None),
    }
}

fn origin_position() -> ValueNode {
    ValueNode::List(vec![percentage("0"), percentage("0")])
}

fn expand_mask(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let fields = match_repeated(value, |layer| {
        let ([image, position, repeat, origin, clip, composite, mode], _) = match_unordered(
            [
                "<mask-reference>",
                "<position> [ / <bg-size> ]?",
                "<repeat-style>",
                "<geometry-box>",
                "<geometry-box> | no-clip",
                "<compositing-operator>",
                "<masking-mode>",
            ],
            layer,
        );
        let (position, size) = split_position_size(position);
        let clip = clip.or_else(|| {
            origin
                .clone()
                .filter(|origin| grammar::matches_node("<geometry-box> | no-clip", origin))
        });
        [
            or_ident(image, "none"),
            position.unwrap_or_else(origin_position),
            or_ident(size, "auto"),
            or_ident(repeat, "repeat"),
            or_ident(origin, "border-box"),
            or_ident(clip, "border-box"),
            or_ident(composite, "add"),
            or_ident(mode, "match-source"),
        ]
    });
    pairs(
        [
            "mask-image",
            "mask-position",
            "mask-size",
            "mask-repeat",
            "mask-origin",
            "mask-clip",
            "mask-composite",
            "mask-mode",
        ],
        fields,
    )
}

fn expand_offset(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let parts = split_by_operator_keep_empty(value, "/");
    let main = parts.first().map(to_list).unwrap_or_default();
    let mut cursor = 0usize;
    let position = take_longest(&main, &mut cursor, "<'offset-position'>");
    let path = take_longest(&main, &mut cursor, "<'offset-path'>");
    let ([distance, rotate], _) = match_unordered(
        ["<'offset-distance'>", "<'offset-rotate'>"],
        &ValueNode::List(main[cursor..].to_vec()),
    );
    pairs(
        [
            "offset-position",
            "offset-path",
            "offset-distance",
            "offset-rotate",
            "offset-anchor",
        ],
        [
            or_ident(position, "normal"),
            or_ident(path, "none"),
            distance.unwrap_or_else(|| number("0")),
            or_ident(rotate, "auto"),
            segment_or(&parts, 1, || identifier("auto")),
        ],
    )
}

fn expand_scroll_timeline(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let fields = match_repeated(value, |layer| {
        let nodes = to_list(layer);
        [
            or_ident(nodes.first().cloned(), "none"),
            or_ident(nodes.get(1).cloned(), "block"),
        ]
    });
    pairs(["scroll-timeline-name", "scroll-timeline-axis"], fields)
}

fn expand_view_timeline(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let fields = match_repeated(value, |layer| {
        let nodes = to_list(layer);
        let rest = ValueNode::List(nodes.get(1..).unwrap_or(&[]).to_vec());
        let ([axis, inset], _) = match_unordered(
            ["block | inline | x | y", "[ auto | <length-percentage> ]{1,2}"],
            &rest,
        );
        [
            or_ident(nodes.first().cloned(), "none"),
            or_ident(axis, "block"),
            or_ident(inset, "auto"),
        ]
    });
    pairs(
        ["view-timeline-name", "view-timeline-axis", "view-timeline-inset"],
        fields,
    )
}

fn grid_template_parts(value: &ValueNode) -> [ValueNode; 3] {
    let nodes = to_list(value);
    if nodes.is_empty() || single_ident(&nodes).is_some_and(|ident| ident.eq_ignore_ascii_case("none"))
    {
        return [identifier("none"), identifier("none"), identifier("none")];
    }
    let sides = split_by_operator(value, "/");
    let rows_side = sides.first().map(to_list).unwrap_or_default();
    let columns = sides.get(1).cloned().unwrap_or_else(|| identifier("none"));

    // Area strings go to areas; everything else, line names included, is the row list.
    let (areas, rows): (Vec<ValueNode>, Vec<ValueNode>) =
        rows_side.into_iter().partition(ValueNode::is_string);
    let rows = if rows.is_empty() {
        identifier("none")
    } else {
        ValueNode::List(rows)
    };
    let areas = if areas.is_empty() {
        identifier("none")
    } else {
        ValueNode::List(areas)
    };
    [rows, columns, areas]
}

fn expand_grid_template(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    pairs(
        [
            "grid-template-rows",
            "grid-template-columns",
            "grid-template-areas",
        ],
        grid_template_parts(value),
    )
}

fn auto_flow_side(nodes: &[ValueNode], axis: &str) -> Option<(ValueNode, ValueNode)> {
    if !nodes.iter().any(|node| node.is_ident("auto-flow")) {
        return None;
    }
    let dense = nodes.iter().any(|node| node.is_ident("dense"));
    let tracks: Vec<ValueNode> = nodes
        .iter()
        .filter(|node| !node.is_ident("auto-flow") && !node.is_ident("dense"))
        .cloned()
        .collect();
    let flow = if dense {
        ValueNode::List(vec![identifier(axis), identifier("dense")])
    } else {
        identifier(axis)
    };
    let tracks = if tracks.is_empty() {
        identifier("auto")
    } else {
        from_nodes(&tracks)
    };
    Some((flow, tracks))
}

fn expand_grid(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let sides = split_by_operator(value, "/");
    let left = sides.first().map(to_list).unwrap_or_default();
    let right = sides.get(1).map(to_list).unwrap_or_default();
    let side_or_none = |nodes: &[ValueNode]| {
        if nodes.is_empty() {
            identifier("none")
        } else {
            from_nodes(nodes)
        }
    };
    let values = if let Some((flow, tracks)) = auto_flow_side(&left, "row") {
        [
            identifier("none"),
            side_or_none(right.as_slice()),
            identifier("none"),
            tracks,
            identifier("auto"),
            flow,
        ]
    } else if let Some((flow, tracks)) = auto_flow_side(&right, "column") {
        [
            side_or_none(left.as_slice()),
            identifier("none"),
            identifier("none"),
            identifier("auto"),
            tracks,
            flow,
        ]
    } else {
        let [rows, columns, areas] = grid_template_parts(value);
        [
            rows,
            columns,
            areas,
            identifier("auto"),
            identifier("auto"),
            identifier("row"),
        ]
    };
    pairs(
        [
            "grid-template-rows",
            "grid-template-columns",
            "grid-template-areas",
            "grid-auto-rows",
            "grid-auto-columns",
            "grid-auto-flow",
        ],
        values,
    )
}

fn expand_grid_line(shorthand: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let parts = split_by_operator(value, "/");
    vec![
        LonghandPair::new(
            format!("{shorthand}-start"),
            segment_or(&parts, 0, || identifier("auto")),
        ),
        LonghandPair::new(
            format!("{shorthand}-end"),
            segment_or(&parts, 1, || identifier("auto")),
        ),
    ]
}

fn expand_grid_area(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let parts = split_by_operator(value, "/");
    ["grid-row-start", "grid-column-start", "grid-row-end", "grid-column-end"]
        .iter()
        .enumerate()
        .map(|(idx, name)| LonghandPair::new(*name, segment_or(&parts, idx, || identifier("auto"))))
        .collect()
}

const WHITE_SPACE_COLLAPSE: [&str; 6] = [
    "collapse",
    "discard",
    "preserve",
    "preserve-breaks",
    "preserve-spaces",
    "break-spaces",
];

fn expand_white_space(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let nodes = to_list(value);
    let shortcut = match single_ident(&nodes).map(str::to_ascii_lowercase).as_deref() {
        Some("normal") => Some(("collapse", "wrap")),
        Some("pre") => Some(("preserve", "nowrap")),
        Some("pre-wrap") => Some(("preserve", "wrap")),
        Some("pre-line") => Some(("preserve-breaks", "wrap")),
        _ => None,
    };
    let values = match shortcut {
        Some((collapse, wrap)) => [identifier(collapse), identifier(wrap)],
        None => {
            let ([collapse, wrap], _) = unordered_by::<2>(value, |idx, span| match span {
                [node] if idx == 0 => WHITE_SPACE_COLLAPSE.iter().any(|kw| node.is_ident(kw)),
                [node] => node.is_ident("wrap") || node.is_ident("nowrap"),
                _ => false,
            });
            [or_ident(collapse, "collapse"), or_ident(wrap, "wrap")]
        }
    };
    pairs(["white-space-collapse", "text-wrap-mode"], values)
}

fn expand_text_wrap(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let ([mode, style], _) = match_unordered(["<'text-wrap-mode'>", "<'text-wrap-style'>"], value);
    pairs(
        ["text-wrap-mode", "text-wrap-style"],
        [or_ident(mode, "wrap"), or_ident(style, "auto")],
    )
}

fn position_axes(layer: &ValueNode) -> [ValueNode; 2] {
    let nodes = to_list(layer);
    let vertical = |node: &ValueNode| node.is_ident("top") || node.is_ident("bottom");
    let horizontal = |node: &ValueNode| node.is_ident("left") || node.is_ident("right");
    match nodes.as_slice() {
        [] => [percentage("0"), percentage("0")],
        [single] if vertical(single) => [identifier("center"), single.clone()],
        [single] => [single.clone(), identifier("center")],
        [first, second] if vertical(first) || horizontal(second) => {
            [second.clone(), first.clone()]
        }
        [first, second] => [first.clone(), second.clone()],
        _ => {
            let ([x, y, _], _) = match_unordered(
                [
                    "[ left | right ] <length-percentage>?",
                    "[ top | bottom ] <length-percentage>?",
                    "center",
                ],
                layer,
            );
            [or_ident(x, "center"), or_ident(y, "center")]
        }
    }
}

fn expand_background_position(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    pairs(
        ["background-position-x", "background-position-y"],
        match_repeated(value, position_axes),
    )
}

fn expand_background(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let mut color = None;
    let [image, x, y, size, repeat, attachment, origin, clip] = match_repeated(value, |layer| {
        let ([image, position, repeat, attachment, origin, clip, layer_color], _) =
            match_unordered(
                [
                    "<bg-image>",
                    "<bg-position> [ / <bg-size> ]?",
                    "<repeat-style>",
                    "<attachment>",
                    "<visual-box>",
                    "<visual-box>",
                    "<color>",
                ],
                layer,
            );
        if layer_color.is_some() {
            color = layer_color;
        }
        let (position, size) = split_position_size(position);
        let [x, y] = match position {
            Some(position) => position_axes(&position),
            None => [percentage("0"), percentage("0")],
        };
        // A single box sets both origin and clip.
        let clip = clip.or_else(|| origin.clone());
        [
            or_ident(image, "none"),
            x,
            y,
            or_ident(size, "auto"),
            or_ident(repeat, "repeat"),
            or_ident(attachment, "scroll"),
            or_ident(origin, "padding-box"),
            or_ident(clip, "border-box"),
        ]
    });
    pairs(
        [
            "background-image",
            "background-position-x",
            "background-position-y",
            "background-size",
            "background-repeat",
            "background-attachment",
            "background-origin",
            "background-clip",
            "background-color",
        ],
        [
            image,
            x,
            y,
            size,
            repeat,
            attachment,
            origin,
            clip,
            or_ident(color, "transparent"),
        ],
    )
}

fn expand_text_decoration(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let ([line, style, color, thickness], _) = match_unordered(
        [
            "<'text-decoration-line'>",
            "<'text-decoration-style'>",
            "<'text-decoration-color'>",
            "<'text-decoration-thickness'>",
        ],
        value,
    );
    pairs(
        [
            "text-decoration-line",
            "text-decoration-style",
            "text-decoration-color",
            "text-decoration-thickness",
        ],
        [
            or_ident(line, "none"),
            or_ident(style, "solid"),
            or_ident(color, "currentcolor"),
            or_ident(thickness, "auto"),
        ],
    )
}

fn expand_text_emphasis(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let ([style, color], _) =
        match_unordered(["<'text-emphasis-style'>", "<'text-emphasis-color'>"], value);
    pairs(
        ["text-emphasis-style", "text-emphasis-color"],
        [or_ident(style, "none"), or_ident(color, "currentcolor")],
    )
}

fn expand_columns(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let ([width, count], _) = match_unordered(["<'column-width'>", "<'column-count'>"], value);
    pairs(
        ["column-width", "column-count"],
        [or_ident(width, "auto"), or_ident(count, "auto")],
    )
}

fn expand_list_style(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let ([position, image, kind], _) = match_unordered(
        [
            "<'list-style-position'>",
            "<'list-style-image'>",
            "<'list-style-type'>",
        ],
        value,
    );
    // `list-style: none` clears the marker type as well as the image.
    let image_none = image.as_ref().is_some_and(|image| image.is_ident("none"));
    let kind = or_ident(kind, if image_none { "none" } else { "disc" });
    pairs(
        ["list-style-position", "list-style-image", "list-style-type"],
        [or_ident(position, "outside"), or_ident(image, "none"), kind],
    )
}

fn expand_axis_pair(shorthand: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let names = match shorthand {
        "gap" | "grid-gap" => ["row-gap", "column-gap"],
        "overscroll-behavior" => ["overscroll-behavior-x", "overscroll-behavior-y"],
        _ => ["overflow-x", "overflow-y"],
    };
    expand_logical(
        |edge| match edge {
            LogicalEdge::Start => names[0].to_string(),
            LogicalEdge::End => names[1].to_string(),
        },
        value,
    )
}

fn expand_place(shorthand: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let axis = shorthand.trim_start_matches("place-");
    let align_name = format!("align-{axis}");
    let justify_name = format!("justify-{axis}");
    let nodes = to_list(value);
    let align_grammar = format!("<'{align_name}'>");
    let split = longest_span(&nodes, 0, |span| grammar::matches(&align_grammar, span))
        .unwrap_or(nodes.len().min(1));
    let align = from_nodes(&nodes[..split]);
    let rest = &nodes[split..];
    let justify = if !rest.is_empty() {
        from_nodes(rest)
    } else if axis == "content" && to_list(&align).iter().any(|node| node.is_ident("baseline")) {
        identifier("start")
    } else {
        align.clone()
    };
    vec![
        LonghandPair::new(align_name, align),
        LonghandPair::new(justify_name, justify),
    ]
}

fn expand_container(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let parts = split_by_operator_keep_empty(value, "/");
    pairs(
        ["container-name", "container-type"],
        [
            segment_or(&parts, 0, || identifier("none")),
            segment_or(&parts, 1, || identifier("normal")),
        ],
    )
}

fn expand_contain_intrinsic_size(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let nodes = to_list(value);
    let mut groups = Vec::new();
    let mut idx = 0usize;
    while idx < nodes.len() {
        if nodes[idx].is_ident("auto") && idx + 1 < nodes.len() {
            groups.push(ValueNode::List(nodes[idx..idx + 2].to_vec()));
            idx += 2;
        } else {
            groups.push(nodes[idx].clone());
            idx += 1;
        }
    }
    let width = groups.first().cloned().unwrap_or_else(empty_value);
    let height = groups.get(1).cloned().unwrap_or_else(|| width.clone());
    pairs(
        ["contain-intrinsic-width", "contain-intrinsic-height"],
        [width, height],
    )
}

fn expand_caret(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let (found, _) = match_unordered(
        ["<'caret-color'>", "<'caret-animation'>", "<'caret-shape'>"],
        value,
    );
    pairs(
        ["caret-color", "caret-animation", "caret-shape"],
        found.map(|found| or_ident(found, "auto")),
    )
}

fn expand_position_try(_: &str, value: &ValueNode) -> Vec<LonghandPair> {
    let nodes = to_list(value);
    let (order, fallbacks) = match nodes.split_first() {
        Some((first, rest)) if grammar::matches_node("<'position-try-order'>", first) => {
            (first.clone(), rest)
        }
        _ => (identifier("normal"), nodes.as_slice()),
    };
    let fallbacks = if fallbacks.is_empty() {
        identifier("none")
    } else {
        from_nodes(fallbacks)
    };
    pairs(
        ["position-try-order", "position-try-fallbacks"],
        [order, fallbacks],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::parse_value;

    fn expand(property: &str, value: &str) -> Vec<(String, String)> {
        let value = parse_value(value).expect("parse");
        expand_shorthand(property, &value)
            .into_iter()
            .map(|pair| {
                let text = generate(&pair.value).expect("serializable");
                (pair.property, text)
            })
            .collect()
    }

    fn get<'a>(pairs: &'a [(String, String)], property: &str) -> &'a str {
        pairs
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
            .unwrap_or_else(|| panic!("missing {property} in {pairs:?}"))
    }

    #[test]
    fn border_expands_to_twelve_longhands() {
        let out = expand("border", "1px solid red");
        assert_eq!(out.len(), 12);
        for edge in ["top", "right", "bottom", "left"] {
            assert_eq!(get(&out, &format!("border-{edge}-width")), "1px");
            assert_eq!(get(&out, &format!("border-{edge}-style")), "solid");
            assert_eq!(get(&out, &format!("border-{edge}-color")), "red");
        }
    }

    #[test]
    fn border_edge_fills_literal_defaults() {
        let out = expand("border-top", "red");
        assert_eq!(
            out,
            vec![
                ("border-top-width".to_string(), "medium".to_string()),
                ("border-top-style".to_string(), "none".to_string()),
                ("border-top-color".to_string(), "red".to_string()),
            ]
        );
    }

    #[test]
    fn border_inline_reaches_logical_longhands() {
        let out = expand("border-inline", "2px dashed");
        assert_eq!(out.len(), 6);
        assert_eq!(get(&out, "border-inline-start-width"), "2px");
        assert_eq!(get(&out, "border-inline-end-style"), "dashed");
        assert_eq!(get(&out, "border-inline-end-color"), "currentcolor");
    }

    #[test]
    fn flex_keywords_and_numbers() {
        let out = expand("flex", "auto");
        assert_eq!(get(&out, "flex-grow"), "1");
        assert_eq!(get(&out, "flex-shrink"), "1");
        assert_eq!(get(&out, "flex-basis"), "auto");

        let out = expand("flex", "2 3");
        assert_eq!(get(&out, "flex-grow"), "2");
        assert_eq!(get(&out, "flex-shrink"), "3");
        assert_eq!(get(&out, "flex-basis"), "0");

        let out = expand("flex", "none");
        assert_eq!(get(&out, "flex-grow"), "0");
        assert_eq!(get(&out, "flex-basis"), "auto");
    }

    #[test]
    fn margin_three_values() {
        let out = expand("margin", "1px 2px 3px");
        assert_eq!(get(&out, "margin-top"), "1px");
        assert_eq!(get(&out, "margin-right"), "2px");
        assert_eq!(get(&out, "margin-bottom"), "3px");
        assert_eq!(get(&out, "margin-left"), "2px");
    }

    #[test]
    fn inset_uses_bare_edge_names() {
        let out = expand("inset", "0 auto");
        assert_eq!(get(&out, "top"), "0");
        assert_eq!(get(&out, "left"), "auto");
    }

    #[test]
    fn grid_area_missing_parts_are_auto() {
        let out = expand("grid-area", "a / b");
        assert_eq!(get(&out, "grid-row-start"), "a");
        assert_eq!(get(&out, "grid-column-start"), "b");
        assert_eq!(get(&out, "grid-row-end"), "auto");
        assert_eq!(get(&out, "grid-column-end"), "auto");

        let out = expand("grid-row", "1 / span 2");
        assert_eq!(get(&out, "grid-row-start"), "1");
        assert_eq!(get(&out, "grid-row-end"), "span 2");
    }

    #[test]
    fn empty_transition_unsets_everything() {
        let out = expand("transition", "\"\"");
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|(_, value)| value == "unset"));
        assert_eq!(get(&out, "transition-behavior"), "unset");
    }

    #[test]
    fn background_single_layer_defaults() {
        let out = expand("background", "url(\"test.jpg\") repeat-y");
        assert_eq!(get(&out, "background-image"), "url(test.jpg)");
        assert_eq!(get(&out, "background-repeat"), "repeat-y");
        assert_eq!(get(&out, "background-position-x"), "0%");
        assert_eq!(get(&out, "background-position-y"), "0%");
        assert_eq!(get(&out, "background-size"), "auto");
        assert_eq!(get(&out, "background-attachment"), "scroll");
        assert_eq!(get(&out, "background-origin"), "padding-box");
        assert_eq!(get(&out, "background-clip"), "border-box");
        assert_eq!(get(&out, "background-color"), "transparent");
    }

    #[test]
    fn background_layers_and_final_color() {
        let out = expand("background", "url(a.png) center / cover no-repeat, red");
        assert_eq!(get(&out, "background-image"), "url(a.png), none");
        assert_eq!(get(&out, "background-position-x"), "center, 0%");
        assert_eq!(get(&out, "background-size"), "cover, auto");
        assert_eq!(get(&out, "background-repeat"), "no-repeat, repeat");
        assert_eq!(get(&out, "background-color"), "red");
    }

    #[test]
    fn background_position_axis_swaps() {
        let out = expand("background-position", "top");
        assert_eq!(get(&out, "background-position-x"), "center");
        assert_eq!(get(&out, "background-position-y"), "top");

        let out = expand("background-position", "bottom left");
        assert_eq!(get(&out, "background-position-x"), "left");
        assert_eq!(get(&out, "background-position-y"), "bottom");

        let out = expand("background-position", "right 10px top, 5px 6px");
        assert_eq!(get(&out, "background-position-x"), "right 10px, 5px");
        assert_eq!(get(&out, "background-position-y"), "top, 6px");
    }

    #[test]
    fn css_wide_keywords_reach_every_longhand() {
        for shorthand in supported_shorthands() {
            let names = longhands_of(shorthand).expect("shorthand");
            assert!(!names.is_empty(), "{shorthand}");
            for keyword in ["inherit", "initial", "unset", "revert-layer"] {
                let out = expand(shorthand, keyword);
                let produced: Vec<String> = out.iter().map(|(name, _)| name.clone()).collect();
                assert_eq!(produced, names, "{shorthand}: {keyword}");
                assert!(out.iter().all(|(_, value)| value == keyword), "{shorthand}");
            }
        }
    }

    #[test]
    fn empty_values_unset_every_shorthand() {
        for shorthand in supported_shorthands() {
            let out = expand(shorthand, "");
            assert_eq!(out.len(), longhands_of(shorthand).map(|n| n.len()).unwrap_or(0));
            assert!(out.iter().all(|(_, value)| value == "unset"), "{shorthand}");
        }
    }

    #[test]
    fn expansion_never_emits_shorthand_names() {
        for shorthand in supported_shorthands() {
            for name in longhands_of(shorthand).expect("shorthand") {
                assert!(!is_shorthand(&name), "{shorthand} -> {name}");
            }
        }
    }

    #[test]
    fn longhands_pass_through_unchanged() {
        assert_eq!(expand("color", "red"), vec![("color".to_string(), "red".to_string())]);
        assert_eq!(
            expand("border-top-width", "inherit"),
            vec![("border-top-width".to_string(), "inherit".to_string())]
        );
        assert!(longhands_of("color").is_none());
        assert!(is_shorthand("Border"));
    }

    #[test]
    fn border_radius_combines_both_radii() {
        let out = expand("border-radius", "10px 20px / 5px");
        assert_eq!(get(&out, "border-top-left-radius"), "10px 5px");
        assert_eq!(get(&out, "border-top-right-radius"), "20px 5px");
        assert_eq!(get(&out, "border-bottom-right-radius"), "10px 5px");
        assert_eq!(get(&out, "border-bottom-left-radius"), "20px 5px");

        let out = expand("border-radius", "4px");
        assert_eq!(get(&out, "border-bottom-left-radius"), "4px");
    }

    #[test]
    fn border_image_slice_width_outset() {
        let out = expand("border-image", "url(a.png) 30 / 1px / 2px round");
        assert_eq!(get(&out, "border-image-source"), "url(a.png)");
        assert_eq!(get(&out, "border-image-slice"), "30");
        assert_eq!(get(&out, "border-image-width"), "1px");
        assert_eq!(get(&out, "border-image-outset"), "2px");
        assert_eq!(get(&out, "border-image-repeat"), "round");

        let out = expand("border-image", "url(a.png) 30 / / 2px");
        assert_eq!(get(&out, "border-image-width"), "initial");
        assert_eq!(get(&out, "border-image-outset"), "2px");
        assert_eq!(get(&out, "border-image-repeat"), "initial");
    }

    #[test]
    fn mask_border_includes_mode() {
        let out = expand("mask-border", "url(m.png) 25 alpha");
        assert_eq!(get(&out, "mask-border-slice"), "25");
        assert_eq!(get(&out, "mask-border-mode"), "alpha");
        assert_eq!(get(&out, "mask-border-repeat"), "initial");
    }

    #[test]
    fn font_size_line_height_and_family() {
        let out = expand("font", "italic bold 12px/1.5 \"Helvetica Neue\", serif");
        assert_eq!(get(&out, "font-style"), "italic");
        assert_eq!(get(&out, "font-variant-caps"), "initial");
        assert_eq!(get(&out, "font-weight"), "bold");
        assert_eq!(get(&out, "font-stretch"), "initial");
        assert_eq!(get(&out, "font-size"), "12px");
        assert_eq!(get(&out, "line-height"), "1.5");
        assert_eq!(get(&out, "font-family"), "\"Helvetica Neue\", serif");

        let out = expand("font", "16px monospace");
        assert_eq!(get(&out, "line-height"), "normal");
        assert_eq!(get(&out, "font-family"), "monospace");

        let out = expand("font", "menu");
        assert_eq!(get(&out, "font-family"), "menu");
        assert_eq!(get(&out, "font-size"), "initial");
    }

    #[test]
    fn font_synthesis_flags() {
        let out = expand("font-synthesis", "weight small-caps");
        assert_eq!(get(&out, "font-synthesis-weight"), "auto");
        assert_eq!(get(&out, "font-synthesis-style"), "none");
        assert_eq!(get(&out, "font-synthesis-small-caps"), "auto");
        assert_eq!(get(&out, "font-synthesis-position"), "none");

        let out = expand("font-synthesis", "none");
        assert!(out.iter().all(|(_, value)| value == "none"));
    }

    #[test]
    fn font_variant_keywords_and_lists() {
        let out = expand("font-variant", "none");
        assert_eq!(get(&out, "font-variant-ligatures"), "none");
        assert_eq!(get(&out, "font-variant-caps"), "normal");

        let out = expand("font-variant", "small-caps tabular-nums");
        assert_eq!(get(&out, "font-variant-caps"), "small-caps");
        assert_eq!(get(&out, "font-variant-numeric"), "tabular-nums");
        assert_eq!(get(&out, "font-variant-emoji"), "normal");
    }

    #[test]
    fn animation_layers_and_resets() {
        let out = expand("animation", "slide 2s ease-in 1s infinite");
        assert_eq!(get(&out, "animation-name"), "slide");
        assert_eq!(get(&out, "animation-duration"), "2s");
        assert_eq!(get(&out, "animation-timing-function"), "ease-in");
        assert_eq!(get(&out, "animation-delay"), "1s");
        assert_eq!(get(&out, "animation-iteration-count"), "infinite");
        assert_eq!(get(&out, "animation-direction"), "normal");
        assert_eq!(get(&out, "animation-fill-mode"), "none");
        assert_eq!(get(&out, "animation-play-state"), "running");
        assert_eq!(get(&out, "animation-timeline"), "auto");
        assert_eq!(get(&out, "animation-range-start"), "normal");
        assert_eq!(get(&out, "animation-range-end"), "normal");

        let out = expand("animation", "a 1s, b 2s linear");
        assert_eq!(get(&out, "animation-name"), "a, b");
        assert_eq!(get(&out, "animation-timing-function"), "ease, linear");
    }

    #[test]
    fn animation_range_end_follows_named_start() {
        let out = expand("animation-range", "entry 10% exit");
        assert_eq!(get(&out, "animation-range-start"), "entry 10%");
        assert_eq!(get(&out, "animation-range-end"), "exit");

        let out = expand("animation-range", "contain");
        assert_eq!(get(&out, "animation-range-end"), "contain");

        let out = expand("animation-range", "20%");
        assert_eq!(get(&out, "animation-range-end"), "normal");
    }

    #[test]
    fn transition_fields() {
        let out = expand("transition", "opacity 0.3s");
        assert_eq!(get(&out, "transition-property"), "opacity");
        assert_eq!(get(&out, "transition-duration"), "0.3s");
        assert_eq!(get(&out, "transition-timing-function"), "ease");
        assert_eq!(get(&out, "transition-delay"), "0s");
        assert_eq!(get(&out, "transition-behavior"), "normal");

        let out = expand("transition", "all 1s allow-discrete, color 2s 500ms");
        assert_eq!(get(&out, "transition-property"), "all, color");
        assert_eq!(get(&out, "transition-delay"), "0s, 500ms");
        assert_eq!(get(&out, "transition-behavior"), "allow-discrete, normal");
    }

    #[test]
    fn mask_position_size_and_clip_fallback() {
        let out = expand("mask", "url(m.svg) center / contain no-repeat");
        assert_eq!(get(&out, "mask-image"), "url(m.svg)");
        assert_eq!(get(&out, "mask-position"), "center");
        assert_eq!(get(&out, "mask-size"), "contain");
        assert_eq!(get(&out, "mask-repeat"), "no-repeat");
        assert_eq!(get(&out, "mask-origin"), "border-box");
        assert_eq!(get(&out, "mask-clip"), "border-box");
        assert_eq!(get(&out, "mask-composite"), "add");
        assert_eq!(get(&out, "mask-mode"), "match-source");

        let out = expand("mask", "url(m.svg) padding-box");
        assert_eq!(get(&out, "mask-origin"), "padding-box");
        assert_eq!(get(&out, "mask-clip"), "padding-box");
        assert_eq!(get(&out, "mask-position"), "0% 0%");
    }

    #[test]
    fn offset_parts() {
        let out = expand("offset", "10px 30px path(\"M 0 0 L 100 100\") 50% auto / left top");
        assert_eq!(get(&out, "offset-position"), "10px 30px");
        assert_eq!(get(&out, "offset-path"), "path(\"M 0 0 L 100 100\")");
        assert_eq!(get(&out, "offset-distance"), "50%");
        assert_eq!(get(&out, "offset-rotate"), "auto");
        assert_eq!(get(&out, "offset-anchor"), "left top");
    }

    #[test]
    fn timelines() {
        let out = expand("scroll-timeline", "--a inline, --b");
        assert_eq!(get(&out, "scroll-timeline-name"), "--a, --b");
        assert_eq!(get(&out, "scroll-timeline-axis"), "inline, block");

        let out = expand("view-timeline", "--v 10px x");
        assert_eq!(get(&out, "view-timeline-axis"), "x");
        assert_eq!(get(&out, "view-timeline-inset"), "10px");
    }

    #[test]
    fn grid_template_areas_and_rows() {
        let out = expand("grid-template", "\"a a\" 40px \"b b\" / 1fr 1fr");
        assert_eq!(get(&out, "grid-template-areas"), "\"a a\" \"b b\"");
        assert_eq!(get(&out, "grid-template-rows"), "40px");
        assert_eq!(get(&out, "grid-template-columns"), "1fr 1fr");

        let out = expand("grid-template", "[top] \"a\" 10px [bottom] \"b\" / auto");
        assert_eq!(get(&out, "grid-template-areas"), "\"a\" \"b\"");
        assert_eq!(get(&out, "grid-template-rows"), "[top] 10px [bottom]");

        let out = expand("grid-template", "100px 1fr / 50px");
        assert_eq!(get(&out, "grid-template-rows"), "100px 1fr");
        assert_eq!(get(&out, "grid-template-areas"), "none");
    }

    #[test]
    fn grid_auto_flow_sides() {
        let out = expand("grid", "auto-flow dense / 40px 40px");
        assert_eq!(get(&out, "grid-auto-flow"), "row dense");
        assert_eq!(get(&out, "grid-auto-rows"), "auto");
        assert_eq!(get(&out, "grid-template-columns"), "40px 40px");
        assert_eq!(get(&out, "grid-template-rows"), "none");

        let out = expand("grid", "100px 300px / auto-flow 200px");
        assert_eq!(get(&out, "grid-auto-flow"), "column");
        assert_eq!(get(&out, "grid-auto-columns"), "200px");
        assert_eq!(get(&out, "grid-template-rows"), "100px 300px");

        let out = expand("grid", "100px / 200px");
        assert_eq!(get(&out, "grid-auto-flow"), "row");
        assert_eq!(get(&out, "grid-template-columns"), "200px");
    }

    #[test]
    fn white_space_shortcuts_and_pairs() {
        let out = expand("white-space", "pre-wrap");
        assert_eq!(get(&out, "white-space-collapse"), "preserve");
        assert_eq!(get(&out, "text-wrap-mode"), "wrap");

        let out = expand("white-space", "nowrap preserve-spaces");
        assert_eq!(get(&out, "white-space-collapse"), "preserve-spaces");
        assert_eq!(get(&out, "text-wrap-mode"), "nowrap");

        let out = expand("text-wrap", "balance");
        assert_eq!(get(&out, "text-wrap-mode"), "wrap");
        assert_eq!(get(&out, "text-wrap-style"), "balance");
    }

    #[test]
    fn small_shorthands() {
        let out = expand("text-decoration", "underline dotted red");
        assert_eq!(get(&out, "text-decoration-line"), "underline");
        assert_eq!(get(&out, "text-decoration-style"), "dotted");
        assert_eq!(get(&out, "text-decoration-thickness"), "auto");

        let out = expand("columns", "3");
        assert_eq!(get(&out, "column-width"), "auto");
        assert_eq!(get(&out, "column-count"), "3");

        let out = expand("list-style", "none");
        assert_eq!(get(&out, "list-style-type"), "none");
        assert_eq!(get(&out, "list-style-position"), "outside");

        let out = expand("list-style", "square inside");
        assert_eq!(get(&out, "list-style-type"), "square");
        assert_eq!(get(&out, "list-style-image"), "none");

        let out = expand("overflow", "hidden auto");
        assert_eq!(get(&out, "overflow-x"), "hidden");
        assert_eq!(get(&out, "overflow-y"), "auto");

        let out = expand("gap", "10px");
        assert_eq!(get(&out, "column-gap"), "10px");

        let out = expand("container", "sidebar / inline-size");
        assert_eq!(get(&out, "container-name"), "sidebar");
        assert_eq!(get(&out, "container-type"), "inline-size");

        let out = expand("contain-intrinsic-size", "auto 300px 200px");
        assert_eq!(get(&out, "contain-intrinsic-width"), "auto 300px");
        assert_eq!(get(&out, "contain-intrinsic-height"), "200px");

        let out = expand("caret", "red block");
        assert_eq!(get(&out, "caret-color"), "red");
        assert_eq!(get(&out, "caret-animation"), "auto");
        assert_eq!(get(&out, "caret-shape"), "block");

        let out = expand("position-try", "most-width --top");
        assert_eq!(get(&out, "position-try-order"), "most-width");
        assert_eq!(get(&out, "position-try-fallbacks"), "--top");

        let out = expand("text-emphasis", "filled circle");
        assert_eq!(get(&out, "text-emphasis-style"), "filled circle");
        assert_eq!(get(&out, "text-emphasis-color"), "currentcolor");

        let out = expand("outline", "auto 2px");
        assert_eq!(get(&out, "outline-style"), "auto");
        assert_eq!(get(&out, "outline-width"), "2px");
    }

    #[test]
    fn place_shorthands() {
        let out = expand("place-items", "center");
        assert_eq!(get(&out, "align-items"), "center");
        assert_eq!(get(&out, "justify-items"), "center");

        let out = expand("place-self", "start end");
        assert_eq!(get(&out, "align-self"), "start");
        assert_eq!(get(&out, "justify-self"), "end");

        let out = expand("place-content", "last baseline");
        assert_eq!(get(&out, "align-content"), "last baseline");
        assert_eq!(get(&out, "justify-content"), "start");
    }

    #[test]
    fn unserializable_pairs_are_dropped() {
        let pairs = vec![
            LonghandPair::new("margin-top", identifier("1px")),
            LonghandPair::new("margin-left", ValueNode::Operator("#".to_string())),
        ];
        let out = serialize_longhands(pairs, None);
        assert_eq!(out, vec![("margin-top".to_string(), "1px".to_string())]);
        assert!(crate::debug::longhand_drop_warned());
    }
}
