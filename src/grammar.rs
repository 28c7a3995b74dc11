use crate::value::{ValueNode, to_list};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

pub(crate) const CSS_WIDE_KEYWORDS: [&str; 5] =
    ["inherit", "initial", "unset", "revert", "revert-layer"];

const MAX_DEPTH: usize = 48;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Syntax {
    Keyword(String),
    Type(String),
    Property(String),
    Literal(String),
    Function { name: String, body: Box<Syntax> },
    Sequence(Vec<Syntax>),
    AllOf(Vec<Syntax>),
    AnyOf(Vec<Syntax>),
    OneOf(Vec<Syntax>),
    Repeat {
        inner: Box<Syntax>,
        min: usize,
        max: Option<usize>,
        comma: bool,
    },
    NonEmpty(Box<Syntax>),
}

#[derive(Debug, Clone, PartialEq)]
enum SyntaxToken {
    Keyword(String),
    Type(String),
    Property(String),
    Function(String),
    Literal(String),
    Open,
    Close { required: bool },
    CloseParen,
    Bar,
    DoubleBar,
    DoubleAmp,
    Question,
    Star,
    Plus,
    Hash,
    Range(usize, Option<usize>),
}

fn tokenize(source: &str) -> Result<Vec<SyntaxToken>, String> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0usize;
    while i < chars.len() {
        let ch = chars[i];
        if ch.is_whitespace() {
            i += 1;
            continue;
        }
        match ch {
            '<' => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && chars[end] != '>' {
                    end += 1;
                }
                if end >= chars.len() {
                    return Err(format!("unterminated type in {source:?}"));
                }
                let inner: String = chars[start..end].iter().collect();
                let inner = inner.trim();
                if let Some(property) = inner.strip_prefix('\'') {
                    tokens.push(SyntaxToken::Property(property.trim_end_matches('\'').to_string()));
                } else {
                    // Ranges such as `<number [0,∞]>` are accepted and ignored.
                    let name = inner.split_whitespace().next().unwrap_or_default();
                    tokens.push(SyntaxToken::Type(name.to_string()));
                }
                i = end + 1;
            }
            '[' => {
                tokens.push(SyntaxToken::Open);
                i += 1;
            }
            ']' => {
                let required = chars.get(i + 1) == Some(&'!');
                tokens.push(SyntaxToken::Close { required });
                i += if required { 2 } else { 1 };
            }
            ')' => {
                tokens.push(SyntaxToken::CloseParen);
                i += 1;
            }
            '|' => {
                if chars.get(i + 1) == Some(&'|') {
                    tokens.push(SyntaxToken::DoubleBar);
                    i += 2;
                } else {
                    tokens.push(SyntaxToken::Bar);
                    i += 1;
                }
            }
            '&' => {
                if chars.get(i + 1) != Some(&'&') {
                    return Err(format!("stray '&' in {source:?}"));
                }
                tokens.push(SyntaxToken::DoubleAmp);
                i += 2;
            }
            '?' => {
                tokens.push(SyntaxToken::Question);
                i += 1;
            }
            '*' => {
                tokens.push(SyntaxToken::Star);
                i += 1;
            }
            '+' => {
                tokens.push(SyntaxToken::Plus);
                i += 1;
            }
            '#' => {
                tokens.push(SyntaxToken::Hash);
                i += 1;
            }
            '{' => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && chars[end] != '}' {
                    end += 1;
                }
                let inner: String = chars[start..end.min(chars.len())].iter().collect();
                let (min, max) = match inner.split_once(',') {
                    Some((min, max)) => {
                        let max = max.trim();
                        let max = if max.is_empty() {
                            None
                        } else {
                            Some(max.parse::<usize>().map_err(|e| e.to_string())?)
                        };
                        (min.trim().parse::<usize>().map_err(|e| e.to_string())?, max)
                    }
                    None => {
                        let exact = inner.trim().parse::<usize>().map_err(|e| e.to_string())?;
                        (exact, Some(exact))
                    }
                };
                tokens.push(SyntaxToken::Range(min, max));
                i = end + 1;
            }
            '/' | ',' => {
                tokens.push(SyntaxToken::Literal(ch.to_string()));
                i += 1;
            }
            _ if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' => {
                let start = i;
                while i < chars.len()
                    && (chars[i].is_ascii_alphanumeric() || chars[i] == '-' || chars[i] == '_')
                {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                if chars.get(i) == Some(&'(') {
                    tokens.push(SyntaxToken::Function(word));
                    i += 1;
                } else {
                    tokens.push(SyntaxToken::Keyword(word));
                }
            }
            _ => return Err(format!("unexpected {ch:?} in {source:?}")),
        }
    }
    Ok(tokens)
}

struct SyntaxParser {
    tokens: Vec<SyntaxToken>,
    pos: usize,
}

impl SyntaxParser {
    fn peek(&self) -> Option<&SyntaxToken> {
        self.tokens.get(self.pos)
    }

    fn parse_one_of(&mut self) -> Result<Syntax, String> {
        let mut alternatives = vec![self.parse_any_of()?];
        while self.peek() == Some(&SyntaxToken::Bar) {
            self.pos += 1;
            alternatives.push(self.parse_any_of()?);
        }
        Ok(collapse(alternatives, Syntax::OneOf))
    }

    fn parse_any_of(&mut self) -> Result<Syntax, String> {
        let mut items = vec![self.parse_all_of()?];
        while self.peek() == Some(&SyntaxToken::DoubleBar) {
            self.pos += 1;
            items.push(self.parse_all_of()?);
        }
        Ok(collapse(items, Syntax::AnyOf))
    }

    fn parse_all_of(&mut self) -> Result<Syntax, String> {
        let mut items = vec![self.parse_sequence()?];
        while self.peek() == Some(&SyntaxToken::DoubleAmp) {
            self.pos += 1;
            items.push(self.parse_sequence()?);
        }
        Ok(collapse(items, Syntax::AllOf))
    }

    fn parse_sequence(&mut self) -> Result<Syntax, String> {
        let mut items = Vec::new();
        while let Some(token) = self.peek() {
            match token {
                SyntaxToken::Keyword(_)
                | SyntaxToken::Type(_)
                | SyntaxToken::Property(_)
                | SyntaxToken::Function(_)
                | SyntaxToken::Literal(_)
                | SyntaxToken::Open => items.push(self.parse_term()?),
                _ => break,
            }
        }
        if items.is_empty() {
            return Err("empty grammar term".to_string());
        }
        Ok(collapse(items, Syntax::Sequence))
    }

    fn parse_term(&mut self) -> Result<Syntax, String> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or_else(|| "unexpected end of grammar".to_string())?;
        self.pos += 1;
        let mut term = match token {
            SyntaxToken::Keyword(word) => Syntax::Keyword(word),
            SyntaxToken::Type(name) => Syntax::Type(name),
            SyntaxToken::Property(name) => Syntax::Property(name),
            SyntaxToken::Literal(symbol) => Syntax::Literal(symbol),
            SyntaxToken::Function(name) => {
                let body = self.parse_one_of()?;
                if self.peek() != Some(&SyntaxToken::CloseParen) {
                    return Err(format!("unclosed function {name}("));
                }
                self.pos += 1;
                Syntax::Function {
                    name,
                    body: Box::new(body),
                }
            }
            SyntaxToken::Open => {
                let inner = self.parse_one_of()?;
                match self.peek() {
                    Some(SyntaxToken::Close { required }) => {
                        let required = *required;
                        self.pos += 1;
                        if required {
                            Syntax::NonEmpty(Box::new(inner))
                        } else {
                            inner
                        }
                    }
                    _ => return Err("unclosed group".to_string()),
                }
            }
            other => return Err(format!("unexpected {other:?}")),
        };
        loop {
            let (min, max, comma) = match self.peek() {
                Some(SyntaxToken::Question) => (0, Some(1), false),
                Some(SyntaxToken::Star) => (0, None, false),
                Some(SyntaxToken::Plus) => (1, None, false),
                Some(SyntaxToken::Hash) => {
                    if let Some(SyntaxToken::Range(min, max)) = self.tokens.get(self.pos + 1) {
                        let (min, max) = (*min, *max);
                        self.pos += 1;
                        (min, max, true)
                    } else {
                        (1, None, true)
                    }
                }
                Some(SyntaxToken::Range(min, max)) => (*min, *max, false),
                _ => break,
            };
            self.pos += 1;
            term = Syntax::Repeat {
                inner: Box::new(term),
                min,
                max,
                comma,
            };
        }
        Ok(term)
    }
}

fn collapse(mut items: Vec<Syntax>, wrap: fn(Vec<Syntax>) -> Syntax) -> Syntax {
    if items.len() == 1 {
        items.remove(0)
    } else {
        wrap(items)
    }
}

pub(crate) fn parse_syntax(source: &str) -> Result<Syntax, String> {
    let mut parser = SyntaxParser {
        tokens: tokenize(source)?,
        pos: 0,
    };
    let syntax = parser.parse_one_of()?;
    if parser.pos != parser.tokens.len() {
        return Err(format!("trailing tokens in {source:?}"));
    }
    Ok(syntax)
}

fn grammar_cache() -> &'static RwLock<HashMap<String, Option<Arc<Syntax>>>> {
    static CACHE: OnceLock<RwLock<HashMap<String, Option<Arc<Syntax>>>>> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

// Hits only take the read lock; a miss compiles outside any lock.
fn compiled(source: &str) -> Option<Arc<Syntax>> {
    let cache = grammar_cache();
    if let Ok(guard) = cache.read() {
        if let Some(entry) = guard.get(source) {
            return entry.clone();
        }
    }
    let syntax = parse_syntax(source).ok().map(Arc::new);
    if let Ok(mut guard) = cache.write() {
        return guard
            .entry(source.to_string())
            .or_insert(syntax)
            .clone();
    }
    syntax
}

pub(crate) fn matches(syntax: &str, nodes: &[ValueNode]) -> bool {
    let Some(syntax) = compiled(syntax) else {
        return false;
    };
    Matcher { nodes }.ends(&syntax, 0, 0).contains(&nodes.len())
}

pub(crate) fn matches_node(syntax: &str, node: &ValueNode) -> bool {
    matches(syntax, &to_list(node))
}

pub(crate) fn is_css_wide_keyword(node: &ValueNode) -> bool {
    node.as_ident()
        .map(|ident| CSS_WIDE_KEYWORDS.iter().any(|kw| ident.eq_ignore_ascii_case(kw)))
        .unwrap_or(false)
}

// Unknown properties never match; css-wide keywords match every known one.
pub(crate) fn property_value_matches(property: &str, value: &ValueNode) -> bool {
    let property = property.to_ascii_lowercase();
    let Some(source) = property_grammar(&property) else {
        return false;
    };
    let nodes = to_list(value);
    if let [single] = nodes.as_slice() {
        if is_css_wide_keyword(single) {
            return true;
        }
    }
    matches(source, &nodes)
}

struct Matcher<'a> {
    nodes: &'a [ValueNode],
}

impl Matcher<'_> {
    fn ends(&self, syntax: &Syntax, pos: usize, depth: usize) -> Vec<usize> {
        if depth > MAX_DEPTH {
            return Vec::new();
        }
        let mut out = match syntax {
            Syntax::Keyword(word) => self.single(pos, |node| node.is_ident(word)),
            Syntax::Literal(symbol) => self.single(pos, |node| node.is_operator(symbol)),
            Syntax::Type(name) => self.type_ends(name, pos, depth),
            Syntax::Property(name) => {
                if self.nodes.get(pos).map(is_substitution).unwrap_or(false) {
                    return vec![pos + 1];
                }
                match property_grammar(name).and_then(compiled) {
                    Some(inner) => self.ends(&inner, pos, depth + 1),
                    None => Vec::new(),
                }
            }
            Syntax::Function { name, body } => match self.nodes.get(pos) {
                Some(ValueNode::Function {
                    name: found,
                    children,
                }) if found.eq_ignore_ascii_case(name) => {
                    let inner = Matcher { nodes: children };
                    if inner.ends(body, 0, depth + 1).contains(&children.len()) {
                        vec![pos + 1]
                    } else {
                        Vec::new()
                    }
                }
                _ => Vec::new(),
            },
            Syntax::Sequence(items) => {
                let mut current = vec![pos];
                for item in items {
                    let mut next = Vec::new();
                    for start in &current {
                        next.extend(self.ends(item, *start, depth + 1));
                    }
                    next.sort_unstable();
                    next.dedup();
                    if next.is_empty() {
                        return next;
                    }
                    current = next;
                }
                current
            }
            Syntax::OneOf(alternatives) => alternatives
                .iter()
                .flat_map(|alternative| self.ends(alternative, pos, depth + 1))
                .collect(),
            Syntax::AnyOf(items) => {
                let mut out = Vec::new();
                self.any_order(items, pos, 0, false, depth, &mut out);
                out
            }
            Syntax::AllOf(items) => {
                let mut out = Vec::new();
                self.any_order(items, pos, 0, true, depth, &mut out);
                out
            }
            Syntax::Repeat {
                inner,
                min,
                max,
                comma,
            } => self.repeat(inner, *min, *max, *comma, pos, depth),
            Syntax::NonEmpty(inner) => self
                .ends(inner, pos, depth + 1)
                .into_iter()
                .filter(|end| *end != pos)
                .collect(),
        };
        out.sort_unstable();
        out.dedup();
        out
    }

    fn single(&self, pos: usize, test: impl Fn(&ValueNode) -> bool) -> Vec<usize> {
        match self.nodes.get(pos) {
            Some(node) if test(node) => vec![pos + 1],
            _ => Vec::new(),
        }
    }

    fn any_order(
        &self,
        items: &[Syntax],
        pos: usize,
        used: u64,
        require_all: bool,
        depth: usize,
        out: &mut Vec<usize>,
    ) {
        let all_used = used.count_ones() as usize == items.len();
        if (require_all && all_used) || (!require_all && used != 0) {
            out.push(pos);
        }
        if all_used {
            return;
        }
        for (idx, item) in items.iter().enumerate() {
            if used & (1 << idx) != 0 {
                continue;
            }
            for end in self.ends(item, pos, depth + 1) {
                if end == pos && !require_all {
                    continue;
                }
                self.any_order(items, end, used | (1 << idx), require_all, depth, out);
            }
        }
    }

    fn repeat(
        &self,
        inner: &Syntax,
        min: usize,
        max: Option<usize>,
        comma: bool,
        pos: usize,
        depth: usize,
    ) -> Vec<usize> {
        let mut results = Vec::new();
        if min == 0 {
            results.push(pos);
        }
        let limit = max.unwrap_or(usize::MAX);
        let mut frontier = vec![pos];
        let mut count = 0usize;
        while !frontier.is_empty() && count < limit && count <= self.nodes.len() {
            count += 1;
            let mut next = Vec::new();
            for start in &frontier {
                let begin = if comma && count > 1 {
                    match self.nodes.get(*start) {
                        Some(node) if node.is_operator(",") => start + 1,
                        _ => continue,
                    }
                } else {
                    *start
                };
                for end in self.ends(inner, begin, depth + 1) {
                    if end > begin {
                        next.push(end);
                    }
                }
            }
            next.sort_unstable();
            next.dedup();
            if count >= min {
                results.extend(next.iter().copied());
            }
            frontier = next;
        }
        results
    }

    fn type_ends(&self, name: &str, pos: usize, depth: usize) -> Vec<usize> {
        let Some(node) = self.nodes.get(pos) else {
            return Vec::new();
        };
        if is_substitution(node) {
            return vec![pos + 1];
        }
        if name == "any-value" {
            return (pos + 1..=self.nodes.len()).collect();
        }
        if let Some(test) = builtin_type(name) {
            return if test(node) { vec![pos + 1] } else { Vec::new() };
        }
        match type_grammar(name).and_then(compiled) {
            Some(inner) => self.ends(&inner, pos, depth + 1),
            None => Vec::new(),
        }
    }
}

fn is_substitution(node: &ValueNode) -> bool {
    matches!(node.function_name(), Some(name) if name.eq_ignore_ascii_case("var") || name.eq_ignore_ascii_case("env"))
}

fn builtin_type(name: &str) -> Option<fn(&ValueNode) -> bool> {
    let test: fn(&ValueNode) -> bool = match name {
        "length" => is_length,
        "percentage" => is_percentage,
        "length-percentage" => |node: &ValueNode| is_length(node) || is_percentage(node),
        "number" => is_number,
        "integer" => is_integer,
        "time" => is_time,
        "angle" => is_angle,
        "resolution" => is_resolution,
        "flex" => is_flex,
        "string" => ValueNode::is_string,
        "url" => is_url,
        "color" => is_color,
        "hex-color" => is_hex_color,
        "image" => is_image,
        "ident" => |node: &ValueNode| node.as_ident().is_some(),
        "custom-ident" => is_custom_ident,
        "dashed-ident" => |node: &ValueNode| node.as_ident().map(|name| name.starts_with("--")).unwrap_or(false),
        _ => return None,
    };
    Some(test)
}

const MATH_FUNCTIONS: [&str; 20] = [
    "calc", "min", "max", "clamp", "round", "mod", "rem", "abs", "sign", "sin", "cos", "tan",
    "asin", "acos", "atan", "atan2", "pow", "sqrt", "hypot", "log",
];

fn is_math(node: &ValueNode) -> bool {
    node.function_name()
        .map(|name| MATH_FUNCTIONS.iter().any(|f| name.eq_ignore_ascii_case(f)))
        .unwrap_or(false)
}

fn has_unit(node: &ValueNode, units: &[&str]) -> bool {
    match node {
        ValueNode::Dimension { unit, .. } => units.iter().any(|u| unit.eq_ignore_ascii_case(u)),
        _ => false,
    }
}

const LENGTH_UNITS: [&str; 47] = [
    "px", "em", "rem", "ex", "rex", "ch", "rch", "cap", "rcap", "ic", "ric", "lh", "rlh", "vw",
    "vh", "vi", "vb", "vmin", "vmax", "svw", "svh", "svi", "svb", "svmin", "svmax", "lvw", "lvh",
    "lvi", "lvb", "dvw", "dvh", "dvi", "dvb", "cqw", "cqh", "cqi", "cqb", "cqmin", "cqmax", "cm",
    "mm", "q", "in", "pt", "pc", "lvmin", "lvmax",
];

fn is_zero(node: &ValueNode) -> bool {
    matches!(node, ValueNode::Number(text) if text.parse::<f64>().map(|v| v == 0.0).unwrap_or(false))
}

fn is_length(node: &ValueNode) -> bool {
    has_unit(node, &LENGTH_UNITS) || is_zero(node) || is_math(node)
}

fn is_percentage(node: &ValueNode) -> bool {
    matches!(node, ValueNode::Percentage(_)) || is_math(node)
}

fn is_number(node: &ValueNode) -> bool {
    matches!(node, ValueNode::Number(_)) || is_math(node)
}

fn is_integer(node: &ValueNode) -> bool {
    match node {
        ValueNode::Number(text) => !text.contains(['.', 'e', 'E']),
        other => is_math(other),
    }
}

fn is_time(node: &ValueNode) -> bool {
    has_unit(node, &["s", "ms"]) || is_math(node)
}

fn is_angle(node: &ValueNode) -> bool {
    has_unit(node, &["deg", "rad", "grad", "turn"]) || is_zero(node) || is_math(node)
}

fn is_resolution(node: &ValueNode) -> bool {
    has_unit(node, &["dpi", "dpcm", "dppx", "x"])
}

fn is_flex(node: &ValueNode) -> bool {
    has_unit(node, &["fr"])
}

fn is_url(node: &ValueNode) -> bool {
    match node {
        ValueNode::Url(_) => true,
        ValueNode::Function { name, .. } => {
            name.eq_ignore_ascii_case("url") || name.eq_ignore_ascii_case("src")
        }
        _ => false,
    }
}

fn is_custom_ident(node: &ValueNode) -> bool {
    match node.as_ident() {
        Some(name) => {
            !is_css_wide_keyword(node) && !name.eq_ignore_ascii_case("default")
        }
        None => false,
    }
}

fn is_hex_color(node: &ValueNode) -> bool {
    match node {
        ValueNode::Hash(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|ch| ch.is_ascii_hexdigit())
        }
        _ => false,
    }
}

const COLOR_FUNCTIONS: [&str; 13] = [
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color", "color-mix",
    "light-dark", "device-cmyk",
];

const COLOR_KEYWORDS: [&str; 3] = ["currentcolor", "transparent", "accentcolor"];

const SYSTEM_COLORS: [&str; 19] = [
    "accentcolortext", "activetext", "buttonborder", "buttonface", "buttontext", "canvas",
    "canvastext", "field", "fieldtext", "graytext", "highlight", "highlighttext", "linktext",
    "mark", "marktext", "selecteditem", "selecteditemtext", "visitedtext", "windowtext",
];

const NAMED_COLORS: [&str; 148] = [
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
    "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
    "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

fn is_color(node: &ValueNode) -> bool {
    match node {
        ValueNode::Hash(_) => is_hex_color(node),
        ValueNode::Identifier(name) => {
            let lower = name.to_ascii_lowercase();
            let lower = lower.as_str();
            COLOR_KEYWORDS.contains(&lower)
                || NAMED_COLORS.contains(&lower)
                || SYSTEM_COLORS.contains(&lower)
        }
        ValueNode::Function { name, .. } => {
            COLOR_FUNCTIONS.iter().any(|f| name.eq_ignore_ascii_case(f))
        }
        _ => false,
    }
}

const IMAGE_FUNCTIONS: [&str; 14] = [
    "linear-gradient", "radial-gradient", "conic-gradient", "repeating-linear-gradient",
    "repeating-radial-gradient", "repeating-conic-gradient", "image", "image-set",
    "-webkit-image-set", "cross-fade", "element", "paint", "-webkit-gradient",
    "-webkit-linear-gradient",
];

fn is_image(node: &ValueNode) -> bool {
    if is_url(node) {
        return true;
    }
    node.function_name()
        .map(|name| IMAGE_FUNCTIONS.iter().any(|f| name.eq_ignore_ascii_case(f)))
        .unwrap_or(false)
}

fn type_grammar(name: &str) -> Option<&'static str> {
    Some(match name {
        "line-width" => "<length> | thin | medium | thick",
        "line-style" => {
            "none | hidden | dotted | dashed | solid | double | groove | ridge | inset | outset"
        }
        "outline-line-style" => {
            "none | dotted | dashed | solid | double | groove | ridge | inset | outset"
        }
        "position" => {
            "[ left | center | right | top | bottom | <length-percentage> ] \
             | [ left | center | right ] && [ top | center | bottom ] \
             | [ left | center | right | <length-percentage> ] [ top | center | bottom | <length-percentage> ] \
             | [ [ left | right ] <length-percentage> ] && [ [ top | bottom ] <length-percentage> ]"
        }
        "bg-position" => {
            "[ left | center | right | top | bottom | <length-percentage> ] \
             | [ left | center | right | <length-percentage> ] [ top | center | bottom | <length-percentage> ] \
             | [ center | [ left | right ] <length-percentage>? ] && [ center | [ top | bottom ] <length-percentage>? ]"
        }
        "bg-size" => "[ <length-percentage> | auto ]{1,2} | cover | contain",
        "bg-image" => "<image> | none",
        "bg-clip" => "<visual-box> | border-area | text",
        "repeat-style" => "repeat-x | repeat-y | [ repeat | space | round | no-repeat ]{1,2}",
        "attachment" => "scroll | fixed | local",
        "box" | "visual-box" => "border-box | padding-box | content-box",
        "shape-box" => "<visual-box> | margin-box",
        "geometry-box" => "<shape-box> | fill-box | stroke-box | view-box",
        "coord-box" => "content-box | padding-box | border-box | fill-box | stroke-box | view-box",
        "mask-reference" => "none | <image>",
        "compositing-operator" => "add | subtract | intersect | exclude",
        "masking-mode" => "alpha | luminance | match-source",
        "easing-function" => {
            "linear | linear( <linear-stop-list> ) | ease | ease-in | ease-out | ease-in-out \
             | cubic-bezier( <number> , <number> , <number> , <number> ) \
             | step-start | step-end | steps( <integer> [ , <step-position> ]? )"
        }
        "linear-stop-list" => "[ <number> && <percentage>{0,2} ]#",
        "step-position" => "jump-start | jump-end | jump-none | jump-both | start | end",
        "single-animation-iteration-count" => "infinite | <number>",
        "single-animation-direction" => "normal | reverse | alternate | alternate-reverse",
        "single-animation-fill-mode" => "none | forwards | backwards | both",
        "single-animation-play-state" => "running | paused",
        "keyframes-name" => "<custom-ident> | <string>",
        "single-transition-property" => "all | <custom-ident>",
        "transition-behavior-value" => "normal | allow-discrete",
        "timeline-range-name" => {
            "cover | contain | entry | exit | entry-crossing | exit-crossing | scroll | view"
        }
        "absolute-size" => "xx-small | x-small | small | medium | large | x-large | xx-large | xxx-large",
        "relative-size" => "larger | smaller",
        "font-weight-absolute" => "normal | bold | <number>",
        "font-stretch-css3" => {
            "normal | ultra-condensed | extra-condensed | condensed | semi-condensed \
             | semi-expanded | expanded | extra-expanded | ultra-expanded"
        }
        "generic-family" => {
            "serif | sans-serif | cursive | fantasy | monospace | system-ui | emoji | math \
             | fangsong | ui-serif | ui-sans-serif | ui-monospace | ui-rounded"
        }
        "family-name" => "<string> | <custom-ident>+",
        "common-lig-values" => "common-ligatures | no-common-ligatures",
        "discretionary-lig-values" => "discretionary-ligatures | no-discretionary-ligatures",
        "historical-lig-values" => "historical-ligatures | no-historical-ligatures",
        "contextual-alt-values" => "contextual | no-contextual",
        "numeric-figure-values" => "lining-nums | oldstyle-nums",
        "numeric-spacing-values" => "proportional-nums | tabular-nums",
        "numeric-fraction-values" => "diagonal-fractions | stacked-fractions",
        "east-asian-variant-values" => {
            "jis78 | jis83 | jis90 | jis04 | simplified | traditional"
        }
        "east-asian-width-values" => "full-width | proportional-width",
        "feature-value-name" => "<custom-ident>",
        "ligatures-list" => {
            "<common-lig-values> || <discretionary-lig-values> || <historical-lig-values> || <contextual-alt-values>"
        }
        "alternates-list" => {
            "stylistic( <feature-value-name> ) || historical-forms || styleset( <feature-value-name># ) \
             || character-variant( <feature-value-name># ) || swash( <feature-value-name> ) \
             || ornaments( <feature-value-name> ) || annotation( <feature-value-name> )"
        }
        "numeric-list" => {
            "<numeric-figure-values> || <numeric-spacing-values> || <numeric-fraction-values> || ordinal || slashed-zero"
        }
        "east-asian-list" => "<east-asian-variant-values> || <east-asian-width-values> || ruby",
        "basic-shape" => {
            "inset( <any-value> ) | circle( <any-value>? ) | ellipse( <any-value>? ) \
             | polygon( <any-value> ) | path( <any-value> ) | rect( <any-value> ) \
             | xywh( <any-value> ) | shape( <any-value> )"
        }
        "ray-function" => "ray( <any-value> )",
        "counter-style" => "<custom-ident> | symbols( <any-value> )",
        "content-position" => "center | start | end | flex-start | flex-end",
        "content-distribution" => "space-between | space-around | space-evenly | stretch",
        "overflow-position" => "unsafe | safe",
        "self-position" => "center | start | end | self-start | self-end | flex-start | flex-end",
        "baseline-position" => "[ first | last ]? baseline",
        "try-tactic" => "flip-block || flip-inline || flip-start",
        "grid-line" => {
            "auto | <custom-ident> | [ <integer> && <custom-ident>? ] | [ span && [ <integer> || <custom-ident> ] ]"
        }
        "overflow-keyword" => "visible | hidden | clip | scroll | auto",
        "overscroll-keyword" => "contain | none | auto",
        _ => return None,
    })
}

pub(crate) fn property_grammar(property: &str) -> Option<&'static str> {
    if let Some(grammar) = edge_property_grammar(property) {
        return Some(grammar);
    }
    Some(match property {
        "color" => "<color>",
        "opacity" => "<number> | <percentage>",
        "outline-width" | "column-rule-width" => "<line-width>",
        "outline-style" => "auto | <outline-line-style>",
        "outline-color" => "auto | <color>",
        "column-rule-style" => "<line-style>",
        "column-rule-color" => "<color>",
        "outline-offset" => "<length>",
        "border-image-source" | "mask-border-source" => "none | <image>",
        "border-image-slice" | "mask-border-slice" => "[ <number> | <percentage> ]{1,4} && fill?",
        "border-image-width" | "mask-border-width" => "[ <length-percentage> | <number> | auto ]{1,4}",
        "border-image-outset" | "mask-border-outset" => "[ <length> | <number> ]{1,4}",
        "border-image-repeat" | "mask-border-repeat" => "[ stretch | repeat | round | space ]{1,2}",
        "mask-border-mode" => "luminance | alpha",
        "border-top-left-radius"
        | "border-top-right-radius"
        | "border-bottom-right-radius"
        | "border-bottom-left-radius"
        | "border-start-start-radius"
        | "border-start-end-radius"
        | "border-end-start-radius"
        | "border-end-end-radius" => "<length-percentage>{1,2}",
        "font-style" => "normal | italic | oblique <angle>?",
        "font-variant-caps" => {
            "normal | small-caps | all-small-caps | petite-caps | all-petite-caps | unicase | titling-caps"
        }
        "font-weight" => "<font-weight-absolute> | bolder | lighter",
        "font-stretch" | "font-width" => "<font-stretch-css3> | <percentage>",
        "font-size" => "<absolute-size> | <relative-size> | <length-percentage> | math",
        "line-height" => "normal | <number> | <length-percentage>",
        "font-family" => "[ <family-name> | <generic-family> ]#",
        "font-variant-ligatures" => "normal | none | <ligatures-list>",
        "font-variant-alternates" => "normal | <alternates-list>",
        "font-variant-numeric" => "normal | <numeric-list>",
        "font-variant-east-asian" => "normal | <east-asian-list>",
        "font-variant-position" => "normal | sub | super",
        "font-variant-emoji" => "normal | text | emoji | unicode",
        "font-synthesis-weight"
        | "font-synthesis-style"
        | "font-synthesis-small-caps"
        | "font-synthesis-position" => "auto | none",
        "flex-grow" | "flex-shrink" => "<number>",
        "flex-basis" => "content | <'width'>",
        "flex-direction" => "row | row-reverse | column | column-reverse",
        "flex-wrap" => "nowrap | wrap | wrap-reverse",
        "width" | "height" | "min-width" | "min-height" | "inline-size" | "block-size" => {
            "auto | <length-percentage> | min-content | max-content | fit-content( <length-percentage> ) | fit-content | stretch"
        }
        "max-width" | "max-height" => {
            "none | <length-percentage> | min-content | max-content | fit-content( <length-percentage> ) | fit-content | stretch"
        }
        "animation-name" => "[ none | <keyframes-name> ]#",
        "animation-duration" => "[ auto | <time> ]#",
        "animation-timing-function" | "transition-timing-function" => "<easing-function>#",
        "animation-delay" | "transition-duration" | "transition-delay" => "<time>#",
        "animation-iteration-count" => "<single-animation-iteration-count>#",
        "animation-direction" => "<single-animation-direction>#",
        "animation-fill-mode" => "<single-animation-fill-mode>#",
        "animation-play-state" => "<single-animation-play-state>#",
        "animation-timeline" => "[ auto | none | <dashed-ident> | scroll( <any-value>? ) | view( <any-value>? ) ]#",
        "animation-range-start" | "animation-range-end" => {
            "[ normal | <length-percentage> | <timeline-range-name> <length-percentage>? ]#"
        }
        "transition-property" => "none | <single-transition-property>#",
        "transition-behavior" => "<transition-behavior-value>#",
        "mask-image" => "<mask-reference>#",
        "mask-position" => "<position>#",
        "mask-size" | "background-size" => "<bg-size>#",
        "mask-repeat" | "background-repeat" => "<repeat-style>#",
        "mask-origin" => "<geometry-box>#",
        "mask-clip" => "[ <geometry-box> | no-clip ]#",
        "mask-composite" => "<compositing-operator>#",
        "mask-mode" => "<masking-mode>#",
        "offset-position" => "normal | auto | <position>",
        "offset-path" => "none | [ <ray-function> | <url> | <basic-shape> ] || <coord-box>",
        "offset-distance" => "<length-percentage>",
        "offset-rotate" => "[ auto | reverse ] || <angle>",
        "offset-anchor" => "auto | <position>",
        "scroll-timeline-name" | "view-timeline-name" => "[ none | <dashed-ident> ]#",
        "scroll-timeline-axis" | "view-timeline-axis" => "[ block | inline | x | y ]#",
        "view-timeline-inset" => "[ [ auto | <length-percentage> ]{1,2} ]#",
        "grid-template-areas" => "none | <string>+",
        "grid-auto-flow" => "[ row | column ] || dense",
        "grid-row-start" | "grid-row-end" | "grid-column-start" | "grid-column-end" => "<grid-line>",
        "white-space-collapse" => {
            "collapse | discard | preserve | preserve-breaks | preserve-spaces | break-spaces"
        }
        "text-wrap-mode" => "wrap | nowrap",
        "text-wrap-style" => "auto | balance | stable | pretty",
        "background-color" => "<color>",
        "background-image" => "<bg-image>#",
        "background-attachment" => "<attachment>#",
        "background-origin" => "<visual-box>#",
        "background-clip" => "<bg-clip>#",
        "background-position" => "<bg-position>#",
        "background-position-x" => {
            "[ center | [ [ left | right | x-start | x-end ]? <length-percentage>? ]! ]#"
        }
        "background-position-y" => {
            "[ center | [ [ top | bottom | y-start | y-end ]? <length-percentage>? ]! ]#"
        }
        "text-decoration-line" => {
            "none | [ underline || overline || line-through || blink ] | spelling-error | grammar-error"
        }
        "text-decoration-style" => "solid | double | dotted | dashed | wavy",
        "text-decoration-color" | "text-emphasis-color" => "<color>",
        "text-decoration-thickness" => "auto | from-font | <length-percentage>",
        "text-emphasis-style" => {
            "none | [ [ filled | open ] || [ dot | circle | double-circle | triangle | sesame ] ] | <string>"
        }
        "column-width" => "auto | <length>",
        "column-count" => "auto | <integer>",
        "row-gap" | "column-gap" => "normal | <length-percentage>",
        "list-style-position" => "inside | outside",
        "list-style-image" => "<image> | none",
        "list-style-type" => "<counter-style> | <string> | none",
        "overflow-x" | "overflow-y" | "overflow-inline" | "overflow-block" => "<overflow-keyword>",
        "overscroll-behavior-x" | "overscroll-behavior-y" | "overscroll-behavior-inline"
        | "overscroll-behavior-block" => "<overscroll-keyword>",
        "container-name" => "none | <custom-ident>+",
        "container-type" => "normal | [ size | inline-size ] || scroll-state",
        "contain-intrinsic-width" | "contain-intrinsic-height" => "auto? [ none | <length> ]",
        "caret-color" => "auto | <color>",
        "caret-animation" => "auto | manual",
        "caret-shape" => "auto | bar | block | underscore",
        "position-try-order" => "normal | most-width | most-height | most-block-size | most-inline-size",
        "position-try-fallbacks" => "none | [ <dashed-ident> || <try-tactic> ]#",
        "align-content" => {
            "normal | <baseline-position> | <content-distribution> | <overflow-position>? <content-position>"
        }
        "justify-content" => {
            "normal | <content-distribution> | <overflow-position>? [ <content-position> | left | right ]"
        }
        "align-items" => {
            "normal | stretch | <baseline-position> | <overflow-position>? <self-position> | anchor-center"
        }
        "justify-items" => {
            "normal | stretch | <baseline-position> | <overflow-position>? [ <self-position> | left | right ] \
             | legacy | legacy && [ left | right | center ] | anchor-center"
        }
        "align-self" => {
            "auto | normal | stretch | <baseline-position> | <overflow-position>? <self-position> | anchor-center"
        }
        "justify-self" => {
            "auto | normal | stretch | <baseline-position> | <overflow-position>? [ <self-position> | left | right ] | anchor-center"
        }
        _ => return None,
    })
}

fn edge_property_grammar(property: &str) -> Option<&'static str> {
    const EDGES: [&str; 8] = [
        "top",
        "right",
        "bottom",
        "left",
        "inline-start",
        "inline-end",
        "block-start",
        "block-end",
    ];
    let is_edge = |rest: &str| EDGES.contains(&rest);
    if let Some(rest) = property.strip_prefix("border-") {
        if let Some(edge) = rest.strip_suffix("-width") {
            return is_edge(edge).then_some("<line-width>");
        }
        if let Some(edge) = rest.strip_suffix("-style") {
            return is_edge(edge).then_some("<line-style>");
        }
        if let Some(edge) = rest.strip_suffix("-color") {
            return is_edge(edge).then_some("<color>");
        }
        return None;
    }
    if let Some(edge) = property.strip_prefix("margin-") {
        return is_edge(edge).then_some("<length-percentage> | auto");
    }
    if let Some(edge) = property.strip_prefix("padding-") {
        return is_edge(edge).then_some("<length-percentage>");
    }
    if let Some(edge) = property.strip_prefix("scroll-margin-") {
        return is_edge(edge).then_some("<length>");
    }
    if let Some(edge) = property.strip_prefix("scroll-padding-") {
        return is_edge(edge).then_some("auto | <length-percentage>");
    }
    if let Some(edge) = property.strip_prefix("inset-") {
        return is_edge(edge).then_some("auto | <length-percentage>");
    }
    if matches!(property, "top" | "right" | "bottom" | "left") {
        return Some("auto | <length-percentage>");
    }
    None
}
