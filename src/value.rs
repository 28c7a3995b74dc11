use crate::error::ExpandError;
use cssparser::{ParseError, Parser, ParserInput, Token};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ValueNode {
    Identifier(String),
    Number(String),
    Dimension { value: String, unit: String },
    Percentage(String),
    String(String),
    Hash(String),
    Url(String),
    Operator(String),
    Function { name: String, children: Vec<ValueNode> },
    Parentheses(Vec<ValueNode>),
    Brackets(Vec<ValueNode>),
    List(Vec<ValueNode>),
}

const OPERATORS: [&str; 8] = ["/", ",", "+", "-", "*", "=", "<", ">"];

impl ValueNode {
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            ValueNode::Identifier(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_ident(&self, name: &str) -> bool {
        self.as_ident()
            .map(|ident| ident.eq_ignore_ascii_case(name))
            .unwrap_or(false)
    }

    pub fn is_operator(&self, symbol: &str) -> bool {
        matches!(self, ValueNode::Operator(op) if op == symbol)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, ValueNode::String(_))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ValueNode::List(children) => children.iter().all(ValueNode::is_empty),
            _ => false,
        }
    }

    pub fn function_name(&self) -> Option<&str> {
        match self {
            ValueNode::Function { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = generate(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

pub fn identifier(name: &str) -> ValueNode {
    ValueNode::Identifier(name.to_string())
}

pub fn number(text: &str) -> ValueNode {
    ValueNode::Number(text.to_string())
}

pub fn dimension(value: &str, unit: &str) -> ValueNode {
    ValueNode::Dimension {
        value: value.to_string(),
        unit: unit.to_string(),
    }
}

pub fn percentage(value: &str) -> ValueNode {
    ValueNode::Percentage(value.to_string())
}

pub fn empty_value() -> ValueNode {
    ValueNode::List(Vec::new())
}

pub fn parse_value(text: &str) -> Result<ValueNode, ExpandError> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    match parse_components(&mut parser) {
        Ok(nodes) => Ok(ValueNode::List(nodes)),
        Err(err) => Err(ExpandError::ValueParse(format!(
            "{:?} at line {} column {} in {:?}",
            err.kind, err.location.line, err.location.column, text
        ))),
    }
}

fn parse_components<'i>(parser: &mut Parser<'i, '_>) -> Result<Vec<ValueNode>, ParseError<'i, ()>> {
    let mut nodes = Vec::new();
    loop {
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        let node = match token {
            Token::Ident(name) => ValueNode::Identifier(name.to_string()),
            Token::Number {
                value,
                int_value,
                has_sign,
            } => ValueNode::Number(format_number(value, int_value, has_sign)),
            Token::Percentage {
                unit_value,
                int_value,
                has_sign,
            } => ValueNode::Percentage(format_number(unit_value * 100.0, int_value, has_sign)),
            Token::Dimension {
                value,
                int_value,
                has_sign,
                unit,
            } => ValueNode::Dimension {
                value: format_number(value, int_value, has_sign),
                unit: unit.to_string(),
            },
            Token::QuotedString(text) => ValueNode::String(text.to_string()),
            Token::UnquotedUrl(url) => ValueNode::Url(url.to_string()),
            Token::Hash(hash) | Token::IDHash(hash) => ValueNode::Hash(hash.to_string()),
            Token::Delim(symbol) => ValueNode::Operator(symbol.to_string()),
            Token::Comma => ValueNode::Operator(",".to_string()),
            Token::Function(name) => {
                let children = parser.parse_nested_block(|nested| parse_components(nested))?;
                match children.as_slice() {
                    [ValueNode::String(url)] if name.eq_ignore_ascii_case("url") => {
                        ValueNode::Url(url.clone())
                    }
                    _ => ValueNode::Function {
                        name: name.to_string(),
                        children,
                    },
                }
            }
            Token::ParenthesisBlock => {
                ValueNode::Parentheses(parser.parse_nested_block(|nested| parse_components(nested))?)
            }
            Token::SquareBracketBlock => {
                ValueNode::Brackets(parser.parse_nested_block(|nested| parse_components(nested))?)
            }
            other => return Err(parser.new_unexpected_token_error(other)),
        };
        nodes.push(node);
    }
    Ok(nodes)
}

fn format_number(value: f32, int_value: Option<i32>, has_sign: bool) -> String {
    let mut text = match int_value {
        Some(int) => int.to_string(),
        None => trim_float(f64::from(value)),
    };
    if has_sign && value >= 0.0 && !text.starts_with('-') {
        text.insert(0, '+');
    }
    text
}

fn trim_float(value: f64) -> String {
    let rounded = (value * 1_000_000.0).round() / 1_000_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

pub(crate) fn strip_important(node: &ValueNode) -> (ValueNode, bool) {
    let mut nodes = to_list(node);
    let len = nodes.len();
    if len >= 2 && nodes[len - 2].is_operator("!") && nodes[len - 1].is_ident("important") {
        nodes.truncate(len - 2);
        return (ValueNode::List(nodes), true);
    }
    (node.clone(), false)
}

pub fn generate(node: &ValueNode) -> Result<String, ExpandError> {
    let mut out = String::new();
    write_node(node, &mut out)?;
    Ok(out)
}

fn write_node(node: &ValueNode, out: &mut String) -> Result<(), ExpandError> {
    match node {
        ValueNode::Identifier(name) => {
            if name.is_empty() {
                return Err(ExpandError::Generate("empty identifier".to_string()));
            }
            out.push_str(name);
        }
        ValueNode::Number(text) => {
            require_numeric(text)?;
            out.push_str(text);
        }
        ValueNode::Dimension { value, unit } => {
            require_numeric(value)?;
            if unit.is_empty() {
                return Err(ExpandError::Generate(format!("dimension {value} has no unit")));
            }
            out.push_str(value);
            out.push_str(unit);
        }
        ValueNode::Percentage(value) => {
            require_numeric(value)?;
            out.push_str(value);
            out.push('%');
        }
        ValueNode::String(text) => write_quoted(text, out),
        ValueNode::Hash(hash) => {
            if hash.is_empty() {
                return Err(ExpandError::Generate("empty hash".to_string()));
            }
            out.push('#');
            out.push_str(hash);
        }
        ValueNode::Url(url) => {
            out.push_str("url(");
            let needs_quotes = url.is_empty()
                || url.chars().any(|ch| {
                    ch.is_whitespace() || matches!(ch, '"' | '\'' | '(' | ')' | '\\')
                });
            if needs_quotes {
                write_quoted(url, out);
            } else {
                out.push_str(url);
            }
            out.push(')');
        }
        ValueNode::Operator(symbol) => {
            if !OPERATORS.contains(&symbol.as_str()) {
                return Err(ExpandError::Generate(format!("unsupported operator {symbol:?}")));
            }
            out.push_str(symbol);
        }
        ValueNode::Function { name, children } => {
            if name.is_empty() {
                return Err(ExpandError::Generate("function without a name".to_string()));
            }
            out.push_str(name);
            out.push('(');
            write_sequence(children, out)?;
            out.push(')');
        }
        ValueNode::Parentheses(children) => {
            out.push('(');
            write_sequence(children, out)?;
            out.push(')');
        }
        ValueNode::Brackets(children) => {
            out.push('[');
            write_sequence(children, out)?;
            out.push(']');
        }
        ValueNode::List(children) => write_sequence(children, out)?,
    }
    Ok(())
}

fn write_sequence(nodes: &[ValueNode], out: &mut String) -> Result<(), ExpandError> {
    let mut first = true;
    for node in nodes {
        if node.is_empty() {
            continue;
        }
        if !first && !node.is_operator(",") {
            out.push(' ');
        }
        write_node(node, out)?;
        first = false;
    }
    Ok(())
}

fn write_quoted(text: &str, out: &mut String) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\a "),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

fn require_numeric(text: &str) -> Result<(), ExpandError> {
    if text.parse::<f64>().is_ok() {
        Ok(())
    } else {
        Err(ExpandError::Generate(format!("{text:?} is not a number")))
    }
}

pub fn to_list(node: &ValueNode) -> Vec<ValueNode> {
    match node {
        ValueNode::List(children) => children.iter().flat_map(to_list).collect(),
        other => vec![other.clone()],
    }
}

pub fn split_by_operator(node: &ValueNode, symbol: &str) -> Vec<ValueNode> {
    split_by_operator_keep_empty(node, symbol)
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect()
}

// `a / / c` keeps its empty middle segment.
pub(crate) fn split_by_operator_keep_empty(node: &ValueNode, symbol: &str) -> Vec<ValueNode> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for child in to_list(node) {
        if child.is_operator(symbol) {
            segments.push(ValueNode::List(std::mem::take(&mut current)));
            continue;
        }
        current.push(child);
    }
    segments.push(ValueNode::List(current));
    segments
}

pub fn join_by_operator(list: Vec<ValueNode>, symbol: &str) -> ValueNode {
    let mut out = Vec::with_capacity(list.len() * 2);
    for (idx, node) in list.into_iter().enumerate() {
        if idx > 0 {
            out.push(ValueNode::Operator(symbol.to_string()));
        }
        out.push(node);
    }
    ValueNode::List(out)
}

pub(crate) fn from_nodes(nodes: &[ValueNode]) -> ValueNode {
    match nodes {
        [single] => single.clone(),
        _ => ValueNode::List(nodes.to_vec()),
    }
}
