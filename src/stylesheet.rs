use crate::ExpandOptions;
use crate::debug::{DebugLogger, json_string};
use crate::error::ExpandError;
use crate::property::{normalize_property_name, unprefix_property};
use crate::shorthand::{expand_shorthand, serialize_longhands};
use crate::value::{parse_value, strip_important};
use cssparser::{Delimiter, ParseError, Parser, ParserInput, Token};
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDeclaration {
    pub selector: String,
    pub state: Option<String>,
    pub property: String,
    pub value: String,
}

const LEGACY_PSEUDO_ELEMENTS: [&str; 4] = ["before", "after", "first-line", "first-letter"];

// Block at-rules whose style rules are grouped like top-level ones.
const GROUPING_AT_RULES: [&str; 4] = ["media", "supports", "layer", "container"];

struct RawDeclaration {
    name: String,
    value: String,
    important: bool,
}

pub(crate) fn expand_declaration(
    property: &str,
    value: &str,
    options: &ExpandOptions,
    debug: Option<&DebugLogger>,
) -> Result<Vec<(String, String)>, ExpandError> {
    let property = if options.unprefix_properties {
        unprefix_property(property)
    } else if property.starts_with("--") {
        property.to_string()
    } else {
        property.trim().to_ascii_lowercase()
    };
    let parsed = parse_value(value)?;
    let (parsed, _) = strip_important(&parsed);
    let mut longhands = serialize_longhands(expand_shorthand(&property, &parsed), debug);
    if options.camel_case_properties {
        for (name, _) in &mut longhands {
            *name = normalize_property_name(name);
        }
    }
    Ok(longhands)
}

// A stylesheet lightningcss rejects yields nothing. Rules are walked over the
// source text so values reach the expander as written.
pub(crate) fn group_declarations(
    css: &str,
    options: &ExpandOptions,
    debug: Option<&DebugLogger>,
) -> Vec<ParsedDeclaration> {
    if let Err(err) = StyleSheet::parse(css, ParserOptions::default()) {
        if let Some(logger) = debug {
            let json = format!(
                "{{\"type\":\"css.stylesheet.failed\",\"reason\":{}}}",
                json_string(&err.to_string())
            );
            logger.log_json(&json);
            logger.increment("css.stylesheet_failed", 1);
        }
        return Vec::new();
    }
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut grouper = Grouper {
        options,
        debug,
        out: Vec::new(),
        index: HashMap::new(),
    };
    grouper.rule_list(&mut parser);
    grouper.out
}

struct Grouper<'a> {
    options: &'a ExpandOptions,
    debug: Option<&'a DebugLogger>,
    out: Vec<ParsedDeclaration>,
    index: HashMap<(String, Option<String>, String), usize>,
}

impl Grouper<'_> {
    fn rule_list<'i>(&mut self, parser: &mut Parser<'i, '_>) {
        loop {
            let start = parser.state();
            let token = match parser.next() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };
            match token {
                Token::AtKeyword(name) => self.at_rule(&name, parser),
                Token::CDO | Token::CDC | Token::Semicolon => {}
                _ => {
                    parser.reset(&start);
                    self.qualified_rule(parser);
                }
            }
        }
    }

    // Conditions are not evaluated; every branch contributes.
    fn at_rule<'i>(&mut self, name: &str, parser: &mut Parser<'i, '_>) {
        let _ = parser.parse_until_before(
            Delimiter::CurlyBracketBlock | Delimiter::Semicolon,
            consume_all,
        );
        let has_block = matches!(parser.next(), Ok(&Token::CurlyBracketBlock));
        if has_block
            && GROUPING_AT_RULES
                .iter()
                .any(|rule| name.eq_ignore_ascii_case(rule))
        {
            let _ = parser.parse_nested_block(|nested| {
                self.rule_list(nested);
                Ok::<_, ParseError<'i, ()>>(())
            });
        }
    }

    fn qualified_rule<'i>(&mut self, parser: &mut Parser<'i, '_>) {
        let start = parser.position();
        let _ = parser.parse_until_before(Delimiter::CurlyBracketBlock, consume_all);
        let prelude = parser.slice_from(start).trim().to_string();
        if parser.expect_curly_bracket_block().is_err() {
            return;
        }
        let declarations = parser
            .parse_nested_block(|nested| Ok::<_, ParseError<'i, ()>>(declaration_list(nested)))
            .unwrap_or_default();
        self.style_rule(&prelude, &declarations);
    }

    fn style_rule(&mut self, prelude: &str, declarations: &[RawDeclaration]) {
        let mut targets = Vec::new();
        for (selector, parsed) in selector_list(prelude, self.options.type_selectors) {
            if let Some(logger) = self.debug {
                let json = format!(
                    "{{\"type\":\"css.rule\",\"selector\":{},\"parsed\":{}}}",
                    json_string(&selector),
                    if parsed.is_some() { "true" } else { "false" }
                );
                logger.log_json(&json);
                if parsed.is_none() {
                    logger.increment("css.selector_unparsed", 1);
                }
            }
            if let Some(target) = parsed {
                targets.push(target);
            }
        }
        if targets.is_empty() {
            return;
        }

        let mut longhands = Vec::new();
        for important in [false, true] {
            if important && !self.options.important_declarations {
                break;
            }
            for declaration in declarations.iter().filter(|decl| decl.important == important) {
                self.expand_raw(declaration, &mut longhands);
            }
        }
        for (selector, state) in &targets {
            for (property, value) in &longhands {
                self.emit(selector, state.as_deref(), property, value);
            }
        }
    }

    fn expand_raw(&self, declaration: &RawDeclaration, out: &mut Vec<(String, String)>) {
        match expand_declaration(&declaration.name, &declaration.value, self.options, self.debug) {
            Ok(longhands) => {
                if let Some(logger) = self.debug {
                    logger.increment("css.declarations", 1);
                    logger.increment("css.longhands", longhands.len() as u64);
                }
                out.extend(longhands);
            }
            Err(err) => {
                if let Some(logger) = self.debug {
                    let json = format!(
                        "{{\"type\":\"css.declaration.skipped\",\"property\":{},\"reason\":{}}}",
                        json_string(&declaration.name),
                        json_string(&err.to_string())
                    );
                    logger.log_json(&json);
                    logger.increment("css.declaration_skipped", 1);
                }
            }
        }
    }

    fn emit(&mut self, selector: &str, state: Option<&str>, property: &str, value: &str) {
        let key = (
            selector.to_string(),
            state.map(str::to_string),
            property.to_string(),
        );
        if let Some(&idx) = self.index.get(&key) {
            self.out[idx].value = value.to_string();
            return;
        }
        self.index.insert(key, self.out.len());
        self.out.push(ParsedDeclaration {
            selector: selector.to_string(),
            state: state.map(str::to_string),
            property: property.to_string(),
            value: value.to_string(),
        });
    }
}

fn consume_all<'i>(parser: &mut Parser<'i, '_>) -> Result<(), ParseError<'i, ()>> {
    while parser.next_including_whitespace_and_comments().is_ok() {}
    Ok(())
}

fn declaration_list<'i>(parser: &mut Parser<'i, '_>) -> Vec<RawDeclaration> {
    let mut out = Vec::new();
    while !parser.is_exhausted() {
        let parsed = parser.parse_until_after(Delimiter::Semicolon, raw_declaration);
        if let Ok(Some(declaration)) = parsed {
            out.push(declaration);
        }
    }
    out
}

// Source text of one `name: value [!important]` declaration.
fn raw_declaration<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<Option<RawDeclaration>, ParseError<'i, ()>> {
    if parser.is_exhausted() {
        return Ok(None);
    }
    let name = parser.expect_ident()?.to_string();
    parser.expect_colon()?;
    let start = parser.position();
    let mut bang = None;
    let mut important = false;
    loop {
        let before = parser.position();
        let Ok(token) = parser.next() else {
            break;
        };
        match token {
            Token::Delim('!') => {
                bang = Some(before);
                important = false;
            }
            Token::Ident(ident)
                if bang.is_some() && !important && ident.eq_ignore_ascii_case("important") =>
            {
                important = true;
            }
            _ => {
                bang = None;
                important = false;
            }
        }
    }
    let value = match bang {
        Some(end) if important => parser.slice(start..end),
        _ => parser.slice_from(start),
    };
    Ok(Some(RawDeclaration {
        name,
        value: value.trim().to_string(),
        important,
    }))
}

fn selector_list(
    prelude: &str,
    type_selectors: bool,
) -> Vec<(String, Option<(String, Option<String>)>)> {
    let mut input = ParserInput::new(prelude);
    let mut parser = Parser::new(&mut input);
    let mut out = Vec::new();
    while !parser.is_exhausted() {
        let start = parser.position();
        let parsed = parser
            .parse_until_before(Delimiter::Comma, |nested| {
                simple_selector(nested, type_selectors)
            })
            .ok()
            .flatten();
        let text = parser.slice_from(start).trim().to_string();
        let _ = parser.next();
        if !text.is_empty() {
            out.push((text, parsed));
        }
    }
    out
}

// One class or type selector followed by an optional pseudo chain. Escapes
// are resolved by the tokenizer, so `.md\:flex` names the class `md:flex`.
fn simple_selector<'i>(
    parser: &mut Parser<'i, '_>,
    type_selectors: bool,
) -> Result<Option<(String, Option<String>)>, ParseError<'i, ()>> {
    parser.skip_whitespace();
    let mut base = None;
    let mut state = String::new();
    loop {
        let token = match parser.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        match token {
            Token::Delim('.') if base.is_none() && state.is_empty() => {
                match parser.next_including_whitespace()?.clone() {
                    Token::Ident(class) => base = Some(class.to_string()),
                    _ => return Ok(None),
                }
            }
            Token::Ident(name) if base.is_none() && state.is_empty() => {
                if !type_selectors {
                    return Ok(None);
                }
                base = Some(name.to_ascii_lowercase());
            }
            Token::Colon => match pseudo(parser)? {
                Some(text) => state.push_str(&text),
                None => return Ok(None),
            },
            // Trailing whitespace is fine; anything after it is a combinator.
            Token::WhiteSpace(_) if parser.is_exhausted() => break,
            _ => return Ok(None),
        }
    }
    Ok(base.map(|base| (base, (!state.is_empty()).then_some(state))))
}

// Reads the pseudo-class or pseudo-element after a `:`. Legacy single-colon
// pseudo-elements come out as `::before`.
fn pseudo<'i>(parser: &mut Parser<'i, '_>) -> Result<Option<String>, ParseError<'i, ()>> {
    let mut next = parser.next_including_whitespace()?.clone();
    let mut element = false;
    if next == Token::Colon {
        element = true;
        next = parser.next_including_whitespace()?.clone();
    }
    let (name, is_function) = match next {
        Token::Ident(name) => (name.to_ascii_lowercase(), false),
        Token::Function(name) => (name.to_ascii_lowercase(), true),
        _ => return Ok(None),
    };
    if LEGACY_PSEUDO_ELEMENTS.contains(&name.as_str()) {
        element = true;
    }
    let mut text = String::from(if element { "::" } else { ":" });
    text.push_str(&name);
    if is_function {
        let args = parser.parse_nested_block(|nested| {
            let start = nested.position();
            consume_all(nested)?;
            Ok::<_, ParseError<'i, ()>>(nested.slice_from(start).trim().to_string())
        })?;
        text.push('(');
        text.push_str(&args);
        text.push(')');
    }
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(css: &str) -> Vec<ParsedDeclaration> {
        group_declarations(css, &ExpandOptions::default(), None)
    }

    fn keys(out: &[ParsedDeclaration]) -> Vec<(String, Option<String>, String, String)> {
        out.iter()
            .map(|decl| {
                (
                    decl.selector.clone(),
                    decl.state.clone(),
                    decl.property.clone(),
                    decl.value.clone(),
                )
            })
            .collect()
    }

    fn decl(selector: &str, state: Option<&str>, property: &str, value: &str) -> (String, Option<String>, String, String) {
        (
            selector.to_string(),
            state.map(str::to_string),
            property.to_string(),
            value.to_string(),
        )
    }

    fn targets(prelude: &str) -> Vec<Option<(String, Option<String>)>> {
        selector_list(prelude, true)
            .into_iter()
            .map(|(_, parsed)| parsed)
            .collect()
    }

    fn target(name: &str, state: Option<&str>) -> Option<(String, Option<String>)> {
        Some((name.to_string(), state.map(str::to_string)))
    }

    #[test]
    fn groups_selector_list_with_states() {
        let out = group(".foo, a, .bar, .foo:hover { color: #ff0000 }");
        assert_eq!(
            keys(&out),
            vec![
                decl("foo", None, "color", "#ff0000"),
                decl("a", None, "color", "#ff0000"),
                decl("bar", None, "color", "#ff0000"),
                decl("foo", Some(":hover"), "color", "#ff0000"),
            ]
        );
    }

    #[test]
    fn type_selectors_can_be_disabled() {
        let options = ExpandOptions {
            type_selectors: false,
            ..ExpandOptions::default()
        };
        let out = group_declarations(".foo, a { color: #ff0000 }", &options, None);
        assert_eq!(keys(&out), vec![decl("foo", None, "color", "#ff0000")]);
    }

    #[test]
    fn values_reach_the_expander_as_written() {
        let cases = [
            ("transition-duration", "500ms"),
            ("color", "#ff0000"),
            ("color", "rgb(255 0 0 / 50%)"),
            ("margin", "0px"),
            ("opacity", "50%"),
            ("border", "thin solid #FFF"),
            ("background-image", "linear-gradient(#0000ff, red)"),
            ("transition", "opacity 500ms ease-in"),
        ];
        for (property, value) in cases {
            let css = format!(".a {{ {property}: {value} }}");
            let sheet: Vec<(String, String)> = group(&css)
                .into_iter()
                .map(|decl| (decl.property, decl.value))
                .collect();
            let direct = expand_declaration(property, value, &ExpandOptions::default(), None)
                .expect("expand");
            assert_eq!(sheet, direct, "{property}: {value}");
        }
        let out = group(".a { transition-duration: 500ms }");
        assert_eq!(out[0].value, "500ms");
    }

    #[test]
    fn later_declarations_overwrite_earlier_ones() {
        let out = group(".foo { color: red } .bar { color: red } .foo { color: blue }");
        assert_eq!(
            keys(&out),
            vec![
                decl("foo", None, "color", "blue"),
                decl("bar", None, "color", "red"),
            ]
        );
    }

    #[test]
    fn shorthands_expand_per_selector() {
        let out = group(".card { margin: 1px 2px 3px }");
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|decl| decl.selector == "card"));
        let left = out
            .iter()
            .find(|decl| decl.property == "margin-left")
            .expect("margin-left");
        assert_eq!(left.value, "2px");
    }

    #[test]
    fn combinators_ids_and_compounds_are_skipped() {
        let out = group(".a .b { color: red } .a > .b { color: red } .a>.b { color: red } #x { color: red } .a.b { color: red } [data-x] { color: red } * { color: red }");
        assert!(out.is_empty());
    }

    #[test]
    fn escaped_class_names_are_unescaped() {
        assert_eq!(targets(".md\\:flex"), vec![target("md:flex", None)]);
        assert_eq!(
            targets(".md\\:flex:hover"),
            vec![target("md:flex", Some(":hover"))]
        );
        assert_eq!(targets(".w-1\\/2"), vec![target("w-1/2", None)]);

        let out = group(".md\\:flex:hover { color: red }");
        assert_eq!(keys(&out), vec![decl("md:flex", Some(":hover"), "color", "red")]);
    }

    #[test]
    fn legacy_pseudo_elements_are_canonical() {
        assert_eq!(targets(".btn:before"), vec![target("btn", Some("::before"))]);
        assert_eq!(targets(".btn::after"), vec![target("btn", Some("::after"))]);
        assert_eq!(
            targets(".btn:hover:first-line"),
            vec![target("btn", Some(":hover::first-line"))]
        );
        assert_eq!(
            targets(".item:not(:first-child)"),
            vec![target("item", Some(":not(:first-child)"))]
        );
        let out = group(".btn:before { color: red }");
        assert_eq!(out[0].state.as_deref(), Some("::before"));
    }

    #[test]
    fn selector_list_split_respects_nesting() {
        assert_eq!(
            targets(".a:is(.b, .c), .d"),
            vec![target("a", Some(":is(.b, .c)")), target("d", None)]
        );
        assert_eq!(targets("A"), vec![target("a", None)]);
        assert_eq!(targets(":hover"), vec![None]);
    }

    #[test]
    fn important_declarations_win_inside_a_block() {
        let out = group(".a { margin-top: 1px !important; margin-top: 2px }");
        assert_eq!(keys(&out), vec![decl("a", None, "margin-top", "1px")]);

        let options = ExpandOptions {
            important_declarations: false,
            ..ExpandOptions::default()
        };
        let out = group_declarations(
            ".a { margin-top: 1px !important; margin-top: 2px }",
            &options,
            None,
        );
        assert_eq!(keys(&out), vec![decl("a", None, "margin-top", "2px")]);
    }

    #[test]
    fn nested_at_rules_are_walked() {
        let out = group("@media print { .a { color: red } } @supports (display: grid) { .b { color: red } } @layer base { .c { color: red } } @font-face { font-family: x }");
        let selectors: Vec<&str> = out.iter().map(|decl| decl.selector.as_str()).collect();
        assert_eq!(selectors, vec!["a", "b", "c"]);
    }

    #[test]
    fn unparseable_stylesheet_yields_nothing() {
        assert!(group("..foo { color: red }").is_empty());
    }

    #[test]
    fn empty_transition_value_is_unset() {
        let out = group(".t { transition: \"\" }");
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|decl| decl.value == "unset"));
    }

    #[test]
    fn camel_case_option_renames_properties() {
        let options = ExpandOptions {
            camel_case_properties: true,
            ..ExpandOptions::default()
        };
        let out = group_declarations(".a { border-top: red }", &options, None);
        let names: Vec<&str> = out.iter().map(|decl| decl.property.as_str()).collect();
        assert_eq!(names, vec!["borderTopWidth", "borderTopStyle", "borderTopColor"]);
    }
}
