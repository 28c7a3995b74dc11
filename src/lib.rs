mod debug;
mod edges;
mod error;
mod grammar;
mod matcher;
mod property;
mod shorthand;
mod stylesheet;
mod value;

use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

pub use edges::{BoxEdge, LogicalEdge, expand_box, expand_logical};
pub use error::ExpandError;
pub use matcher::{match_repeated, match_unordered};
pub use property::{normalize_property_name, unprefix_property};
pub use shorthand::{
    LonghandPair, expand_shorthand, is_shorthand, longhands_of, supported_shorthands,
};
pub use stylesheet::ParsedDeclaration;
pub use value::{
    ValueNode, dimension, empty_value, generate, identifier, join_by_operator, number,
    parse_value, percentage, split_by_operator, to_list,
};

use debug::DebugLogger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ExpandOptions {
    pub(crate) type_selectors: bool,
    pub(crate) important_declarations: bool,
    pub(crate) unprefix_properties: bool,
    pub(crate) camel_case_properties: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            type_selectors: true,
            important_declarations: true,
            unprefix_properties: true,
            camel_case_properties: false,
        }
    }
}

#[derive(Clone)]
pub struct CssExpander {
    options: ExpandOptions,
    debug: Option<Arc<DebugLogger>>,
}

pub struct CssExpanderBuilder {
    options: ExpandOptions,
    debug_path: Option<PathBuf>,
}

impl CssExpanderBuilder {
    pub fn new() -> Self {
        Self {
            options: ExpandOptions::default(),
            debug_path: None,
        }
    }

    // Element selectors (`a`, `h1`) are grouped alongside classes.
    pub fn type_selectors(mut self, enabled: bool) -> Self {
        self.options.type_selectors = enabled;
        self
    }

    // `!important` declarations apply after the normal ones of the same block.
    pub fn important_declarations(mut self, enabled: bool) -> Self {
        self.options.important_declarations = enabled;
        self
    }

    pub fn unprefix_properties(mut self, enabled: bool) -> Self {
        self.options.unprefix_properties = enabled;
        self
    }

    // Emit `borderTopWidth` style names instead of hyphenated ones.
    pub fn camel_case_properties(mut self, enabled: bool) -> Self {
        self.options.camel_case_properties = enabled;
        self
    }

    // Enable JSONL debug logging to the given path.
    pub fn debug_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<CssExpander, ExpandError> {
        let debug = if let Some(path) = self.debug_path {
            if path.as_os_str().is_empty() {
                return Err(ExpandError::InvalidConfiguration(
                    "debug log path must not be empty".to_string(),
                ));
            }
            Some(Arc::new(DebugLogger::new(path)?))
        } else {
            None
        };
        Ok(CssExpander {
            options: self.options,
            debug,
        })
    }
}

impl Default for CssExpanderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CssExpander {
    pub fn new() -> Self {
        Self {
            options: ExpandOptions::default(),
            debug: None,
        }
    }

    pub fn builder() -> CssExpanderBuilder {
        CssExpanderBuilder::new()
    }

    pub fn parse_css(&self, css: &str) -> Vec<ParsedDeclaration> {
        let out = stylesheet::group_declarations(css, &self.options, self.debug.as_deref());
        self.emit_debug_summary("parse_css");
        out
    }

    pub fn parse_stylesheets(&self, sheets: &[&str]) -> Vec<Vec<ParsedDeclaration>> {
        let out = sheets
            .par_iter()
            .map(|css| stylesheet::group_declarations(css, &self.options, self.debug.as_deref()))
            .collect();
        self.emit_debug_summary("parse_stylesheets");
        out
    }

    pub fn expand_property(
        &self,
        property: &str,
        value: &str,
    ) -> Result<Vec<(String, String)>, ExpandError> {
        stylesheet::expand_declaration(property, value, &self.options, self.debug.as_deref())
    }

    fn emit_debug_summary(&self, context: &str) {
        if let Some(logger) = self.debug.as_deref() {
            logger.emit_summary(context);
            logger.flush();
        }
    }
}

impl Default for CssExpander {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_css(css: &str) -> Vec<ParsedDeclaration> {
    CssExpander::new().parse_css(css)
}

pub fn expand_property(property: &str, value: &str) -> Result<Vec<(String, String)>, ExpandError> {
    CssExpander::new().expand_property(property, value)
}

pub fn property_value_matches(property: &str, value: &str) -> bool {
    match parse_value(value) {
        Ok(node) => grammar::property_value_matches(property, &node),
        Err(_) => false,
    }
}
