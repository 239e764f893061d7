//! Typed CSS builder and serializer.
//!
//! Stylesheets are assembled from ordered rules of ordered declarations and
//! turned into text by one serializer ([`Stylesheet::render`]), so identical
//! input always yields byte-identical output.
//!
//! # Output format
//!
//! - Declarations are indented two spaces per nesting level.
//! - Every block ends with `}` and a newline.
//! - Top-level blocks are separated by one blank line.

pub mod emitter;

pub use emitter::CssEmitter;

use std::fmt::Write;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    property: String,
    value: String,
    important: bool,
}

impl Declaration {
    /// Creates a declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Marks the declaration `!important`.
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }
}

/// A selector with its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    selector: String,
    declarations: Vec<Declaration>,
}

impl Rule {
    /// Creates an empty rule for `selector`.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Appends a declaration.
    pub fn declare(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Appends several declarations in order.
    pub fn declare_all(mut self, declarations: impl IntoIterator<Item = Declaration>) -> Self {
        self.declarations.extend(declarations);
        self
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = writeln!(out, "{indent}{} {{", self.selector);
        for declaration in &self.declarations {
            let _ = write!(
                out,
                "{indent}  {}: {}",
                declaration.property, declaration.value
            );
            if declaration.important {
                out.push_str(" !important");
            }
            out.push_str(";\n");
        }
        let _ = writeln!(out, "{indent}}}");
    }
}

/// A top-level stylesheet entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A plain rule
    Rule(Rule),
    /// Rules gated by a media condition, e.g. `(prefers-color-scheme: light)`
    Media {
        /// Media query text without the `@media` keyword
        condition: String,
        /// Nested rules
        rules: Vec<Rule>,
    },
}

/// An ordered list of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    blocks: Vec<Block>,
}

impl Stylesheet {
    /// Creates an empty stylesheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a top-level rule.
    pub fn rule(&mut self, rule: Rule) -> &mut Self {
        self.blocks.push(Block::Rule(rule));
        self
    }

    /// Appends a media block.
    pub fn media(&mut self, condition: impl Into<String>, rules: Vec<Rule>) -> &mut Self {
        self.blocks.push(Block::Media {
            condition: condition.into(),
            rules,
        });
        self
    }

    /// Blocks in order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Serializes the stylesheet to CSS text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (index, block) in self.blocks.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            match block {
                Block::Rule(rule) => rule.render_into(&mut out, 0),
                Block::Media { condition, rules } => {
                    let _ = writeln!(out, "@media {condition} {{");
                    for rule in rules {
                        rule.render_into(&mut out, 1);
                    }
                    out.push_str("}\n");
                }
            }
        }
        out
    }
}
