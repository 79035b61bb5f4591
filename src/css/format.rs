//! CSS pretty-printer for the generated rule preview.
//!
//! Accepts loosely indented stylesheet text and reprints it with two-space
//! indentation, one declaration per line and a blank line between top-level
//! rules. Blank lines inside a block are kept (collapsed to one). Malformed
//! input is reported as an error, never silently repaired.

use anyhow::{bail, Result};

/// Source dialect accepted by [`format_css`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Syntax {
    /// Plain CSS
    #[default]
    Css,
    /// SCSS: additionally allows `//` line comments
    Scss,
}

/// Parsed stylesheet node.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    /// Selector or at-rule prelude with a block body
    Rule { prelude: String, children: Vec<Node> },
    /// Declaration or block-less at-rule, without the trailing `;`
    Statement(String),
    /// Comment text including delimiters
    Comment(String),
    /// Author-inserted blank line
    Blank,
}

/// Pretty-prints `source` written in `syntax`.
///
/// # Examples
///
/// ```
/// use flexcols::css::format::{format_css, Syntax};
///
/// let pretty = format_css(".a{color:red;margin : 0}", Syntax::Css).unwrap();
/// assert_eq!(pretty, ".a {\n  color: red;\n  margin: 0;\n}\n");
/// ```
pub fn format_css(source: &str, syntax: Syntax) -> Result<String> {
    let nodes = Parser::new(source, syntax).parse()?;
    let mut out = String::new();
    print_nodes(&nodes, 0, &mut out);
    Ok(out)
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    syntax: Syntax,
    line: usize,
    /// Open blocks; the bottom entry is the stylesheet itself
    stack: Vec<(String, Vec<Node>, usize)>,
    buf: String,
    paren_depth: usize,
    newlines: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, syntax: Syntax) -> Self {
        Self {
            chars: source.chars().peekable(),
            syntax,
            line: 1,
            stack: vec![(String::new(), Vec::new(), 1)],
            buf: String::new(),
            paren_depth: 0,
            newlines: 0,
        }
    }

    fn parse(mut self) -> Result<Vec<Node>> {
        while let Some(c) = self.chars.next() {
            match c {
                '\n' => {
                    self.line += 1;
                    if self.buf.trim().is_empty() {
                        self.newlines += 1;
                    }
                    self.buf.push(c);
                }
                '"' | '\'' => {
                    self.mark_statement_start();
                    self.read_string(c)?;
                }
                '/' if self.chars.peek() == Some(&'*') => {
                    self.chars.next();
                    self.read_block_comment()?;
                }
                '/' if self.syntax == Syntax::Scss
                    && self.paren_depth == 0
                    && self.chars.peek() == Some(&'/') =>
                {
                    self.skip_line_comment();
                }
                '(' => {
                    self.mark_statement_start();
                    self.paren_depth += 1;
                    self.buf.push(c);
                }
                ')' => {
                    if self.paren_depth == 0 {
                        bail!("Unexpected ')' on line {}", self.line);
                    }
                    self.paren_depth -= 1;
                    self.buf.push(c);
                }
                ';' if self.paren_depth == 0 => {
                    self.finish_statement()?;
                }
                '{' if self.paren_depth == 0 => {
                    let prelude = collapse_whitespace(self.buf.trim());
                    if prelude.is_empty() {
                        bail!("Block without selector on line {}", self.line);
                    }
                    self.buf.clear();
                    self.newlines = 0;
                    self.stack.push((prelude, Vec::new(), self.line));
                }
                '}' if self.paren_depth == 0 => {
                    self.close_block()?;
                }
                '{' | '}' | ';' => {
                    bail!(
                        "Unexpected '{}' inside parentheses on line {}",
                        c,
                        self.line
                    );
                }
                _ => {
                    if !c.is_whitespace() {
                        self.mark_statement_start();
                    }
                    self.buf.push(c);
                }
            }
        }

        if self.paren_depth > 0 {
            bail!("Unclosed '(' at end of input");
        }
        if self.stack.len() > 1 {
            let (prelude, _, line) = &self.stack[self.stack.len() - 1];
            bail!("Unclosed block '{}' opened on line {}", prelude, line);
        }
        if !self.buf.trim().is_empty() {
            bail!(
                "Unexpected '{}' at top level, expected a block",
                collapse_whitespace(self.buf.trim())
            );
        }

        let (_, nodes, _) = self.stack.pop().unwrap_or_default();
        Ok(nodes)
    }

    fn current(&mut self) -> &mut Vec<Node> {
        let last = self.stack.len() - 1;
        &mut self.stack[last].1
    }

    /// Records a blank line separator if one preceded the statement now starting.
    fn mark_statement_start(&mut self) {
        if !self.buf.trim().is_empty() {
            return;
        }
        if self.newlines >= 2 {
            let nodes = self.current();
            if !nodes.is_empty() && nodes.last() != Some(&Node::Blank) {
                nodes.push(Node::Blank);
            }
        }
        self.newlines = 0;
    }

    fn finish_statement(&mut self) -> Result<()> {
        let text = self.buf.trim().to_string();
        self.buf.clear();
        self.newlines = 0;
        if text.is_empty() {
            return Ok(());
        }
        if self.stack.len() == 1 && !text.starts_with('@') {
            bail!(
                "Declaration '{}' outside of a block on line {}",
                collapse_whitespace(&text),
                self.line
            );
        }
        self.current().push(Node::Statement(text));
        Ok(())
    }

    fn close_block(&mut self) -> Result<()> {
        if self.stack.len() == 1 {
            bail!("Unexpected '}}' on line {}", self.line);
        }
        self.finish_statement()?;
        if let Some((prelude, mut children, _)) = self.stack.pop() {
            if children.last() == Some(&Node::Blank) {
                children.pop();
            }
            self.current().push(Node::Rule { prelude, children });
        }
        self.newlines = 0;
        Ok(())
    }

    fn read_string(&mut self, quote: char) -> Result<()> {
        let start_line = self.line;
        self.buf.push(quote);
        while let Some(c) = self.chars.next() {
            self.buf.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = self.chars.next() {
                        self.buf.push(escaped);
                    }
                }
                '\n' => bail!("Unterminated string starting on line {}", start_line),
                c if c == quote => return Ok(()),
                _ => {}
            }
        }
        bail!("Unterminated string starting on line {}", start_line)
    }

    fn read_block_comment(&mut self) -> Result<()> {
        let start_line = self.line;
        let mut text = String::from("/*");
        while let Some(c) = self.chars.next() {
            text.push(c);
            if c == '\n' {
                self.line += 1;
            }
            if c == '*' && self.chars.peek() == Some(&'/') {
                self.chars.next();
                text.push('/');
                if self.buf.trim().is_empty() {
                    self.mark_statement_start();
                    self.current().push(Node::Comment(text));
                } else {
                    // Comment inside a declaration: drop it, keep a separator
                    self.buf.push(' ');
                }
                return Ok(());
            }
        }
        bail!("Unterminated comment starting on line {}", start_line)
    }

    fn skip_line_comment(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            self.chars.next();
        }
    }
}

/// Collapses runs of whitespace outside of strings into a single space.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut quote: Option<char> = None;
    let mut pending_space = false;
    for c in text.chars() {
        if let Some(q) = quote {
            out.push(c);
            if c == q {
                quote = None;
            }
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        if c == '"' || c == '\'' {
            quote = Some(c);
        }
        out.push(c);
    }
    out
}

/// Splits on commas that are not nested inside parentheses or strings.
fn split_top_level_commas(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for c in text.chars() {
        match (quote, c) {
            (Some(q), _) => {
                if c == q {
                    quote = None;
                }
            }
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(current.trim().to_string());
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    parts.push(current.trim().to_string());
    parts
}

fn format_statement(text: &str) -> String {
    let text = collapse_whitespace(text);
    if text.starts_with('@') {
        return text;
    }
    match text.split_once(':') {
        Some((name, value)) => format!("{}: {}", name.trim(), value.trim()),
        None => text,
    }
}

fn format_prelude(prelude: &str, indent: &str) -> String {
    if prelude.starts_with('@') {
        return prelude.to_string();
    }
    split_top_level_commas(prelude).join(&format!(",\n{indent}"))
}

fn print_nodes(nodes: &[Node], depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let mut previous: Option<&Node> = None;
    for node in nodes {
        if depth == 0 {
            // Top level: exactly one blank line between entries
            if matches!(node, Node::Blank) {
                continue;
            }
            if previous.is_some() {
                out.push('\n');
            }
        }
        match node {
            Node::Rule { prelude, children } => {
                out.push_str(&indent);
                out.push_str(&format_prelude(prelude, &indent));
                out.push_str(" {\n");
                print_nodes(children, depth + 1, out);
                out.push_str(&indent);
                out.push_str("}\n");
            }
            Node::Statement(text) => {
                out.push_str(&indent);
                out.push_str(&format_statement(text));
                out.push_str(";\n");
            }
            Node::Comment(text) => {
                out.push_str(&indent);
                out.push_str(text.trim());
                out.push('\n');
            }
            Node::Blank => out.push('\n'),
        }
        previous = Some(node);
    }
}
