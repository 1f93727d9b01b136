pub mod pages;
pub mod registry;

use serde::Serialize;

use crate::app::router::{RouteParams, ViewKey};
use crate::app::session::Identity;
use crate::forms::Drafts;

/// Error from rendering a view.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("View '{0}' is not registered")]
    NotRegistered(ViewKey),
    /// A view that reads the identity was rendered without one. The route
    /// guard normally redirects before this is reachable.
    #[error("View '{0}' requires an active session")]
    SessionRequired(ViewKey),
}

/// One node of a rendered document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Text { text: String },
    Field { label: String, value: String },
    Badge { text: String },
    Section { title: String, children: Vec<Node> },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Field {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn badge(text: impl Into<String>) -> Self {
        Node::Badge { text: text.into() }
    }

    pub fn section(title: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Section {
            title: title.into(),
            children,
        }
    }

    fn write_text(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        match self {
            Node::Text { text } => {
                out.push_str(&format!("{}{}\n", pad, text));
            }
            Node::Field { label, value } => {
                out.push_str(&format!("{}{}: {}\n", pad, label, value));
            }
            Node::Badge { text } => {
                out.push_str(&format!("{}[{}]\n", pad, text));
            }
            Node::Section { title, children } => {
                out.push_str(&format!("{}── {} ──\n", pad, title));
                for child in children {
                    child.write_text(out, depth + 1);
                }
            }
        }
    }
}

/// A rendered page: the full document tree produced by one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub view: ViewKey,
    pub title: String,
    pub body: Vec<Node>,
}

impl Document {
    pub fn new(view: ViewKey, title: impl Into<String>) -> Self {
        Self {
            view,
            title: title.into(),
            body: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node) {
        self.body.push(node);
    }

    /// Plain-text projection for the terminal.
    pub fn render_text(&self) -> String {
        let mut out = format!("═══ {} ═══\n", self.title);
        for node in &self.body {
            node.write_text(&mut out, 0);
        }
        out
    }

    /// Find a section by title, for tests and the REPL inspector.
    pub fn section(&self, title: &str) -> Option<&Node> {
        self.body.iter().find(
            |n| matches!(n, Node::Section { title: t, .. } if t == title),
        )
    }
}

/// The three inputs every renderer is a pure function of: session contents,
/// route parameters, and the view's own draft state.
pub struct RenderContext<'a> {
    pub identity: Option<&'a Identity>,
    pub params: &'a RouteParams,
    pub drafts: &'a Drafts,
}

/// One renderer per page. Rendering has no side effects; the privileged
/// calls (session set, navigation) belong to the app, not the views.
pub trait View: Send + Sync {
    /// Key this view is registered under.
    fn key(&self) -> ViewKey;

    /// Page title shown in the document header.
    fn title(&self) -> &str;

    /// Produce the document tree from the render inputs.
    fn render(&self, ctx: &RenderContext) -> Result<Document, ViewError>;
}
