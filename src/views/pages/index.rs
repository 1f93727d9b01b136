use crate::app::router::ViewKey;
use crate::views::{Document, Node, RenderContext, View, ViewError};

/// Landing page.
pub struct IndexView;

impl View for IndexView {
    fn key(&self) -> ViewKey {
        ViewKey::Index
    }

    fn title(&self) -> &str {
        "HealthID"
    }

    fn render(&self, _ctx: &RenderContext) -> Result<Document, ViewError> {
        let mut doc = Document::new(self.key(), self.title());
        doc.push(Node::text("Digital Health for Industrial Workers"));
        doc.push(Node::section(
            "Features",
            vec![
                Node::field("Secure Access", "Biometric authentication"),
                Node::field("Health Records", "Portable & secure"),
                Node::field("Smart Alerts", "Proactive health care"),
            ],
        ));
        doc.push(Node::field("Get Started", "/login"));
        doc.push(Node::text("Secure • Compliant • Trusted"));
        Ok(doc)
    }
}

/// Catch-all for unrecognized paths.
pub struct NotFoundView;

impl View for NotFoundView {
    fn key(&self) -> ViewKey {
        ViewKey::NotFound
    }

    fn title(&self) -> &str {
        "404"
    }

    fn render(&self, _ctx: &RenderContext) -> Result<Document, ViewError> {
        let mut doc = Document::new(self.key(), self.title());
        doc.push(Node::text("Oops! Page not found"));
        doc.push(Node::field("Return to Home", "/"));
        Ok(doc)
    }
}
