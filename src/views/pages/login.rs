use crate::app::router::ViewKey;
use crate::views::{Document, Node, RenderContext, View, ViewError};

/// Login form: role tabs, role-specific identifier field, optional PIN, and
/// the two submit actions (standard and biometric).
pub struct LoginView;

impl View for LoginView {
    fn key(&self) -> ViewKey {
        ViewKey::Login
    }

    fn title(&self) -> &str {
        "Welcome Back"
    }

    fn render(&self, _ctx: &RenderContext) -> Result<Document, ViewError> {
        let mut doc = Document::new(self.key(), self.title());
        doc.push(Node::text("Secure access to your health profile"));
        doc.push(Node::section(
            "Patient",
            vec![
                Node::field("Health ID", "Enter your Health ID"),
                Node::field("Full Name", "Enter your full name"),
                Node::field("PIN (Optional)", "Enter your PIN"),
            ],
        ));
        doc.push(Node::section(
            "Doctor",
            vec![
                Node::field("Registration ID", "Enter your Registration ID"),
                Node::field("Full Name", "Enter your full name"),
                Node::field("PIN (Optional)", "Enter your PIN"),
            ],
        ));
        doc.push(Node::section(
            "Actions",
            vec![
                Node::badge("Sign In"),
                Node::badge("Use Biometric Login"),
            ],
        ));
        doc.push(Node::text("Secured with end-to-end encryption"));
        Ok(doc)
    }
}
