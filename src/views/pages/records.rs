use crate::app::router::ViewKey;
use crate::data::records;
use crate::views::{Document, Node, RenderContext, View, ViewError};

/// Medical history and diagnostic reports.
pub struct HealthRecordsView;

impl View for HealthRecordsView {
    fn key(&self) -> ViewKey {
        ViewKey::HealthRecords
    }

    fn title(&self) -> &str {
        "Health Records"
    }

    fn render(&self, _ctx: &RenderContext) -> Result<Document, ViewError> {
        let mut doc = Document::new(self.key(), self.title());
        doc.push(Node::section(
            "Medical History",
            records::medical_history()
                .into_iter()
                .flat_map(|e| {
                    let mut nodes = vec![
                        Node::field(e.date, format!("{} — {}", e.kind, e.doctor)),
                        Node::text(e.diagnosis),
                        Node::badge(e.status),
                    ];
                    for name in e.attachments {
                        nodes.push(Node::field("Attachment", *name));
                    }
                    nodes
                })
                .collect(),
        ));
        doc.push(Node::section(
            "Diagnostic Reports",
            records::diagnostic_reports()
                .into_iter()
                .flat_map(|r| {
                    [
                        Node::field(r.name, format!("{} — {}", r.date, r.result)),
                        Node::badge(r.status),
                    ]
                })
                .collect(),
        ));
        Ok(doc)
    }
}
