use crate::app::router::ViewKey;
use crate::data::teleconsult;
use crate::views::{Document, Node, RenderContext, View, ViewError};

/// Booking view: available doctors, upcoming and past consultations, and
/// the bookable time slots.
pub struct TeleconsultationView;

impl View for TeleconsultationView {
    fn key(&self) -> ViewKey {
        ViewKey::Teleconsultation
    }

    fn title(&self) -> &str {
        "Teleconsultation"
    }

    fn render(&self, _ctx: &RenderContext) -> Result<Document, ViewError> {
        let mut doc = Document::new(self.key(), self.title());
        doc.push(Node::section(
            "Available Doctors",
            teleconsult::available_doctors()
                .into_iter()
                .flat_map(|d| {
                    [
                        Node::field(d.name, format!("{} · rating {:.1}", d.specialty, d.rating)),
                        Node::field(
                            "Next Slot",
                            if d.available_today {
                                format!("Today {}", d.next_slot)
                            } else {
                                d.next_slot.to_string()
                            },
                        ),
                    ]
                })
                .collect(),
        ));
        doc.push(Node::section(
            "Upcoming",
            teleconsult::upcoming_consultations()
                .into_iter()
                .flat_map(|c| {
                    [
                        Node::field(c.doctor, format!("{} {} — {}", c.date, c.time, c.kind)),
                        Node::badge(c.status),
                    ]
                })
                .collect(),
        ));
        doc.push(Node::section(
            "Past Consultations",
            teleconsult::past_consultations()
                .into_iter()
                .flat_map(|c| {
                    [
                        Node::field(c.doctor, format!("{} {} — {}", c.date, c.time, c.kind)),
                        Node::text(c.notes),
                    ]
                })
                .collect(),
        ));
        doc.push(Node::section(
            "Time Slots",
            teleconsult::time_slots().into_iter().map(Node::badge).collect(),
        ));
        Ok(doc)
    }
}
