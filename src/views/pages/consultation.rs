use crate::app::router::ViewKey;
use crate::views::{Document, Node, RenderContext, View, ViewError};

/// Doctor consultation form, rendered from the live draft.
pub struct DoctorConsultationView;

impl View for DoctorConsultationView {
    fn key(&self) -> ViewKey {
        ViewKey::DoctorConsultation
    }

    fn title(&self) -> &str {
        "Consultation"
    }

    fn render(&self, ctx: &RenderContext) -> Result<Document, ViewError> {
        let draft = &ctx.drafts.consultation;

        let mut doc = Document::new(self.key(), self.title());
        doc.push(Node::section(
            "Patient Information",
            vec![
                Node::field("Patient", draft.patient_name.clone()),
                Node::field("Health ID", draft.health_id.clone()),
                Node::field("Age", draft.age.clone()),
                Node::field("Consultation Type", draft.consultation_type.label()),
            ],
        ));
        doc.push(Node::section(
            "Chief Complaint",
            vec![Node::text(draft.chief_complaint.clone())],
        ));
        doc.push(Node::section(
            "Vital Signs",
            vec![
                Node::field("Blood Pressure", draft.vital_signs.blood_pressure.clone()),
                Node::field("Heart Rate", draft.vital_signs.heart_rate.clone()),
                Node::field("Temperature", draft.vital_signs.temperature.clone()),
                Node::field("Weight", draft.vital_signs.weight.clone()),
                Node::field("Height", draft.vital_signs.height.clone()),
            ],
        ));
        doc.push(Node::section(
            "Physical Examination",
            vec![Node::text(draft.physical_examination.clone())],
        ));
        doc.push(Node::section(
            "Diagnosis",
            vec![Node::text(draft.diagnosis.clone())],
        ));
        doc.push(Node::section(
            "Treatment Plan",
            vec![
                Node::field("Medications", draft.medications.clone()),
                Node::field("Recommendations", draft.recommendations.clone()),
            ],
        ));
        doc.push(Node::section(
            "Follow-up",
            vec![Node::text(draft.follow_up.clone())],
        ));
        doc.push(Node::section(
            "Attachments",
            draft
                .attachments
                .iter()
                .flat_map(|a| [Node::field("File", a.name.clone()), Node::badge(a.kind().label())])
                .collect(),
        ));
        doc.push(Node::section(
            "Additional Notes",
            vec![Node::text(draft.notes.clone())],
        ));
        doc.push(Node::badge("Save Consultation"));
        Ok(doc)
    }
}
