//! Per-view ephemeral edit buffers.
//!
//! Drafts are private to their view, never synchronized anywhere, and
//! discarded when navigation leaves the view.

use serde::{Deserialize, Serialize};

use crate::app::config::Language;

/// Error from a draft field update.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown field path: {0}")]
    UnknownField(String),
    #[error("Unknown toggle: {0}")]
    UnknownToggle(String),
}

/// Consultation type selector values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultationType {
    General,
    FollowUp,
    Occupational,
    Emergency,
}

impl ConsultationType {
    pub fn label(&self) -> &'static str {
        match self {
            ConsultationType::General => "General Checkup",
            ConsultationType::FollowUp => "Follow-up",
            ConsultationType::Occupational => "Occupational Health",
            ConsultationType::Emergency => "Emergency",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "general" => Some(ConsultationType::General),
            "follow-up" => Some(ConsultationType::FollowUp),
            "occupational" => Some(ConsultationType::Occupational),
            "emergency" => Some(ConsultationType::Emergency),
            _ => None,
        }
    }
}

/// Nested vital-signs group of the consultation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalSigns {
    pub blood_pressure: String,
    pub heart_rate: String,
    pub temperature: String,
    pub weight: String,
    pub height: String,
}

/// Coarse category derived from an attachment's media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Image,
    Document,
}

impl AttachmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            AttachmentKind::Image => "Image",
            AttachmentKind::Document => "Document",
        }
    }
}

/// One attached file: a name and its declared media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub media_type: String,
}

impl Attachment {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
        }
    }

    /// Anything with an `image/` media-type prefix displays as an image,
    /// everything else as a document.
    pub fn kind(&self) -> AttachmentKind {
        if self.media_type.starts_with("image") {
            AttachmentKind::Image
        } else {
            AttachmentKind::Document
        }
    }
}

/// Edit buffer for the doctor consultation form.
///
/// Field updates go through [`ConsultationDraft::set_field`] with a dotted
/// path; updating one nested field leaves its siblings and all other
/// top-level fields untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationDraft {
    pub patient_name: String,
    pub health_id: String,
    pub age: String,
    pub consultation_type: ConsultationType,
    pub chief_complaint: String,
    pub vital_signs: VitalSigns,
    pub physical_examination: String,
    pub diagnosis: String,
    pub medications: String,
    pub recommendations: String,
    pub follow_up: String,
    pub notes: String,
    /// Ordered, append-only sequence of attached files.
    pub attachments: Vec<Attachment>,
}

impl Default for ConsultationDraft {
    fn default() -> Self {
        Self::for_patient(None)
    }
}

impl ConsultationDraft {
    /// Seed a fresh draft, using the route's patient id when present.
    pub fn for_patient(patient_id: Option<&str>) -> Self {
        Self {
            patient_name: "João Silva".to_string(),
            health_id: patient_id.unwrap_or("BR-12345678").to_string(),
            age: "35".to_string(),
            consultation_type: ConsultationType::General,
            chief_complaint: String::new(),
            vital_signs: VitalSigns::default(),
            physical_examination: String::new(),
            diagnosis: String::new(),
            medications: String::new(),
            recommendations: String::new(),
            follow_up: String::new(),
            notes: String::new(),
            attachments: Vec::new(),
        }
    }

    /// Update one field by dotted path, e.g. `vital_signs.blood_pressure`.
    pub fn set_field(&mut self, path: &str, value: &str) -> Result<(), FormError> {
        match path {
            "patient_name" => self.patient_name = value.to_string(),
            "health_id" => self.health_id = value.to_string(),
            "age" => self.age = value.to_string(),
            "consultation_type" => {
                self.consultation_type = ConsultationType::parse(value)
                    .ok_or_else(|| FormError::UnknownField(format!("{}={}", path, value)))?;
            }
            "chief_complaint" => self.chief_complaint = value.to_string(),
            "vital_signs.blood_pressure" => self.vital_signs.blood_pressure = value.to_string(),
            "vital_signs.heart_rate" => self.vital_signs.heart_rate = value.to_string(),
            "vital_signs.temperature" => self.vital_signs.temperature = value.to_string(),
            "vital_signs.weight" => self.vital_signs.weight = value.to_string(),
            "vital_signs.height" => self.vital_signs.height = value.to_string(),
            "physical_examination" => self.physical_examination = value.to_string(),
            "diagnosis" => self.diagnosis = value.to_string(),
            "medications" => self.medications = value.to_string(),
            "recommendations" => self.recommendations = value.to_string(),
            "follow_up" => self.follow_up = value.to_string(),
            "notes" => self.notes = value.to_string(),
            _ => return Err(FormError::UnknownField(path.to_string())),
        }
        Ok(())
    }

    /// Append attachments; existing entries and their order are preserved.
    pub fn add_attachments(&mut self, files: impl IntoIterator<Item = Attachment>) {
        self.attachments.extend(files);
    }
}

/// Notification toggles of the settings page, with the shipped defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub health_reminders: bool,
    pub appointment_alerts: bool,
    pub safety_alerts: bool,
    pub insurance_updates: bool,
    pub marketing_communications: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            health_reminders: true,
            appointment_alerts: true,
            safety_alerts: true,
            insurance_updates: false,
            marketing_communications: false,
        }
    }
}

/// Privacy toggles of the settings page, with the shipped defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyPrefs {
    pub share_health_data: bool,
    pub allow_research: bool,
    pub biometric_auth: bool,
    pub location_tracking: bool,
}

impl Default for PrivacyPrefs {
    fn default() -> Self {
        Self {
            share_health_data: true,
            allow_research: false,
            biometric_auth: true,
            location_tracking: false,
        }
    }
}

/// Edit buffer for the settings page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsDraft {
    pub language: Language,
    pub notifications: NotificationPrefs,
    pub privacy: PrivacyPrefs,
}

impl SettingsDraft {
    pub fn with_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Flip one toggle by name.
    pub fn toggle(&mut self, name: &str) -> Result<bool, FormError> {
        let slot = match name {
            "health_reminders" => &mut self.notifications.health_reminders,
            "appointment_alerts" => &mut self.notifications.appointment_alerts,
            "safety_alerts" => &mut self.notifications.safety_alerts,
            "insurance_updates" => &mut self.notifications.insurance_updates,
            "marketing_communications" => &mut self.notifications.marketing_communications,
            "share_health_data" => &mut self.privacy.share_health_data,
            "allow_research" => &mut self.privacy.allow_research,
            "biometric_auth" => &mut self.privacy.biometric_auth,
            "location_tracking" => &mut self.privacy.location_tracking,
            _ => return Err(FormError::UnknownToggle(name.to_string())),
        };
        *slot = !*slot;
        Ok(*slot)
    }
}

/// All per-view drafts, owned by the app and reset on navigation away.
#[derive(Debug, Clone, Default)]
pub struct Drafts {
    pub consultation: ConsultationDraft,
    pub settings: SettingsDraft,
}

impl Drafts {
    pub fn new(language: Language) -> Self {
        Self {
            consultation: ConsultationDraft::default(),
            settings: SettingsDraft::with_language(language),
        }
    }
}
