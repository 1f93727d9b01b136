//! Health records sample data.

pub struct HistoryEntry {
    pub date: &'static str,
    pub kind: &'static str,
    pub doctor: &'static str,
    pub diagnosis: &'static str,
    pub status: &'static str,
    pub attachments: &'static [&'static str],
}

pub struct DiagnosticReport {
    pub name: &'static str,
    pub date: &'static str,
    pub result: &'static str,
    pub status: &'static str,
}

pub fn medical_history() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry {
            date: "2024-12-15",
            kind: "General Checkup",
            doctor: "Dr. Maria Santos",
            diagnosis: "Routine health assessment - All parameters normal",
            status: "completed",
            attachments: &["blood_test.pdf", "chest_xray.jpg"],
        },
        HistoryEntry {
            date: "2024-11-20",
            kind: "Occupational Health",
            doctor: "Dr. Carlos Lima",
            diagnosis: "Hearing test - Within normal limits",
            status: "completed",
            attachments: &["hearing_test.pdf"],
        },
        HistoryEntry {
            date: "2024-10-10",
            kind: "Vaccination",
            doctor: "Nurse Ana Paula",
            diagnosis: "Tetanus booster administered",
            status: "completed",
            attachments: &["vaccination_record.pdf"],
        },
    ]
}

pub fn diagnostic_reports() -> Vec<DiagnosticReport> {
    vec![
        DiagnosticReport {
            name: "Complete Blood Count",
            date: "2024-12-15",
            result: "Normal",
            status: "normal",
        },
        DiagnosticReport {
            name: "Chest X-Ray",
            date: "2024-12-15",
            result: "No abnormalities detected",
            status: "normal",
        },
        DiagnosticReport {
            name: "Audiometry Test",
            date: "2024-11-20",
            result: "Hearing within normal limits",
            status: "normal",
        },
        DiagnosticReport {
            name: "Vision Test",
            date: "2024-09-15",
            result: "Corrective lenses recommended",
            status: "attention",
        },
    ]
}
