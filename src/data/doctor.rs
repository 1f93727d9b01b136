//! Doctor dashboard sample data.

pub struct Appointment {
    pub patient_name: &'static str,
    pub patient_id: &'static str,
    pub time: &'static str,
    pub kind: &'static str,
    pub status: &'static str,
}

pub struct RecentConsultation {
    pub patient_name: &'static str,
    pub patient_id: &'static str,
    pub date: &'static str,
    pub kind: &'static str,
    pub status: &'static str,
}

pub struct PracticeStats {
    pub today_appointments: usize,
    pub completed_today: u32,
    pub pending_reports: u32,
    pub total_patients: u32,
}

pub fn today_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            patient_name: "João Silva",
            patient_id: "BR-12345678",
            time: "9:00 AM",
            kind: "General Checkup",
            status: "confirmed",
        },
        Appointment {
            patient_name: "Maria Oliveira",
            patient_id: "BR-12345679",
            time: "10:30 AM",
            kind: "Follow-up",
            status: "in-progress",
        },
        Appointment {
            patient_name: "Carlos Santos",
            patient_id: "BR-12345680",
            time: "2:00 PM",
            kind: "Teleconsultation",
            status: "confirmed",
        },
        Appointment {
            patient_name: "Ana Costa",
            patient_id: "BR-12345681",
            time: "3:30 PM",
            kind: "Occupational Health",
            status: "pending",
        },
    ]
}

pub fn recent_consultations() -> Vec<RecentConsultation> {
    vec![
        RecentConsultation {
            patient_name: "Pedro Lima",
            patient_id: "BR-12345682",
            date: "Dec 18, 2024",
            kind: "General Checkup",
            status: "completed",
        },
        RecentConsultation {
            patient_name: "Lucia Ferreira",
            patient_id: "BR-12345683",
            date: "Dec 17, 2024",
            kind: "Teleconsultation",
            status: "completed",
        },
    ]
}

pub fn practice_stats() -> PracticeStats {
    PracticeStats {
        today_appointments: today_appointments().len(),
        completed_today: 2,
        pending_reports: 3,
        total_patients: 147,
    }
}
