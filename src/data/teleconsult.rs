//! Teleconsultation sample data.

pub struct AvailableDoctor {
    pub name: &'static str,
    pub specialty: &'static str,
    pub rating: f64,
    pub available_today: bool,
    pub next_slot: &'static str,
}

pub struct UpcomingConsultation {
    pub doctor: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub kind: &'static str,
    pub status: &'static str,
}

pub struct PastConsultation {
    pub doctor: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub kind: &'static str,
    pub status: &'static str,
    pub notes: &'static str,
}

pub fn available_doctors() -> Vec<AvailableDoctor> {
    vec![
        AvailableDoctor {
            name: "Dr. Maria Santos",
            specialty: "Occupational Medicine",
            rating: 4.9,
            available_today: true,
            next_slot: "2:00 PM",
        },
        AvailableDoctor {
            name: "Dr. Carlos Lima",
            specialty: "General Practice",
            rating: 4.8,
            available_today: true,
            next_slot: "3:30 PM",
        },
        AvailableDoctor {
            name: "Dr. Ana Silva",
            specialty: "Internal Medicine",
            rating: 4.7,
            available_today: false,
            next_slot: "Tomorrow 9:00 AM",
        },
    ]
}

pub fn upcoming_consultations() -> Vec<UpcomingConsultation> {
    vec![UpcomingConsultation {
        doctor: "Dr. Maria Santos",
        date: "Dec 22, 2024",
        time: "2:00 PM",
        kind: "Follow-up",
        status: "confirmed",
    }]
}

pub fn past_consultations() -> Vec<PastConsultation> {
    vec![
        PastConsultation {
            doctor: "Dr. Carlos Lima",
            date: "Dec 15, 2024",
            time: "10:00 AM",
            kind: "General Checkup",
            status: "completed",
            notes: "Routine checkup completed. All vitals normal. Continue current medication.",
        },
        PastConsultation {
            doctor: "Dr. Maria Santos",
            date: "Nov 28, 2024",
            time: "3:00 PM",
            kind: "Occupational Health",
            status: "completed",
            notes: "Work-related health assessment. Recommended ergonomic improvements.",
        },
    ]
}

pub fn time_slots() -> Vec<&'static str> {
    vec!["9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM", "4:00 PM"]
}
