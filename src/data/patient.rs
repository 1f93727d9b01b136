//! Patient dashboard sample data.

/// One card of the dashboard's health overview.
pub struct HealthMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub status: &'static str,
}

/// Dashboard shortcut to another view.
pub struct QuickAction {
    pub title: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

pub fn health_metrics() -> Vec<HealthMetric> {
    vec![
        HealthMetric {
            label: "Last Check-up",
            value: "Dec 15, 2024",
            status: "completed",
        },
        HealthMetric {
            label: "Next Vaccination",
            value: "Jan 20, 2025",
            status: "pending",
        },
        HealthMetric {
            label: "Insurance Status",
            value: "Active",
            status: "active",
        },
        HealthMetric {
            label: "Safety Score",
            value: "92/100",
            status: "good",
        },
    ]
}

pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            title: "Health Records",
            path: "/health-records",
            description: "View medical history",
        },
        QuickAction {
            title: "Teleconsultation",
            path: "/teleconsultation",
            description: "Book virtual appointments",
        },
        QuickAction {
            title: "Insurance & Rewards",
            path: "/insurance",
            description: "Manage benefits",
        },
        QuickAction {
            title: "Settings",
            path: "/settings",
            description: "Privacy & preferences",
        },
    ]
}

/// Fallback profile shown when the dashboard is opened without a session.
pub const FALLBACK_NAME: &str = "Carlos Henrique da Silva";
pub const FALLBACK_HEALTH_ID: &str = "BR-12345678";
