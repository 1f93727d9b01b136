use crate::app::router::ViewKey;
use crate::data::{doctor, employer, patient, sesi};
use crate::views::{Document, Node, RenderContext, View, ViewError};

/// Patient home view: greeting, quick-access QR, health overview cards, and
/// shortcuts to the other patient-facing pages.
pub struct PatientDashboardView;

impl View for PatientDashboardView {
    fn key(&self) -> ViewKey {
        ViewKey::PatientDashboard
    }

    fn title(&self) -> &str {
        "Patient Dashboard"
    }

    fn render(&self, ctx: &RenderContext) -> Result<Document, ViewError> {
        // Renders with or without a session; absent fields fall back to the
        // sample profile.
        let display_name = ctx
            .identity
            .map(|id| id.display_name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or(patient::FALLBACK_NAME);
        let first_name = display_name.split(' ').next().unwrap_or(display_name);
        let health_id = ctx
            .identity
            .and_then(|id| id.health_id.as_deref())
            .filter(|h| !h.is_empty())
            .unwrap_or(patient::FALLBACK_HEALTH_ID);

        let mut doc = Document::new(self.key(), self.title());
        doc.push(Node::section(
            "Profile",
            vec![
                Node::field("Hello", first_name),
                Node::field("Health ID", health_id),
            ],
        ));
        doc.push(Node::section(
            "Quick Access QR",
            vec![Node::text("For offline emergencies")],
        ));
        doc.push(Node::section(
            "Health Overview",
            patient::health_metrics()
                .into_iter()
                .flat_map(|m| [Node::field(m.label, m.value), Node::badge(m.status)])
                .collect(),
        ));
        doc.push(Node::section(
            "Quick Actions",
            patient::quick_actions()
                .into_iter()
                .map(|a| Node::field(a.title, format!("{} — {}", a.description, a.path)))
                .collect(),
        ));
        Ok(doc)
    }
}

/// Doctor home view: today's schedule, recent consultations, practice stats.
pub struct DoctorDashboardView;

impl View for DoctorDashboardView {
    fn key(&self) -> ViewKey {
        ViewKey::DoctorDashboard
    }

    fn title(&self) -> &str {
        "Doctor Dashboard"
    }

    fn render(&self, ctx: &RenderContext) -> Result<Document, ViewError> {
        let display_name = ctx
            .identity
            .map(|id| id.display_name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Doctor");
        let registration = ctx
            .identity
            .and_then(|id| id.registration_id.as_deref())
            .filter(|r| !r.is_empty())
            .unwrap_or("CRM-12345");

        let stats = doctor::practice_stats();
        let mut doc = Document::new(self.key(), self.title());
        doc.push(Node::section(
            "Profile",
            vec![
                Node::field("Name", display_name),
                Node::field("Registration", registration),
            ],
        ));
        doc.push(Node::section(
            "Today's Appointments",
            doctor::today_appointments()
                .into_iter()
                .flat_map(|a| {
                    [
                        Node::field(
                            a.time,
                            format!("{} ({}) — {}", a.patient_name, a.patient_id, a.kind),
                        ),
                        Node::badge(a.status),
                    ]
                })
                .collect(),
        ));
        doc.push(Node::section(
            "Recent Consultations",
            doctor::recent_consultations()
                .into_iter()
                .map(|c| {
                    Node::field(
                        c.date,
                        format!("{} ({}) — {}", c.patient_name, c.patient_id, c.kind),
                    )
                })
                .collect(),
        ));
        doc.push(Node::section(
            "Stats",
            vec![
                Node::field("Appointments Today", stats.today_appointments.to_string()),
                Node::field("Completed Today", stats.completed_today.to_string()),
                Node::field("Pending Reports", stats.pending_reports.to_string()),
                Node::field("Total Patients", stats.total_patients.to_string()),
            ],
        ));
        doc.push(Node::field("New Consultation", "/doctor/consultation"));
        Ok(doc)
    }
}

/// Employer analytics view.
pub struct EmployerDashboardView;

impl View for EmployerDashboardView {
    fn key(&self) -> ViewKey {
        ViewKey::EmployerDashboard
    }

    fn title(&self) -> &str {
        "Employer Dashboard"
    }

    fn render(&self, _ctx: &RenderContext) -> Result<Document, ViewError> {
        let mut doc = Document::new(self.key(), self.title());
        doc.push(Node::section(
            "Absenteeism Rate (%)",
            employer::absenteeism()
                .into_iter()
                .map(|p| {
                    Node::field(p.month, format!("{:.1} (prev {:.1})", p.rate, p.previous))
                })
                .collect(),
        ));
        doc.push(Node::section(
            "Department Health",
            employer::department_health()
                .into_iter()
                .flat_map(|d| {
                    [
                        Node::field(
                            d.department,
                            format!("score {} · {} employees", d.score, d.employees),
                        ),
                        Node::badge(d.risk),
                    ]
                })
                .collect(),
        ));
        doc.push(Node::section(
            "Risk Distribution",
            employer::risk_distribution()
                .into_iter()
                .map(|s| Node::field(s.name, format!("{}%", s.value)))
                .collect(),
        ));
        doc.push(Node::section(
            "Care Credits Usage",
            employer::care_credits_usage()
                .into_iter()
                .map(|p| Node::field(p.month, format!("{} / {}", p.used, p.allocated)))
                .collect(),
        ));
        Ok(doc)
    }
}

/// National health authority (SESI) analytics view.
pub struct SesiDashboardView;

impl View for SesiDashboardView {
    fn key(&self) -> ViewKey {
        ViewKey::SesiDashboard
    }

    fn title(&self) -> &str {
        "SESI National Dashboard"
    }

    fn render(&self, _ctx: &RenderContext) -> Result<Document, ViewError> {
        let mut doc = Document::new(self.key(), self.title());
        doc.push(Node::section(
            "National KPIs",
            sesi::national_kpis()
                .into_iter()
                .flat_map(|k| {
                    [
                        Node::field(k.metric, format!("{:.1} ({})", k.value, k.trend)),
                        Node::badge(k.status),
                    ]
                })
                .collect(),
        ));
        doc.push(Node::section(
            "Health by State",
            sesi::state_health()
                .into_iter()
                .map(|s| {
                    Node::field(
                        s.state,
                        format!(
                            "score {} · {} companies · {} employees · {}% engagement",
                            s.score, s.companies, s.employees, s.engagement
                        ),
                    )
                })
                .collect(),
        ));
        doc.push(Node::section(
            "Age Group Trends",
            sesi::age_group_trends()
                .into_iter()
                .map(|t| {
                    Node::field(
                        t.age,
                        format!(
                            "diabetes {:.1}% · hypertension {:.1}% · participation {}%",
                            t.diabetes, t.hypertension, t.participation
                        ),
                    )
                })
                .collect(),
        ));
        doc.push(Node::section(
            "Company Metrics",
            sesi::company_metrics()
                .into_iter()
                .flat_map(|c| {
                    [
                        Node::field(
                            c.company,
                            format!(
                                "{} employees · score {} · {}",
                                c.employees, c.score, c.region
                            ),
                        ),
                        Node::badge(c.risk),
                    ]
                })
                .collect(),
        ));
        doc.push(Node::section(
            "Chronic Disease Trends (%)",
            sesi::chronic_trends()
                .into_iter()
                .map(|p| {
                    Node::field(
                        p.month,
                        format!(
                            "diabetes {:.1} · hypertension {:.1} · obesity {:.1}",
                            p.diabetes, p.hypertension, p.obesity
                        ),
                    )
                })
                .collect(),
        ));
        Ok(doc)
    }
}
