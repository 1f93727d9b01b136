//! National health authority (SESI) dashboard sample data.

pub struct StateHealth {
    pub state: &'static str,
    pub score: u32,
    pub companies: u32,
    pub employees: u32,
    pub engagement: u32,
}

pub struct AgeGroupTrend {
    pub age: &'static str,
    pub diabetes: f64,
    pub hypertension: f64,
    pub participation: u32,
}

pub struct CompanyMetric {
    pub company: &'static str,
    pub employees: u32,
    pub score: u32,
    pub risk: &'static str,
    pub region: &'static str,
}

pub struct NationalKpi {
    pub metric: &'static str,
    pub value: f64,
    pub trend: &'static str,
    pub status: &'static str,
}

pub struct ChronicTrendPoint {
    pub month: &'static str,
    pub diabetes: f64,
    pub hypertension: f64,
    pub obesity: f64,
}

pub fn state_health() -> Vec<StateHealth> {
    vec![
        StateHealth { state: "SP", score: 78, companies: 245, employees: 15420, engagement: 82 },
        StateHealth { state: "RJ", score: 74, companies: 189, employees: 12340, engagement: 79 },
        StateHealth { state: "MG", score: 81, companies: 156, employees: 9870, engagement: 85 },
        StateHealth { state: "RS", score: 76, companies: 132, employees: 8650, engagement: 77 },
        StateHealth { state: "PR", score: 79, companies: 98, employees: 6420, engagement: 80 },
    ]
}

pub fn age_group_trends() -> Vec<AgeGroupTrend> {
    vec![
        AgeGroupTrend { age: "18-25", diabetes: 2.1, hypertension: 8.5, participation: 89 },
        AgeGroupTrend { age: "26-35", diabetes: 4.8, hypertension: 15.2, participation: 85 },
        AgeGroupTrend { age: "36-45", diabetes: 9.2, hypertension: 28.4, participation: 82 },
        AgeGroupTrend { age: "46-55", diabetes: 15.6, hypertension: 42.1, participation: 78 },
        AgeGroupTrend { age: "56+", diabetes: 24.3, hypertension: 58.9, participation: 74 },
    ]
}

pub fn company_metrics() -> Vec<CompanyMetric> {
    vec![
        CompanyMetric { company: "ABC Industries", employees: 2340, score: 85, risk: "low", region: "Southeast" },
        CompanyMetric { company: "XYZ Manufacturing", employees: 1890, score: 72, risk: "medium", region: "South" },
        CompanyMetric { company: "Tech Solutions", employees: 856, score: 91, risk: "low", region: "Southeast" },
        CompanyMetric { company: "Metal Works", employees: 1240, score: 68, risk: "high", region: "Northeast" },
        CompanyMetric { company: "Green Energy", employees: 745, score: 88, risk: "low", region: "South" },
    ]
}

pub fn national_kpis() -> Vec<NationalKpi> {
    vec![
        NationalKpi { metric: "Overall Health Score", value: 76.8, trend: "+2.3%", status: "improving" },
        NationalKpi { metric: "Program Participation", value: 81.2, trend: "+5.1%", status: "improving" },
        NationalKpi { metric: "Risk Reduction", value: 18.5, trend: "+12.8%", status: "improving" },
        NationalKpi { metric: "Care Accessibility", value: 73.4, trend: "-1.2%", status: "declining" },
    ]
}

pub fn chronic_trends() -> Vec<ChronicTrendPoint> {
    vec![
        ChronicTrendPoint { month: "Jan", diabetes: 12.4, hypertension: 28.9, obesity: 31.2 },
        ChronicTrendPoint { month: "Feb", diabetes: 12.1, hypertension: 28.5, obesity: 30.8 },
        ChronicTrendPoint { month: "Mar", diabetes: 11.8, hypertension: 28.1, obesity: 30.3 },
        ChronicTrendPoint { month: "Apr", diabetes: 11.6, hypertension: 27.8, obesity: 29.9 },
        ChronicTrendPoint { month: "May", diabetes: 11.3, hypertension: 27.4, obesity: 29.5 },
        ChronicTrendPoint { month: "Jun", diabetes: 11.0, hypertension: 27.1, obesity: 29.1 },
    ]
}
