//! Employer dashboard sample data.

pub struct AbsenteeismPoint {
    pub month: &'static str,
    pub rate: f64,
    pub previous: f64,
}

pub struct DepartmentHealth {
    pub department: &'static str,
    pub score: u32,
    pub employees: u32,
    pub risk: &'static str,
}

pub struct RiskSlice {
    pub name: &'static str,
    pub value: u32,
}

pub struct CareCreditsPoint {
    pub month: &'static str,
    pub used: u32,
    pub allocated: u32,
}

pub fn absenteeism() -> Vec<AbsenteeismPoint> {
    vec![
        AbsenteeismPoint { month: "Jan", rate: 4.2, previous: 5.1 },
        AbsenteeismPoint { month: "Feb", rate: 3.8, previous: 4.9 },
        AbsenteeismPoint { month: "Mar", rate: 3.5, previous: 4.7 },
        AbsenteeismPoint { month: "Apr", rate: 2.9, previous: 4.2 },
        AbsenteeismPoint { month: "May", rate: 3.1, previous: 4.0 },
        AbsenteeismPoint { month: "Jun", rate: 2.7, previous: 3.8 },
    ]
}

pub fn department_health() -> Vec<DepartmentHealth> {
    vec![
        DepartmentHealth { department: "Manufacturing", score: 78, employees: 150, risk: "medium" },
        DepartmentHealth { department: "Administration", score: 85, employees: 45, risk: "low" },
        DepartmentHealth { department: "Logistics", score: 72, employees: 89, risk: "high" },
        DepartmentHealth { department: "Quality Control", score: 81, employees: 32, risk: "low" },
        DepartmentHealth { department: "Maintenance", score: 69, employees: 28, risk: "high" },
    ]
}

pub fn risk_distribution() -> Vec<RiskSlice> {
    vec![
        RiskSlice { name: "Low Risk", value: 62 },
        RiskSlice { name: "Medium Risk", value: 28 },
        RiskSlice { name: "High Risk", value: 10 },
    ]
}

pub fn care_credits_usage() -> Vec<CareCreditsPoint> {
    vec![
        CareCreditsPoint { month: "Jan", used: 1250, allocated: 2000 },
        CareCreditsPoint { month: "Feb", used: 1380, allocated: 2000 },
        CareCreditsPoint { month: "Mar", used: 1560, allocated: 2000 },
        CareCreditsPoint { month: "Apr", used: 1890, allocated: 2000 },
        CareCreditsPoint { month: "May", used: 1650, allocated: 2000 },
        CareCreditsPoint { month: "Jun", used: 1720, allocated: 2000 },
    ]
}
