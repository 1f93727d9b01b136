//! Insurance & rewards sample data.

pub struct InsurancePlan {
    pub current_premium: u32,
    pub original_premium: u32,
    pub savings: u32,
    pub health_score: u32,
    pub discount_percentage: u32,
}

pub struct CareCredits {
    pub current: u32,
    pub earned: u32,
    pub redeemed: u32,
    pub tier: &'static str,
}

pub struct HealthBehavior {
    pub behavior: &'static str,
    pub impact: &'static str,
    pub status: &'static str,
}

pub struct RedeemableService {
    pub name: &'static str,
    pub credits: u32,
    pub description: &'static str,
    pub category: &'static str,
}

pub struct ActivityEntry {
    pub action: &'static str,
    pub description: &'static str,
    pub date: &'static str,
}

pub fn plan() -> InsurancePlan {
    InsurancePlan {
        current_premium: 185,
        original_premium: 220,
        savings: 35,
        health_score: 92,
        discount_percentage: 16,
    }
}

pub fn care_credits() -> CareCredits {
    CareCredits {
        current: 450,
        earned: 150,
        redeemed: 100,
        tier: "Gold",
    }
}

pub fn health_behaviors() -> Vec<HealthBehavior> {
    vec![
        HealthBehavior {
            behavior: "Regular Health Checkups",
            impact: "15% discount",
            status: "active",
        },
        HealthBehavior {
            behavior: "Safety Training Completion",
            impact: "10% discount",
            status: "active",
        },
        HealthBehavior {
            behavior: "No Workplace Incidents",
            impact: "8% discount",
            status: "active",
        },
        HealthBehavior {
            behavior: "Preventive Care Participation",
            impact: "5% discount",
            status: "pending",
        },
    ]
}

pub fn redeemable_services() -> Vec<RedeemableService> {
    vec![
        RedeemableService {
            name: "Healthy Meal Plan",
            credits: 100,
            description: "1-month nutritious meal subscription",
            category: "Nutrition",
        },
        RedeemableService {
            name: "Pharmacy Discount",
            credits: 50,
            description: "25% off prescription medicines",
            category: "Medical",
        },
        RedeemableService {
            name: "Transport Voucher",
            credits: 75,
            description: "Free medical appointment transportation",
            category: "Transportation",
        },
        RedeemableService {
            name: "Wellness Check",
            credits: 200,
            description: "Comprehensive health assessment",
            category: "Medical",
        },
        RedeemableService {
            name: "Gym Membership",
            credits: 300,
            description: "3-month fitness center access",
            category: "Fitness",
        },
    ]
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            action: "Earned 25 credits",
            description: "Weekly safety training completed",
            date: "Dec 18",
        },
        ActivityEntry {
            action: "Redeemed 50 credits",
            description: "Pharmacy discount used",
            date: "Dec 15",
        },
        ActivityEntry {
            action: "Earned 30 credits",
            description: "Health checkup attended",
            date: "Dec 10",
        },
    ]
}
