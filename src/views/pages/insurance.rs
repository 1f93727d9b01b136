use crate::app::router::ViewKey;
use crate::data::insurance;
use crate::views::{Document, Node, RenderContext, View, ViewError};

/// Insurance plan, care credits, earning behaviors, and redeemable rewards.
pub struct InsuranceView;

impl View for InsuranceView {
    fn key(&self) -> ViewKey {
        ViewKey::Insurance
    }

    fn title(&self) -> &str {
        "Insurance & Rewards"
    }

    fn render(&self, _ctx: &RenderContext) -> Result<Document, ViewError> {
        let plan = insurance::plan();
        let credits = insurance::care_credits();

        let mut doc = Document::new(self.key(), self.title());
        doc.push(Node::section(
            "Current Plan",
            vec![
                Node::field("Monthly Premium", format!("R$ {}", plan.current_premium)),
                Node::field("Original Premium", format!("R$ {}", plan.original_premium)),
                Node::field(
                    "Savings",
                    format!("R$ {} ({}% discount)", plan.savings, plan.discount_percentage),
                ),
                Node::field("Health Score", format!("{}/100", plan.health_score)),
            ],
        ));
        doc.push(Node::section(
            "Care Credits",
            vec![
                Node::field("Balance", credits.current.to_string()),
                Node::field("Earned This Month", credits.earned.to_string()),
                Node::field("Redeemed This Month", credits.redeemed.to_string()),
                Node::badge(credits.tier),
            ],
        ));
        doc.push(Node::section(
            "Health Behaviors",
            insurance::health_behaviors()
                .into_iter()
                .flat_map(|b| [Node::field(b.behavior, b.impact), Node::badge(b.status)])
                .collect(),
        ));
        doc.push(Node::section(
            "Redeem Credits",
            insurance::redeemable_services()
                .into_iter()
                .map(|s| {
                    Node::field(
                        s.name,
                        format!("{} credits · {} · {}", s.credits, s.category, s.description),
                    )
                })
                .collect(),
        ));
        doc.push(Node::section(
            "Recent Activity",
            insurance::recent_activity()
                .into_iter()
                .map(|a| Node::field(a.action, format!("{} ({})", a.description, a.date)))
                .collect(),
        ));
        Ok(doc)
    }
}
