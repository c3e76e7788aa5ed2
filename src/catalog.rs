//! Fixed backing datasets: business-process taxonomies, their use cases, AI
//! capabilities, canned sample inputs, comparison metrics, and the score
//! history table.
//!
//! Everything here is static data behind pure lookups. Unknown ids resolve to
//! `None` or an empty slice, never an error, so stale selections degrade to
//! no-op filters downstream.

use serde::{Deserialize, Serialize};

/// The AI function mode under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    DocExtraction,
    AutonomousDecision,
    ConversationalAssist,
}

impl Capability {
    pub const ALL: [Capability; 3] = [
        Capability::DocExtraction,
        Capability::AutonomousDecision,
        Capability::ConversationalAssist,
    ];

    /// Stable short id used by selection surfaces and logs.
    pub fn id(&self) -> &'static str {
        match self {
            Capability::DocExtraction => "idp",
            Capability::AutonomousDecision => "agent",
            Capability::ConversationalAssist => "assistant",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Capability::DocExtraction => "AI Doc Reader (IDP)",
            Capability::AutonomousDecision => "AI Agent 2.0",
            Capability::ConversationalAssist => "AI Assistant",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Capability::DocExtraction => "Document extraction & processing",
            Capability::AutonomousDecision => "Autonomous decision making",
            Capability::ConversationalAssist => "Interactive guidance",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.id() == id)
    }
}

/// A top-level business-domain grouping offered on the run-configuration
/// surface, with the use cases it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxonomyInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub use_cases: &'static [&'static str],
}

pub const TAXONOMIES: [TaxonomyInfo; 5] = [
    TaxonomyInfo {
        id: "finance",
        name: "Finance",
        use_cases: &["Invoice Processing", "Credit Analysis", "Expense Claims", "Budget Approval"],
    },
    TaxonomyInfo {
        id: "hr",
        name: "Human Resources",
        use_cases: &[
            "Candidate Screening",
            "Employee Onboarding",
            "Leave Requests",
            "Performance Review",
        ],
    },
    TaxonomyInfo {
        id: "procurement",
        name: "Procurement",
        use_cases: &["Vendor Onboarding", "Purchase Requests", "Contract Review", "RFP Analysis"],
    },
    TaxonomyInfo {
        id: "it",
        name: "IT Operations",
        use_cases: &["Service Requests", "Incident Triage", "Change Management", "Asset Management"],
    },
    TaxonomyInfo {
        id: "legal",
        name: "Legal",
        use_cases: &["Contract Analysis", "Compliance Review", "NDA Processing", "IP Review"],
    },
];

pub fn taxonomy(id: &str) -> Option<&'static TaxonomyInfo> {
    TAXONOMIES.iter().find(|t| t.id == id)
}

/// Use cases offered for a taxonomy; empty for unknown ids.
pub fn use_cases_for(taxonomy_id: &str) -> &'static [&'static str] {
    taxonomy(taxonomy_id).map(|t| t.use_cases).unwrap_or(&[])
}

/// Canned document text auto-loaded when a use case with a sample is chosen.
pub fn sample_input(use_case: &str) -> Option<&'static str> {
    match use_case {
        "Invoice Processing" => Some(INVOICE_SAMPLE),
        "Candidate Screening" => Some(RESUME_SAMPLE),
        "Contract Analysis" => Some(CONTRACT_SAMPLE),
        _ => None,
    }
}

const INVOICE_SAMPLE: &str = "\
INVOICE #INV-2024-0892
Vendor: Acme Technologies Ltd.
Date: January 15, 2024
Due Date: February 14, 2024

Bill To:
TechCorp Industries
123 Business Ave, Suite 500
San Francisco, CA 94102

Items:
1. Cloud Services (Monthly) - $2,450.00
2. API Integration License - $1,200.00
3. Support & Maintenance - $800.00

Subtotal: $4,450.00
Tax (8.5%): $378.25
Total: $4,828.25

Payment Terms: Net 30
Bank: First National Bank
Account: ****4521";

const RESUME_SAMPLE: &str = "\
RESUME - Software Engineer Position

Name: Jane Smith
Email: jane.smith@email.com
Phone: (555) 123-4567

Experience:
- Senior Developer at Google (2020-2024)
- Software Engineer at Microsoft (2017-2020)
- Junior Developer at Startup XYZ (2015-2017)

Education:
- M.S. Computer Science, Stanford University
- B.S. Computer Science, MIT

Skills: Python, JavaScript, React, Node.js, AWS, Docker, Kubernetes
Certifications: AWS Solutions Architect, Google Cloud Professional";

const CONTRACT_SAMPLE: &str = "\
SERVICE AGREEMENT

This Agreement is entered into as of March 1, 2024

PARTIES:
1. Provider: CloudTech Solutions Inc.
2. Client: Enterprise Corp.

TERM: 24 months from effective date
AUTO-RENEWAL: Yes, 12-month periods
TERMINATION NOTICE: 90 days

FEES:
- Monthly Service Fee: $15,000
- Implementation Fee: $25,000 (one-time)
- Annual Increase: Not to exceed 5%

LIABILITY CAP: $500,000
GOVERNING LAW: State of Delaware";

/// Aggregate scores for one selectable entity (taxonomy or use case).
///
/// `taxonomy` names the parent grouping for use cases and is `None` for
/// taxonomies themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntityMetrics {
    pub id: &'static str,
    pub name: &'static str,
    pub taxonomy: Option<&'static str>,
    pub score: u32,
    pub trend: f64,
    pub evaluations: u32,
    pub idp_accuracy: u32,
    pub agent_accuracy: u32,
    pub assistant_score: u32,
    pub sla_improvement: u32,
}

pub const TAXONOMY_METRICS: [EntityMetrics; 5] = [
    EntityMetrics { id: "finance", name: "Finance", taxonomy: None, score: 92, trend: 3.2, evaluations: 1240, idp_accuracy: 94, agent_accuracy: 91, assistant_score: 88, sla_improvement: 78 },
    EntityMetrics { id: "hr", name: "Human Resources", taxonomy: None, score: 87, trend: 1.8, evaluations: 890, idp_accuracy: 89, agent_accuracy: 85, assistant_score: 92, sla_improvement: 65 },
    EntityMetrics { id: "procurement", name: "Procurement", taxonomy: None, score: 89, trend: -0.5, evaluations: 756, idp_accuracy: 91, agent_accuracy: 88, assistant_score: 85, sla_improvement: 72 },
    EntityMetrics { id: "it", name: "IT", taxonomy: None, score: 91, trend: 2.1, evaluations: 623, idp_accuracy: 93, agent_accuracy: 90, assistant_score: 87, sla_improvement: 81 },
    EntityMetrics { id: "legal", name: "Legal", taxonomy: None, score: 85, trend: 4.5, evaluations: 412, idp_accuracy: 87, agent_accuracy: 82, assistant_score: 90, sla_improvement: 58 },
];

pub const USE_CASE_METRICS: [EntityMetrics; 9] = [
    EntityMetrics { id: "invoice-processing", name: "Invoice Processing", taxonomy: Some("Finance"), score: 94, trend: 2.1, evaluations: 520, idp_accuracy: 96, agent_accuracy: 93, assistant_score: 89, sla_improvement: 85 },
    EntityMetrics { id: "expense-claims", name: "Expense Claims", taxonomy: Some("Finance"), score: 91, trend: 1.5, evaluations: 380, idp_accuracy: 93, agent_accuracy: 90, assistant_score: 87, sla_improvement: 72 },
    EntityMetrics { id: "credit-analysis", name: "Credit Analysis", taxonomy: Some("Finance"), score: 89, trend: 3.8, evaluations: 210, idp_accuracy: 91, agent_accuracy: 88, assistant_score: 85, sla_improvement: 68 },
    EntityMetrics { id: "candidate-screening", name: "Candidate Screening", taxonomy: Some("HR"), score: 88, trend: 2.3, evaluations: 340, idp_accuracy: 90, agent_accuracy: 86, assistant_score: 94, sla_improvement: 70 },
    EntityMetrics { id: "employee-onboarding", name: "Employee Onboarding", taxonomy: Some("HR"), score: 86, trend: 1.2, evaluations: 290, idp_accuracy: 88, agent_accuracy: 84, assistant_score: 91, sla_improvement: 62 },
    EntityMetrics { id: "vendor-onboarding", name: "Vendor Onboarding", taxonomy: Some("Procurement"), score: 90, trend: -0.8, evaluations: 280, idp_accuracy: 92, agent_accuracy: 89, assistant_score: 86, sla_improvement: 75 },
    EntityMetrics { id: "purchase-requests", name: "Purchase Requests", taxonomy: Some("Procurement"), score: 88, trend: 0.5, evaluations: 310, idp_accuracy: 90, agent_accuracy: 87, assistant_score: 84, sla_improvement: 69 },
    EntityMetrics { id: "ticket-resolution", name: "Ticket Resolution", taxonomy: Some("IT"), score: 92, trend: 2.8, evaluations: 420, idp_accuracy: 94, agent_accuracy: 91, assistant_score: 88, sla_improvement: 83 },
    EntityMetrics { id: "contract-review", name: "Contract Review", taxonomy: Some("Legal"), score: 86, trend: 5.2, evaluations: 180, idp_accuracy: 88, agent_accuracy: 83, assistant_score: 91, sla_improvement: 55 },
];

/// Period labels for the score history table, oldest first.
pub const HISTORY_PERIODS: [&str; 6] = ["Mar", "Apr", "May", "Jun", "Jul", "Aug"];

/// Monthly overall scores per entity id, aligned with [`HISTORY_PERIODS`].
/// Entities without tracked history yield an empty slice.
pub fn score_history(id: &str) -> &'static [u32] {
    match id {
        "finance" => &[86, 87, 88, 89, 91, 92],
        "hr" => &[83, 84, 85, 85, 86, 87],
        "procurement" => &[91, 90, 90, 89, 89, 89],
        "it" => &[87, 88, 89, 90, 90, 91],
        "legal" => &[79, 80, 81, 83, 84, 85],
        "invoice-processing" => &[89, 90, 91, 92, 93, 94],
        "expense-claims" => &[87, 88, 89, 90, 90, 91],
        "credit-analysis" => &[83, 84, 86, 87, 88, 89],
        "candidate-screening" => &[84, 85, 86, 86, 87, 88],
        "employee-onboarding" => &[83, 84, 84, 85, 85, 86],
        "vendor-onboarding" => &[92, 92, 91, 91, 90, 90],
        "purchase-requests" => &[87, 87, 88, 87, 88, 88],
        "ticket-resolution" => &[87, 88, 89, 90, 91, 92],
        "contract-review" => &[78, 80, 82, 83, 85, 86],
        _ => &[],
    }
}
