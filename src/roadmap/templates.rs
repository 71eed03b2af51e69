use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::scoring::Tier;

/// One stage of an implementation roadmap
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Phase {
    pub title: &'static str,
    pub activities: &'static [&'static str],
}

/// Fixed phase/tool/budget template associated with a tier
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapTemplate {
    pub phases: &'static [Phase],
    pub tools: &'static [&'static str],
    pub budget: &'static str,
    pub timeline: &'static str,
}

// Phases go on the wire as `phase1`, `phase2`, ... next to the tool list.
impl Serialize for RoadmapTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.phases.len() + 3))?;
        for (i, phase) in self.phases.iter().enumerate() {
            map.serialize_entry(&format!("phase{}", i + 1), phase)?;
        }
        map.serialize_entry("tools", self.tools)?;
        map.serialize_entry("budget", self.budget)?;
        map.serialize_entry("timeline", self.timeline)?;
        map.end()
    }
}

pub static LOW: RoadmapTemplate = RoadmapTemplate {
    phases: &[
        Phase {
            title: "Quick Wins (Week 1-2)",
            activities: &[
                "Document current process flow",
                "Identify automation templates/tools",
                "Create simple automation scripts",
                "Test with small data sets",
            ],
        },
        Phase {
            title: "Implementation (Week 2-4)",
            activities: &[
                "Deploy basic automation",
                "Train team on new process",
                "Monitor and adjust",
                "Document lessons learned",
            ],
        },
    ],
    tools: &[
        "Zapier",
        "Microsoft Power Automate",
        "Google Apps Script",
        "Simple Python scripts",
    ],
    budget: "€500-2,000",
    timeline: "2-4 weeks",
};

pub static MID: RoadmapTemplate = RoadmapTemplate {
    phases: &[
        Phase {
            title: "Analysis & Design (Week 1-2)",
            activities: &[
                "Detailed process mapping",
                "System integration analysis",
                "Custom solution architecture",
                "Risk assessment and mitigation",
            ],
        },
        Phase {
            title: "Development (Week 3-6)",
            activities: &[
                "Build custom automation",
                "Integrate with existing systems",
                "Create monitoring dashboards",
                "Develop error handling",
            ],
        },
        Phase {
            title: "Deployment & Optimization (Week 7-8)",
            activities: &[
                "Pilot testing with select users",
                "Full deployment",
                "Performance optimization",
                "Training and documentation",
            ],
        },
    ],
    tools: &[
        "Custom APIs",
        "RPA tools (UiPath, Automation Anywhere)",
        "Cloud platforms (AWS, Azure)",
        "Database integration",
    ],
    budget: "€5,000-15,000",
    timeline: "6-8 weeks",
};

pub static PREMIUM: RoadmapTemplate = RoadmapTemplate {
    phases: &[
        Phase {
            title: "Strategic Planning (Week 1-3)",
            activities: &[
                "Comprehensive business analysis",
                "AI/ML capability assessment",
                "Enterprise architecture design",
                "Stakeholder alignment",
            ],
        },
        Phase {
            title: "Advanced Development (Week 4-10)",
            activities: &[
                "AI model development/training",
                "Complex system integration",
                "Advanced workflow orchestration",
                "Real-time monitoring systems",
            ],
        },
        Phase {
            title: "Enterprise Deployment (Week 11-12)",
            activities: &[
                "Enterprise-wide rollout",
                "Advanced analytics implementation",
                "Continuous learning systems",
                "Ongoing optimization",
            ],
        },
    ],
    tools: &[
        "AI/ML platforms",
        "Enterprise RPA",
        "Advanced cloud services",
        "Custom AI agents",
    ],
    budget: "€20,000-50,000+",
    timeline: "10-12 weeks",
};

/// Same for every tier
pub static NEXT_STEPS: [&str; 5] = [
    "Review and approve the automation plan",
    "Allocate budget and resources",
    "Assign project team members",
    "Set up project tracking and milestones",
    "Begin Phase 1 activities",
];

pub fn template_for(tier: Tier) -> &'static RoadmapTemplate {
    match tier {
        Tier::Low => &LOW,
        Tier::Mid => &MID,
        Tier::Premium => &PREMIUM,
    }
}
