//! Sample automation ideas shown by front-ends next to the evaluator.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleIdea {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub example_questions: &'static [&'static str],
}

pub static SAMPLE_IDEAS: &[SampleIdea] = &[
    SampleIdea {
        id: "email-processing",
        title: "Email Processing Automation",
        description: "Automatically categorize and route incoming customer support emails",
        category: "Customer Service",
        example_questions: &[
            "How many emails do you receive daily?",
            "How long does it take to manually categorize each email?",
            "What happens if an email gets misrouted?",
            "Do you use any existing email management tools?",
        ],
    },
    SampleIdea {
        id: "invoice-processing",
        title: "Invoice Processing",
        description: "Extract data from invoices and enter into accounting system",
        category: "Finance",
        example_questions: &[
            "How many invoices do you process monthly?",
            "What information needs to be extracted from each invoice?",
            "What accounting system do you use?",
            "How critical is accuracy for financial data?",
        ],
    },
    SampleIdea {
        id: "lead-qualification",
        title: "Lead Qualification",
        description: "Automatically score and qualify sales leads from website forms",
        category: "Sales",
        example_questions: &[
            "How many leads do you get per week?",
            "What criteria do you use to qualify leads?",
            "How much time does manual qualification take?",
            "What CRM system do you use?",
        ],
    },
    SampleIdea {
        id: "content-moderation",
        title: "Content Moderation",
        description: "Automatically review and moderate user-generated content",
        category: "Content Management",
        example_questions: &[
            "How much content needs moderation daily?",
            "What are your content guidelines?",
            "What happens if inappropriate content gets through?",
            "Do you have existing moderation tools?",
        ],
    },
    SampleIdea {
        id: "data-entry",
        title: "Data Entry Automation",
        description: "Automatically extract and enter data from various documents",
        category: "Operations",
        example_questions: &[
            "What types of documents need data extraction?",
            "How many documents do you process daily?",
            "What systems need the extracted data?",
            "How accurate does the data entry need to be?",
        ],
    },
];

/// Look up a sample idea by id
pub fn sample_idea(id: &str) -> Option<&'static SampleIdea> {
    SAMPLE_IDEAS.iter().find(|idea| idea.id == id)
}
