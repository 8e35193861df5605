//! Deterministic template-based description generator

use async_trait::async_trait;

use crate::domain::{DescriptionGenerator, DescriptionRequest, DomainError, JobBrief};
use crate::infrastructure::observability::record_description_generated;

const BODY: &str = "\
Responsibilities:
• Lead and execute key projects
• Collaborate with cross-functional teams
• Drive innovation and continuous improvement
• Mentor junior team members

Qualifications:
• 3+ years of relevant experience
• Strong problem-solving skills
• Excellent communication abilities
• Bachelor's degree in relevant field

Benefits:
• Competitive salary
• Health insurance
• Flexible working hours
• Professional development opportunities";

/// Fills a fixed template from the brief. Same input, same output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateDescriptionGenerator;

impl TemplateDescriptionGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render a validated brief
    pub fn render(brief: &JobBrief) -> String {
        let expertise = if brief.skills.is_empty() {
            String::new()
        } else {
            format!(" with expertise in {}", brief.skills.join(", "))
        };

        let employer = brief
            .company
            .as_deref()
            .map(|company| format!(" at {}", company))
            .unwrap_or_default();

        format!(
            "We are seeking a talented {}{} to join our team{}.\n\n{}",
            brief.title, expertise, employer, BODY
        )
    }
}

#[async_trait]
impl DescriptionGenerator for TemplateDescriptionGenerator {
    async fn generate(&self, request: &DescriptionRequest) -> Result<String, DomainError> {
        let brief = request.validate()?;
        record_description_generated("template");
        Ok(Self::render(&brief))
    }

    fn name(&self) -> &'static str {
        "template"
    }
}
