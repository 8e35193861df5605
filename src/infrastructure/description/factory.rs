use std::sync::Arc;

use tracing::{info, warn};

use super::{OpenAiDescriptionGenerator, TemplateDescriptionGenerator};
use crate::config::{GeneratorConfig, GeneratorProvider};
use crate::domain::{DescriptionGenerator, DomainError};

/// Factory for creating description generators
#[derive(Debug)]
pub struct DescriptionGeneratorFactory;

impl DescriptionGeneratorFactory {
    /// Build the configured generator. `openai` without an API key degrades
    /// to the template.
    pub fn create(config: &GeneratorConfig) -> Result<Arc<dyn DescriptionGenerator>, DomainError> {
        match config.provider {
            GeneratorProvider::Template => Ok(Arc::new(TemplateDescriptionGenerator::new())),
            GeneratorProvider::OpenAi => {
                let api_key = config
                    .openai
                    .api_key
                    .as_deref()
                    .map(str::trim)
                    .filter(|key| !key.is_empty());

                let Some(api_key) = api_key else {
                    warn!("OpenAI generator selected without an API key, using template");
                    return Ok(Arc::new(TemplateDescriptionGenerator::new()));
                };

                let generator = OpenAiDescriptionGenerator::new(&config.openai, api_key)?;
                info!(model = %config.openai.model, "Using OpenAI description generator");

                Ok(Arc::new(generator))
            }
        }
    }
}
