//! Job description generators

mod factory;
mod openai;
mod template;

pub use factory::DescriptionGeneratorFactory;
pub use openai::OpenAiDescriptionGenerator;
pub use template::TemplateDescriptionGenerator;
