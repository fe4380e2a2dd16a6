pub mod render;
pub mod template;

pub use render::{fingerprint, render, RenderError, TEMPLATE_VERSION};
pub use template::{BriefTemplate, DocField, FocusExample, Section, Stage};
