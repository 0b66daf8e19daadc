pub mod api;
pub mod escape;
pub mod instructions;
pub mod signature;

pub use api::{ErrorResponse, RenderedSignature, UploadResponse};
pub use escape::{escape_attribute, escape_html};
pub use instructions::MailClient;
pub use signature::{SignatureData, render_signature_html, render_signature_text};
pub use strum::IntoEnumIterator;
