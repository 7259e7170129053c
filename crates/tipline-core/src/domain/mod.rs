//! Domain entities - the core business objects.

mod identity;
mod tip;

pub use identity::{Capability, Identity, Role};
pub use tip::{Tip, TipDraft, canonical_order};
