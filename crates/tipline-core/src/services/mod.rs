//! Services - the tip lifecycle built on top of the ports.

pub mod catalog;
pub mod console;
pub mod crud;
pub mod feed;
pub mod gate;
pub mod pagination;

pub use catalog::{SharedCatalog, TipCatalog, fetch_canonical};
pub use console::{AdminConsole, SubmitOutcome};
pub use crud::{ConfirmedDeletion, DeletionRequest, TipService};
pub use gate::{AccessState, AdminCapability, AdminGate, AdminSession};
pub use pagination::{DEFAULT_PAGE_SIZE, PageView, Paginator, page_count, paginate};
