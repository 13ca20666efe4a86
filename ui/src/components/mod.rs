pub mod charts;
pub mod feedback;
pub mod layout;
pub mod modal;
pub mod nav;
pub mod stat_card;

pub use feedback::{EmptyState, ErrorBanner, NotFoundCard, Spinner};
pub use layout::{Sidebar, TopBar};
pub use modal::Modal;
pub use stat_card::StatCard;
