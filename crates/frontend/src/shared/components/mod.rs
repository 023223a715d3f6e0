pub mod page_header;
pub mod skeleton;
pub mod stat_card;

pub use page_header::PageHeader;
pub use skeleton::DashboardSkeleton;
pub use stat_card::StatCard;
