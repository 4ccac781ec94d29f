mod analytics;
mod entity;
mod placement;
mod report;
mod transaction;

#[rustfmt::skip]
pub use {
    analytics::AnalyticsServiceImpl,
    entity::EntityServiceImpl,
    placement::PlacementServiceImpl,
    report::{Inventory, ReportLimits},
};
