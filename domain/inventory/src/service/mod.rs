mod analytics;
mod entity;
mod placement;

#[rustfmt::skip]
pub use {
    analytics::AnalyticsService,
    entity::EntityService,
    placement::PlacementService,
};
