pub mod rules;

pub use rules::{PriceTrackingRecord, SurgeRules};
