pub mod context;
pub mod detail;
pub mod route;

pub use context::{
    build_context, consume_context, descend, fallback_for, round_trip, BackTarget, Crumb,
    EntityRef, Fallback, NavigationContext, Received, CONTEXT_VERSION,
};
pub use detail::{resolve_detail, DetailOutcome};
pub use route::{Route, REPORTS_KEY};
