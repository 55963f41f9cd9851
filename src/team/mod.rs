pub mod client;
pub mod types;

pub use client::{RestTeamResource, TeamApiError, TeamResource};
pub use types::{Team, TeamId};
