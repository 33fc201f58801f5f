//! Materializes filesystem search hits into actionable launcher results.
//!
//! A [`MatchedEntity`] goes through [`ResultFactory`] to become a
//! [`ResultRecord`]; invoking the record later goes through
//! [`ActionDispatcher`].

pub mod actions;
pub mod dispatch;
pub mod error;
pub mod factory;
pub mod host;
pub mod indexer;
pub mod keyword;
pub mod logging;
pub mod media;
pub mod model;
pub mod notifier;
pub mod paths;
pub mod search;
pub mod settings;
pub mod size;

#[cfg(test)]
mod testing;

pub use dispatch::{resolve_step, ActionDispatcher};
pub use error::ExplorerError;
pub use factory::{ResultFactory, VolumeUsage};
pub use model::{
    ActionBinding, ActionStep, EntityKind, MatchedEntity, Modifiers, QueryContext, ResultRecord,
};
pub use notifier::IndexingUsageNotifier;
pub use settings::ExplorerSettings;
