//! The thin presentation layer around the core engines.
//!
//! Nothing in here owns filter or deletion logic: commands validate input,
//! run a core engine and report through the [`proxy::EventProxy`] seam. Any
//! front end able to render [`events::UserEvent`]s can drive the engines.

pub mod commands;
pub mod events;
pub mod proxy;
pub mod state;
