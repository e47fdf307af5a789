//! Record-lifecycle controller for the "my diary" screen
//!
//! This crate owns the logic behind a screen that shows a single diary record:
//! - Loading the record and its emotion sub-resource (two dependent fetches)
//! - Reconciling both into one [`ViewState`]
//! - Dispatching delete / publish / analyze actions against the diary service
//! - Routing the ambiguous "edit" intent to the emotion or content editor
//!
//! ## Architecture
//!
//! ```text
//! ResourceClient → RecordLoader → ViewState
//! Presentation → DiaryController → ActionDispatcher / EditIntentRouter
//!                                → Acknowledgment / NavigationRequest
//! ```
//!
//! The presentation layer renders what the controller returns and feeds user
//! events back through controller methods. Remote failures never surface as
//! `Err`; they become acknowledgments or a failed view.

pub mod api;
pub mod config;
pub mod controller;
pub mod dispatcher;
pub mod error;
pub mod loader;
pub mod model;
pub mod navigation;
pub mod router;
pub mod view;

// Re-exports for convenience
pub use api::{ApiResponse, HttpResourceClient, Method, ResourceClient, ResponseBody};
pub use config::ClientConfig;
pub use controller::{DiaryController, LoadCycle};
pub use dispatcher::{Acknowledgment, ActionDispatcher, PublishOutcome};
pub use error::{ControllerError, LoadError};
pub use loader::RecordLoader;
pub use model::{DiaryDisplay, DiaryRecord, EmotionClassification};
pub use navigation::{NavigationRequest, Route};
pub use router::{EditIntentRouter, EditRouterState, EditTarget};
pub use view::ViewState;
