pub mod action;
pub mod controller;
pub mod effect;
pub mod effect_runner;
pub mod error;
pub mod modal_phase;
pub mod modal_tab;
pub mod ports;
pub mod reducer;
pub mod reducers;
pub mod shared_config;
pub mod state;

pub use action::{Action, FormField, InputValue};
pub use controller::ModalController;
pub use effect::Effect;
pub use error::ModalError;
pub use modal_phase::ModalPhase;
pub use modal_tab::ModalTab;
pub use shared_config::SharedConfig;
pub use state::{ModalMode, ModalState};
