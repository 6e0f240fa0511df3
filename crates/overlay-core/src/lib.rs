pub mod config;
pub mod constants;
pub mod drag;
pub mod easing;
pub mod error;
pub mod idle;
pub mod interaction;
pub mod layout;
pub mod overlay;
pub mod params;
pub mod scene;
pub mod sequencer;
pub mod trail;

pub use config::*;
pub use constants::*;
pub use drag::*;
pub use error::OverlayError;
pub use idle::*;
pub use interaction::*;
pub use layout::*;
pub use overlay::*;
pub use params::*;
pub use scene::*;
pub use sequencer::*;
pub use trail::*;
