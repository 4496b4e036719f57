//! Platform-agnostic core - shared between the desktop and web builds
//!
//! Nothing in here depends on egui; the app layer only paints what
//! [`PlotState::draw_list`] hands it.

pub mod camera;
pub mod controls;
pub mod error;
pub mod plot;
pub mod scales;
pub mod scene;
pub mod trades;

pub use camera::{Axis, Camera, Viewport};
pub use controls::CameraControls;
pub use error::{DataError, RecordDefect};
pub use plot::{DrawItem, DrawShape, PlotState};
pub use scales::{Rgb, ScaleBank};
pub use scene::{BuildReport, Mesh, Scene, SceneBuilder};
pub use trades::{demo_trades, load_trades_file, load_trades_json, TradeRecord};
