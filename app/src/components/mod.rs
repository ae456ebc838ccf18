//! UI Components
//!
//! One module per page section plus the shared chart widget.

pub mod about;
pub mod hero;
pub mod navbar;
pub mod result_panel;
pub mod risk_chart;
pub mod upload_panel;

pub use about::AboutPanel;
pub use hero::Hero;
pub use navbar::Navbar;
pub use result_panel::ResultPanel;
pub use upload_panel::UploadPanel;
