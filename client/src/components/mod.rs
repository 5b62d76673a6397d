pub mod model_panel;
pub mod notice;
pub mod preview;
pub mod prompt_bar;
pub mod sidebar;

pub use model_panel::ModelPanel;
pub use notice::NoticeBanner;
pub use preview::Preview;
pub use prompt_bar::PromptBar;
pub use sidebar::Sidebar;
