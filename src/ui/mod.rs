pub mod analysis;
pub mod app;
pub mod card;
pub mod colors;
pub mod contract;
pub mod home;
pub mod premium;
pub mod strategy;
pub mod theme;
pub mod view;

pub use app::TuiApp;
pub use colors::Palette;
pub use home::HomePage;
pub use theme::ThemeContext;
