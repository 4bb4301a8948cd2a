mod add;
mod list;
mod settings;
mod util;

pub use add::AddPage;
pub use list::ListPage;
pub use settings::SettingsPage;
pub use util::{KeyResult, Shortcut};
