pub mod dropdown;
pub mod selection;
pub mod ui;

pub use dropdown::{Dropdown, DropdownState};
pub use selection::SelectionState;
pub use ui::UIState;
