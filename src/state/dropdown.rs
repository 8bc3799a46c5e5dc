// Dropdown visibility - toggling, close-on-select and click-outside dismissal
use eframe::egui::{Pos2, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dropdown {
    FileType,
    Engine,
}

#[derive(Clone, Copy, Debug, Default)]
struct Slot {
    open: bool,
    // Button plus list, as laid out on the last frame
    area: Option<Rect>,
}

#[derive(Debug, Default)]
pub struct DropdownState {
    file_type: Slot,
    engine: Slot,
}

impl DropdownState {
    fn slot(&self, dropdown: Dropdown) -> &Slot {
        match dropdown {
            Dropdown::FileType => &self.file_type,
            Dropdown::Engine => &self.engine,
        }
    }

    fn slot_mut(&mut self, dropdown: Dropdown) -> &mut Slot {
        match dropdown {
            Dropdown::FileType => &mut self.file_type,
            Dropdown::Engine => &mut self.engine,
        }
    }

    pub fn is_open(&self, dropdown: Dropdown) -> bool {
        self.slot(dropdown).open
    }

    pub fn toggle(&mut self, dropdown: Dropdown) {
        let slot = self.slot_mut(dropdown);
        slot.open = !slot.open;
    }

    pub fn close(&mut self, dropdown: Dropdown) {
        self.slot_mut(dropdown).open = false;
    }

    pub fn close_all(&mut self) {
        self.file_type.open = false;
        self.engine.open = false;
    }

    /// Record the screen area a dropdown occupied this frame.
    pub fn set_area(&mut self, dropdown: Dropdown, area: Rect) {
        self.slot_mut(dropdown).area = Some(area);
    }

    /// Area recorded by the last `set_area`.
    #[cfg(test)]
    pub fn area(&self, dropdown: Dropdown) -> Option<Rect> {
        self.slot(dropdown).area
    }

    /// Close every dropdown whose area does not contain the press.
    pub fn dismiss_outside(&mut self, press: Pos2) {
        for slot in [&mut self.file_type, &mut self.engine] {
            if slot.open && !slot.area.is_some_and(|area| area.contains(press)) {
                slot.open = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    fn laid_out() -> DropdownState {
        let mut state = DropdownState::default();
        state.set_area(
            Dropdown::FileType,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 200.0)),
        );
        state.set_area(
            Dropdown::Engine,
            Rect::from_min_max(pos2(0.0, 250.0), pos2(100.0, 300.0)),
        );
        state
    }

    #[test]
    fn test_starts_closed() {
        let state = DropdownState::default();
        assert!(state.area(Dropdown::Engine).is_none());
        assert!(!state.is_open(Dropdown::FileType));
        assert!(!state.is_open(Dropdown::Engine));
    }

    #[test]
    fn test_toggle() {
        let mut state = DropdownState::default();
        state.toggle(Dropdown::Engine);
        assert!(state.is_open(Dropdown::Engine));
        assert!(!state.is_open(Dropdown::FileType));
        state.toggle(Dropdown::Engine);
        assert!(!state.is_open(Dropdown::Engine));
    }

    #[test]
    fn test_press_inside_keeps_open() {
        let mut state = laid_out();
        state.toggle(Dropdown::FileType);
        state.dismiss_outside(pos2(50.0, 150.0));
        assert!(state.is_open(Dropdown::FileType));
    }

    #[test]
    fn test_press_outside_closes() {
        let mut state = laid_out();
        state.toggle(Dropdown::FileType);
        state.dismiss_outside(pos2(400.0, 400.0));
        assert!(!state.is_open(Dropdown::FileType));
    }

    #[test]
    fn test_press_on_other_dropdown_closes_only_the_first() {
        let mut state = laid_out();
        state.toggle(Dropdown::FileType);
        state.toggle(Dropdown::Engine);
        state.dismiss_outside(pos2(50.0, 275.0));
        assert!(!state.is_open(Dropdown::FileType));
        assert!(state.is_open(Dropdown::Engine));
    }

    #[test]
    fn test_unknown_area_closes_on_any_press() {
        let mut state = DropdownState::default();
        state.toggle(Dropdown::Engine);
        state.dismiss_outside(pos2(0.0, 0.0));
        assert!(!state.is_open(Dropdown::Engine));
    }

    #[test]
    fn test_close_all() {
        let mut state = laid_out();
        state.toggle(Dropdown::FileType);
        state.toggle(Dropdown::Engine);
        state.close_all();
        assert!(!state.is_open(Dropdown::FileType));
        assert!(!state.is_open(Dropdown::Engine));
    }
}
