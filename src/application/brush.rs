use super::Simulation;
use crate::domain::Result;

/// Brush tracks one pointer gesture over the board.
/// Press toggles the cell under the pointer; dragging into other cells paints them alive.
#[derive(Debug, Default)]
pub struct Brush {
    last_cell: Option<(i32, i32)>,
}

impl Brush {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.last_cell.is_some()
    }

    /// Button went down over `cell`
    pub fn press(&mut self, sim: &mut Simulation, cell: (i32, i32)) -> Result<()> {
        sim.toggle(cell.0, cell.1)?;
        self.last_cell = Some(cell);
        Ok(())
    }

    /// Pointer moved with the button held. Re-entering the pressed cell
    /// only paints once the gesture has left it.
    pub fn drag(&mut self, sim: &mut Simulation, cell: (i32, i32)) -> Result<()> {
        if !self.is_active() || self.last_cell == Some(cell) {
            return Ok(());
        }
        sim.paint(cell.0, cell.1)?;
        self.last_cell = Some(cell);
        Ok(())
    }

    /// Button released or pointer left the board
    pub fn release(&mut self) {
        self.last_cell = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LifeConfig;

    fn simulation() -> Simulation {
        Simulation::new(&LifeConfig::default()).unwrap()
    }

    #[test]
    fn test_click_toggles() {
        let mut sim = simulation();
        let mut brush = Brush::new();
        brush.press(&mut sim, (3, 4)).unwrap();
        brush.release();
        assert_eq!(sim.engine().is_alive(3, 4), Ok(true));

        brush.press(&mut sim, (3, 4)).unwrap();
        brush.release();
        assert_eq!(sim.engine().is_alive(3, 4), Ok(false));
    }

    #[test]
    fn test_drag_paints_alive_without_toggling() {
        let mut sim = simulation();
        sim.paint(0, 2).unwrap();

        let mut brush = Brush::new();
        brush.press(&mut sim, (0, 0)).unwrap();
        brush.drag(&mut sim, (0, 0)).unwrap();
        brush.drag(&mut sim, (0, 1)).unwrap();
        brush.drag(&mut sim, (0, 2)).unwrap();
        brush.drag(&mut sim, (0, 2)).unwrap();
        brush.release();

        let engine = sim.engine();
        assert_eq!(engine.is_alive(0, 0), Ok(true));
        assert_eq!(engine.is_alive(0, 1), Ok(true));
        assert_eq!(engine.is_alive(0, 2), Ok(true));
        assert_eq!(engine.population(), 3);
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut sim = simulation();
        let mut brush = Brush::new();
        brush.drag(&mut sim, (5, 5)).unwrap();
        assert_eq!(sim.engine().population(), 0);
        assert!(!brush.is_active());
    }

    #[test]
    fn test_off_board_press_is_an_error() {
        let mut sim = simulation();
        let mut brush = Brush::new();
        assert!(brush.press(&mut sim, (36, 0)).is_err());
        assert!(!brush.is_active());
    }
}
