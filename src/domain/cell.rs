/// State of one square of the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        match self {
            Cell::Alive => true,
            Cell::Dead => false,
        }
    }

    /// Opposite state, used for a discrete click
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// State in the next generation given `neighbors` live cells around it (B3/S23).
    /// Three neighbors always yields life; two only keeps an already live cell.
    pub const fn evolve(self, neighbors: u8) -> Self {
        let survives = self.is_alive() && neighbors == 2;
        if survives || neighbors == 3 {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
