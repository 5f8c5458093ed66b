/// Outcome of evaluating one cell for the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Killed by the delayed density draw; neighbors are not inspected.
    Extinction,
    /// Fewer than two live neighbors.
    UnderPopulation,
    /// Live cell with two, three or four live neighbors.
    Survival,
    /// More than four live neighbors, live or dead.
    OverPopulation,
    /// Dead cell with exactly three live neighbors.
    Birth,
    /// Dead cell with 0, 1, 2 or 4 live neighbors.
    StaysDead,
}

impl Transition {
    /// Applies the modified Life rule to a cell that escaped extinction.
    /// Cases are checked in order and the first match wins.
    #[inline(always)]
    pub fn classify(alive: bool, live_neighbors: usize) -> Self {
        match live_neighbors {
            n if n < 2 => Transition::UnderPopulation,
            2..=4 if alive => Transition::Survival,
            n if n > 4 => Transition::OverPopulation,
            3 => Transition::Birth,
            _ => Transition::StaysDead,
        }
    }

    #[inline(always)]
    pub fn is_alive(self) -> bool {
        matches!(self, Transition::Survival | Transition::Birth)
    }
}
