//! Immutable seed patterns stamped onto a dead grid.

use life_core::CellState;

/// A fixed pattern described as rows of `'O'` (alive) and `'.'` (dead).
///
/// Patterns are data, not behavior: process-wide constants used only as
/// stamps during seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    name: &'static str,
    rows: &'static [&'static str],
}

impl Pattern {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    /// Cell state at (row, col) within the pattern
    pub fn get(&self, row: usize, col: usize) -> CellState {
        if self.rows[row].as_bytes()[col] == b'O' {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }

    /// Number of alive cells in the pattern
    pub fn population(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.bytes())
            .filter(|&b| b == b'O')
            .count()
    }

    /// Look up a pattern by its configuration name
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        ALL.iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
            .copied()
    }
}

/// Every pattern known to config-driven seeding
pub const ALL: [&Pattern; 2] = [&GLIDER, &GOSPER_GLIDER_GUN];

/// The 5-cell glider: translates one cell diagonally every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    rows: &["..O", "O.O", ".OO"],
};

/// Gosper's glider gun: emits a fresh glider every 30 generations.
pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "gosper-glider-gun",
    rows: &[
        "........................O...........",
        "......................O.O...........",
        "............OO......OO............OO",
        "...........O...O....OO............OO",
        "OO........O.....O...OO..............",
        "OO........O...O.OO....O.O...........",
        "..........O.....O.......O...........",
        "...........O...O....................",
        "............OO......................",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_shape() {
        assert_eq!(GLIDER.rows(), 3);
        assert_eq!(GLIDER.cols(), 3);
        assert_eq!(GLIDER.population(), 5);

        let alive = [(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)];
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(GLIDER.get(r, c).is_alive(), alive.contains(&(r, c)));
            }
        }
    }

    #[test]
    fn test_gosper_gun_shape() {
        assert_eq!(GOSPER_GLIDER_GUN.rows(), 9);
        assert_eq!(GOSPER_GLIDER_GUN.cols(), 36);
        assert_eq!(GOSPER_GLIDER_GUN.population(), 36);

        // Every row of the gun contributes at least one live cell
        for row in 0..GOSPER_GLIDER_GUN.rows() {
            let mut cells = 0;
            for col in 0..GOSPER_GLIDER_GUN.cols() {
                if GOSPER_GLIDER_GUN.get(row, col).is_alive() {
                    cells += 1;
                }
            }
            assert!(cells > 0, "row {} of the gun is empty", row);
        }
    }

    #[test]
    fn test_pattern_lookup() {
        assert_eq!(Pattern::by_name("glider"), Some(&GLIDER));
        assert_eq!(Pattern::by_name("GLIDER"), Some(&GLIDER));
        assert_eq!(
            Pattern::by_name("gosper-glider-gun"),
            Some(&GOSPER_GLIDER_GUN)
        );
        assert_eq!(Pattern::by_name("pulsar"), None);
    }
}
