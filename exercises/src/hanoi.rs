//! Towers of Hanoi solved by recursive stack moves.

use tracing::trace;

use crate::error::{ExerciseError, Result};

/// A stack of discs, largest at the bottom. Disc `n` has size `n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tower {
    discs: Vec<u32>,
}

impl Tower {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a disc on top. Rejects a disc larger than the current top.
    pub fn push(&mut self, disc: u32) -> Result<()> {
        if let Some(&top) = self.discs.last() {
            if disc > top {
                return Err(ExerciseError::IllegalMove { disc, onto: top });
            }
        }
        self.discs.push(disc);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<u32> {
        self.discs.pop()
    }

    pub fn top(&self) -> Option<u32> {
        self.discs.last().copied()
    }

    pub fn len(&self) -> usize {
        self.discs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// Bottom to top.
    pub fn discs(&self) -> &[u32] {
        &self.discs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub disc: u32,
    pub from: usize,
    pub to: usize,
}

/// Three towers; all discs start on tower 0 and end on tower 2.
#[derive(Debug, Clone)]
pub struct Hanoi {
    towers: [Tower; 3],
    moves: Vec<Move>,
}

impl Hanoi {
    pub fn new(discs: u32) -> Self {
        let start = Tower {
            discs: (1..=discs).rev().collect(),
        };
        Self {
            towers: [start, Tower::new(), Tower::new()],
            moves: Vec::new(),
        }
    }

    /// Move the whole stack from tower 0 to tower 2 via tower 1.
    pub fn solve(&mut self) -> Result<&[Move]> {
        let n = self.towers[0].len() as u32;
        self.move_stack(0, 2, 1, n)?;
        Ok(&self.moves)
    }

    fn move_stack(&mut self, begin: usize, end: usize, temp: usize, n: u32) -> Result<()> {
        match n {
            0 => Ok(()),
            1 => self.move_disc(begin, end),
            _ => {
                self.move_stack(begin, temp, end, n - 1)?;
                self.move_disc(begin, end)?;
                self.move_stack(temp, end, begin, n - 1)
            }
        }
    }

    /// Move the top disc of `from` onto `to`. A rejected move leaves both
    /// towers as they were.
    fn move_disc(&mut self, from: usize, to: usize) -> Result<()> {
        let disc = self.towers[from]
            .top()
            .ok_or(ExerciseError::EmptyTower(from))?;
        self.towers[to].push(disc)?;
        self.towers[from].pop();
        trace!(disc, from, to, "hanoi move");
        self.moves.push(Move { disc, from, to });
        Ok(())
    }

    pub fn tower(&self, index: usize) -> Option<&Tower> {
        self.towers.get(index)
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
}

/// `2^discs - 1`.
pub fn minimum_moves(discs: u32) -> u64 {
    if discs >= 64 {
        return u64::MAX;
    }
    (1u64 << discs) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_discs() {
        let mut hanoi = Hanoi::new(3);
        let moves = hanoi.solve().unwrap().to_vec();
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], Move { disc: 1, from: 0, to: 2 });
        assert_eq!(moves[3], Move { disc: 3, from: 0, to: 2 });
        assert!(hanoi.tower(0).unwrap().is_empty());
        assert!(hanoi.tower(1).unwrap().is_empty());
        assert_eq!(hanoi.tower(2).unwrap().discs(), &[3, 2, 1]);
    }

    #[test]
    fn test_move_count_is_minimal() {
        for discs in 0..=12 {
            let mut hanoi = Hanoi::new(discs);
            assert_eq!(hanoi.solve().unwrap().len() as u64, minimum_moves(discs));
            assert_eq!(hanoi.tower(2).unwrap().len(), discs as usize);
        }
    }

    #[test]
    fn test_zero_discs() {
        let mut hanoi = Hanoi::new(0);
        assert!(hanoi.solve().unwrap().is_empty());
    }

    #[test]
    fn test_tower_rejects_larger_disc() {
        let mut tower = Tower::new();
        tower.push(2).unwrap();
        assert_eq!(tower.push(5).unwrap_err(), ExerciseError::IllegalMove { disc: 5, onto: 2 });
        assert_eq!(tower.discs(), &[2]);
    }

    #[test]
    fn test_rejected_move_keeps_every_disc() {
        let mut hanoi = Hanoi::new(2);
        hanoi.move_disc(0, 2).unwrap();
        assert_eq!(
            hanoi.move_disc(0, 2).unwrap_err(),
            ExerciseError::IllegalMove { disc: 2, onto: 1 }
        );
        assert_eq!(hanoi.tower(0).unwrap().discs(), &[2]);
        assert_eq!(hanoi.tower(2).unwrap().discs(), &[1]);
        assert_eq!(hanoi.moves().len(), 1);
    }

    #[test]
    fn test_move_from_empty_tower() {
        let mut hanoi = Hanoi::new(1);
        assert_eq!(hanoi.move_disc(1, 2).unwrap_err(), ExerciseError::EmptyTower(1));
        assert_eq!(hanoi.tower(0).unwrap().discs(), &[1]);
    }

    #[test]
    fn test_minimum_moves() {
        assert_eq!(minimum_moves(0), 0);
        assert_eq!(minimum_moves(10), 1023);
        assert_eq!(minimum_moves(64), u64::MAX);
    }
}
