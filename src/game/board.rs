// src/game/board.rs

use std::fmt;
use std::ops::RangeInclusive;

use crate::constants::{BOTTOM_STORE, NUM_SLOTS, STONES_PER_PIT, TOP_STORE};

/// One of the two sides of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Bottom,
    Top,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Bottom => Side::Top,
            Side::Top => Side::Bottom,
        }
    }

    /// Index of this side's store.
    pub fn store(self) -> usize {
        match self {
            Side::Bottom => BOTTOM_STORE,
            Side::Top => TOP_STORE,
        }
    }

    /// The sowable pits this side owns, in ascending index order.
    pub fn pits(self) -> RangeInclusive<usize> {
        match self {
            Side::Bottom => 0..=5,
            Side::Top => 7..=12,
        }
    }

    pub fn owns_pit(self, pit: usize) -> bool {
        self.pits().contains(&pit)
    }
}

/// A Kalah board: twelve sowable pits and two stores, indexed
/// counter-clockwise. Pits 0-5 and store 6 belong to Bottom, pits 7-12 and
/// store 13 to Top.
///
/// Cloning produces a fully independent board, which is how the search
/// explores branches without touching the caller's state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pits: [u8; NUM_SLOTS],
    turn: Side,
}

impl Board {
    /// Standard starting position: four stones in every pit, empty stores.
    pub fn new(first_mover: Side) -> Self {
        let mut pits = [STONES_PER_PIT; NUM_SLOTS];
        pits[BOTTOM_STORE] = 0;
        pits[TOP_STORE] = 0;
        Self {
            pits,
            turn: first_mover,
        }
    }

    /// Arbitrary position, mainly for tests and analysis.
    pub fn from_pits(pits: [u8; NUM_SLOTS], turn: Side) -> Self {
        Self { pits, turn }
    }

    pub fn stones_at(&self, pit: usize) -> u8 {
        self.pits[pit]
    }

    pub fn whose_move(&self) -> Side {
        self.turn
    }

    /// Stones banked in Top's store.
    pub fn score_top(&self) -> i32 {
        i32::from(self.pits[TOP_STORE])
    }

    /// Stones banked in Bottom's store.
    pub fn score_bottom(&self) -> i32 {
        i32::from(self.pits[BOTTOM_STORE])
    }

    /// A move is legal when the pit belongs to the side to move and holds at
    /// least one stone.
    pub fn legal_move(&self, pit: usize) -> bool {
        self.turn.owns_pit(pit) && self.pits[pit] > 0
    }

    /// Legal moves for the side to move, lowest pit first.
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        self.turn.pits().filter(move |&pit| self.pits[pit] > 0)
    }

    /// The pit directly across the board.
    pub fn opposite(pit: usize) -> usize {
        12 - pit
    }

    fn next_slot(slot: usize, side: Side) -> usize {
        let next = (slot + 1) % NUM_SLOTS;
        if next == side.opponent().store() {
            (next + 1) % NUM_SLOTS
        } else {
            next
        }
    }

    /// Slot where the last stone of a sow from `pit` would land, without
    /// touching the board. Used by the evaluation heuristics.
    pub fn sow_destination(&self, pit: usize) -> usize {
        let mut slot = pit;
        for _ in 0..self.pits[pit] {
            slot = Self::next_slot(slot, self.turn);
        }
        slot
    }

    /// Sow the stones from `pit`: one per slot counter-clockwise, skipping
    /// the opponent's store. Applies the capture and go-again rules, advances
    /// the turn, and sweeps both rows once either row is exhausted. Returns
    /// `false` if the move is illegal for the side to move.
    pub fn make_move(&mut self, pit: usize) -> bool {
        if !self.legal_move(pit) {
            return false;
        }

        let side = self.turn;
        let mut stones = self.pits[pit];
        self.pits[pit] = 0;
        let mut slot = pit;
        while stones > 0 {
            slot = Self::next_slot(slot, side);
            self.pits[slot] += 1;
            stones -= 1;
        }

        let go_again = slot == side.store();

        // Landing alone in an own-row pit captures it together with its
        // mirror, when the mirror has anything to take.
        if !go_again && side.owns_pit(slot) && self.pits[slot] == 1 {
            let mirror = Self::opposite(slot);
            if self.pits[mirror] > 0 {
                self.pits[side.store()] += self.pits[slot] + self.pits[mirror];
                self.pits[slot] = 0;
                self.pits[mirror] = 0;
            }
        }

        if !go_again {
            self.turn = side.opponent();
        }

        if self.row_empty(Side::Bottom) || self.row_empty(Side::Top) {
            self.sweep();
        }

        true
    }

    /// The game ends once either row has no stones left to sow.
    pub fn game_over(&self) -> bool {
        self.row_empty(Side::Bottom) || self.row_empty(Side::Top)
    }

    fn row_empty(&self, side: Side) -> bool {
        side.pits().all(|pit| self.pits[pit] == 0)
    }

    /// Bank every remaining row stone into its owner's store.
    fn sweep(&mut self) {
        for side in [Side::Bottom, Side::Top] {
            for pit in side.pits() {
                self.pits[side.store()] += self.pits[pit];
                self.pits[pit] = 0;
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T({})", self.pits[TOP_STORE])?;
        for pit in Side::Top.pits().rev() {
            write!(f, " {}", self.pits[pit])?;
        }
        write!(f, " / ")?;
        for pit in Side::Bottom.pits() {
            write!(f, "{} ", self.pits[pit])?;
        }
        write!(f, "B({}) {:?} to move", self.pits[BOTTOM_STORE], self.turn)
    }
}
