//! Fleet arena: one player's ships, addressed by stable index.

use crate::config::{NUM_SHIPS, SHIPS};
use crate::ship::{Ship, ShipType};

/// The ships one player has placed so far, in catalog order. The index a
/// ship gets on insertion is stable and is what board cells refer back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Self {
            ships: Vec::with_capacity(NUM_SHIPS),
        }
    }

    /// Next catalog entry still waiting to be placed.
    pub fn next_unplaced(&self) -> Option<ShipType> {
        SHIPS.get(self.ships.len()).copied()
    }

    /// `true` once all five catalog ships are placed.
    pub fn is_complete(&self) -> bool {
        self.ships.len() == NUM_SHIPS
    }

    /// Add a ship, returning its stable id.
    pub(crate) fn add(&mut self, ship: Ship) -> usize {
        self.ships.push(ship);
        self.ships.len() - 1
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub(crate) fn ship_mut(&mut self, id: usize) -> &mut Ship {
        &mut self.ships[id]
    }

    /// `true` when the fleet is complete and every ship is sunk. An
    /// incomplete fleet is never destroyed.
    pub fn all_sunk(&self) -> bool {
        self.is_complete() && self.ships.iter().all(Ship::is_sunk)
    }
}
