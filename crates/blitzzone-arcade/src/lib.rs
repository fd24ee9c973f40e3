//! The `BlitzZone` arcade shell.
//!
//! [`Arcade`] hosts both games behind one menu, showing one at a time. Hosts
//! queue [`ArcadeEvent`]s on an [`EventQueue`] as input arrives and drain it
//! once per frame with [`Arcade::pump`]. Leaving a game resets it, so its
//! clock never runs in the background.

pub use self::{
    arcade::{Arcade, ArcadeSettings},
    event::{ArcadeEvent, ArcadeOutcome, EventQueue},
    game::GameKind,
    word_slot::WordSlot,
};

mod arcade;
mod event;
mod game;
mod word_slot;
