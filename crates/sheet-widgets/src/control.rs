#![forbid(unsafe_code)]

//! Imperative control surface.
//!
//! Every operation animates with the timing curve and records the new
//! settled position before returning.
//!
//! | call | settled before | animates to | settled after |
//! |---|---|---|---|
//! | `first_position()` | any | peek | peek |
//! | `second_position(true)` | open | closed | closed |
//! | `second_position(_)` | otherwise | open | open |
//! | `close(true)` | closed | peek | **open** |
//! | `close(_)` | otherwise | closed | closed |
//!
//! `close(true)` from closed records open while animating to peek. Hosts
//! relying on that toggle see the next `second_position(true)` close the
//! sheet from peek.

use crate::driver::AnimationDriver;
use crate::position::SheetPosition;
use crate::sheet::BottomSheet;

/// Programmatic transitions exposed to the owner of a sheet.
pub trait SheetControl {
    /// Animate to peek.
    fn first_position(&mut self);

    /// Animate to open; with `validate` and the sheet settled open, close
    /// it instead.
    fn second_position(&mut self, validate: bool);

    /// Animate to closed; with `validate` and the sheet settled closed,
    /// bring it back up instead.
    fn close(&mut self, validate: bool);
}

impl<D: AnimationDriver> SheetControl for BottomSheet<D> {
    fn first_position(&mut self) {
        let peek = self.layout().peek_offset();
        self.transition("first_position", peek, SheetPosition::Peek);
    }

    fn second_position(&mut self, validate: bool) {
        if validate && self.settled() == SheetPosition::Open {
            let closed = self.layout().closed_offset();
            self.transition("second_position", closed, SheetPosition::Closed);
            return;
        }
        self.transition("second_position", 0.0, SheetPosition::Open);
    }

    fn close(&mut self, validate: bool) {
        if validate && self.settled() == SheetPosition::Closed {
            // Offset and settled position disagree until the next transition.
            let peek = self.layout().peek_offset();
            self.transition("close", peek, SheetPosition::Open);
            return;
        }
        let closed = self.layout().closed_offset();
        self.transition("close", closed, SheetPosition::Closed);
    }
}

impl<C: SheetControl + ?Sized> SheetControl for &mut C {
    fn first_position(&mut self) {
        (**self).first_position();
    }

    fn second_position(&mut self, validate: bool) {
        (**self).second_position(validate);
    }

    fn close(&mut self, validate: bool) {
        (**self).close(validate);
    }
}
