//! Three-way comparison over a fixed triple of signed integers.
use num_traits::{PrimInt, Signed};

/// Slot of a [`Triple`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    A,
    B,
    C,
}

/// Three signed integers compared once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: PrimInt + Signed> Triple<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// Read the value stored at `position`.
    pub fn get(&self, position: Position) -> T {
        match position {
            Position::A => self.a,
            Position::B => self.b,
            Position::C => self.c,
        }
    }

    /// Select the slot holding the maximum.
    ///
    /// `a` is the initial candidate. When `b` beats it, `b` and `c` are
    /// compared and a tie between them goes to `c`. Otherwise `c` only wins
    /// if it is strictly greater than `a`, so every tie involving `a` keeps `a`.
    pub fn winner(&self) -> Position {
        if self.a < self.b {
            if self.b > self.c {
                Position::B
            } else {
                Position::C
            }
        } else if self.a < self.c {
            Position::C
        } else {
            Position::A
        }
    }

    /// The greatest of the three values.
    pub fn largest(&self) -> T {
        self.get(self.winner())
    }
}

impl<T> From<[T; 3]> for Triple<T> {
    fn from([a, b, c]: [T; 3]) -> Self {
        Self { a, b, c }
    }
}

/// Return the largest of `a`, `b` and `c`.
pub fn largest_of<T: PrimInt + Signed>(a: T, b: T, c: T) -> T {
    Triple::new(a, b, c).largest()
}
