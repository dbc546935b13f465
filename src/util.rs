use std::fmt;

/// One of the two child slots of a `Node`, or the direction of a rotation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The left child / a left rotation.
    Left,
    /// The right child / a right rotation.
    Right,
}

impl Side {
    /// The other side. A rotation in one direction pivots on the child on the opposite side.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}
