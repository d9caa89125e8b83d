/// A region of source text, using 1-based lines and columns.
///
/// Both ends are inclusive: `last_column` is the column of the last character
/// covered by the node, matching how the parser reports node extents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location {
    pub first_line: usize,
    pub first_column: usize,
    pub last_line: usize,
    pub last_column: usize,
}

impl Location {
    pub fn new(first_line: usize, first_column: usize, last_line: usize, last_column: usize) -> Self {
        Self {
            first_line,
            first_column,
            last_line,
            last_column,
        }
    }

    /// A location covering a single line.
    pub fn on_line(line: usize, first_column: usize, last_column: usize) -> Self {
        Self::new(line, first_column, line, last_column)
    }

    /// Returns the smallest location covering both `self` and `other`.
    pub fn merge(&self, other: &Location) -> Location {
        let (first_line, first_column) = std::cmp::min(
            (self.first_line, self.first_column),
            (other.first_line, other.first_column),
        );
        let (last_line, last_column) = std::cmp::max(
            (self.last_line, self.last_column),
            (other.last_line, other.last_column),
        );
        Location::new(first_line, first_column, last_line, last_column)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}-{}:{}", self.first_line, self.first_column, self.last_line, self.last_column)
    }
}

pub trait Locatable {
    fn location(&self) -> Location;
}

impl<T: Locatable> Locatable for Box<T> {
    fn location(&self) -> Location {
        (**self).location()
    }
}
