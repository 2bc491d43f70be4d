use std::fmt::Display;

/// One line of an edit script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    /// present only in the old version
    Delete { value: T },
    /// present only in the new version
    Insert { value: T },
    /// present in both
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }

    pub fn tag(&self) -> char {
        match self {
            Edit::Delete { .. } => '-',
            Edit::Insert { .. } => '+',
            Edit::Equal { .. } => ' ',
        }
    }
}

impl<T> Display for Edit<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.tag(), self.value())
    }
}
