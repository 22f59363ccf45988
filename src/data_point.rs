use core::fmt::{Display, Formatter};

/// A labelled record with a numeric priority. Lower values are more urgent.
///
/// Queues order records by `priority` alone; the label is carried along
/// untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub priority: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, priority: f64) -> Self {
        Self {
            label: label.into(),
            priority,
        }
    }
}

impl Display for DataPoint {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "{{{}, {}}}", self.label, self.priority)
    }
}
