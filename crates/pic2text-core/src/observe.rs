/// A value that reports whether an assignment actually changed it
///
/// Observers react to transitions, not to assignments: storing the value
/// already held is not a change.
#[derive(Debug, Default, Clone)]
pub struct Observed<T> {
    value: T,
}

impl<T: PartialEq> Observed<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Store `value`, returning `true` on a transition
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }
}
