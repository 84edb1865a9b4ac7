/// Hook run on the candidate selection before a submit is accepted.
///
/// `Err(message)` keeps the prompt active and shows `message` below the grid.
pub type Validator<V> = Box<dyn Fn(&[V]) -> Result<(), String> + Send>;

/// Accepts every selection, including an empty one.
pub fn accept_all<V>() -> Validator<V> {
    Box::new(|_| Ok(()))
}

/// Bounds on how many rows may be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionRules {
    pub min_selected: Option<usize>,
    pub max_selected: Option<usize>,
}

impl SelectionRules {
    pub fn is_unbounded(&self) -> bool {
        self.min_selected.is_none() && self.max_selected.is_none()
    }

    pub fn check<V>(&self, selection: &[V]) -> Result<(), String> {
        let count = selection.len();
        if let Some(min) = self.min_selected {
            if count < min {
                return Err(format!("Select at least {} row(s)", min));
            }
        }
        if let Some(max) = self.max_selected {
            if count > max {
                return Err(format!("Select at most {} row(s)", max));
            }
        }
        Ok(())
    }

    pub fn into_validator<V>(self) -> Validator<V> {
        Box::new(move |selection: &[V]| self.check(selection))
    }
}
