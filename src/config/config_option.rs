/// A bounded configuration option.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Whether the value is within [min, max].
    ///
    /// Incomparable values (e.g. NaN) are not within bounds.
    pub fn within_bounds(&self) -> bool {
        self.min <= self.value && self.value <= self.max
    }
}
