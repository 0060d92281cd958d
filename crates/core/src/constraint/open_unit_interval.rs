use std::cmp::Ordering;

use num_traits::{One, Zero};

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value lies in the open unit interval: `0 < x < 1`.
///
/// Site occupancies evaluated by the analytic potential must stay inside this
/// interval, since both endpoints make `ln((1 − x)/x)` infinite.
///
/// # Examples
///
/// ```
/// use galva_core::constraint::OpenUnitInterval;
///
/// let soc = OpenUnitInterval::new(0.5).unwrap();
/// assert_eq!(soc.into_inner(), 0.5);
///
/// assert!(OpenUnitInterval::new(0.0).is_err());
/// assert!(OpenUnitInterval::new(1.0).is_err());
/// assert!(OpenUnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OpenUnitInterval;

impl OpenUnitInterval {
    /// Constructs `Constrained<T, OpenUnitInterval>` if `0 < value < 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + Zero + One>(
        value: T,
    ) -> Result<Constrained<T, OpenUnitInterval>, ConstraintError> {
        Constrained::<T, OpenUnitInterval>::new(value)
    }

    /// Returns true if `value` lies strictly between zero and one.
    #[must_use]
    pub fn contains<T: PartialOrd + Zero + One>(value: &T) -> bool {
        <Self as Constraint<T>>::check(value).is_ok()
    }
}

impl<T: PartialOrd + Zero + One> Constraint<T> for OpenUnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater | Ordering::Equal)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
