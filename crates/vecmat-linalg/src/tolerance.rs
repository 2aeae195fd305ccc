/// Magnitude below which a candidate pivot or elimination factor counts as zero.
pub const PIVOT_EPSILON: f64 = 1e-12;

/// Magnitude below which a cofactor expansion term is skipped.
pub const COFACTOR_EPSILON: f64 = 1e-9;

/// Largest square matrix for which [`crate::determinant`] is implemented.
pub const MAX_DETERMINANT_SIZE: usize = 4;

/// Numeric tolerances used by the reduction engine.
///
/// The default reproduces [`PIVOT_EPSILON`] and [`COFACTOR_EPSILON`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReductionTolerance {
    /// Threshold for pivot selection and for skipping zero elimination factors.
    pub pivot: f64,
    /// Threshold for skipping near-zero terms of a cofactor expansion.
    pub cofactor: f64,
}

impl Default for ReductionTolerance {
    fn default() -> Self {
        Self {
            pivot: PIVOT_EPSILON,
            cofactor: COFACTOR_EPSILON,
        }
    }
}
