/// Event emitted by the discharge runner once per time step.
///
/// Each event describes the field before that step's diffusion update,
/// together with the voltage evaluated on it. Step 0 is the seeded field.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Number of diffusion updates applied so far.
    pub step: usize,

    /// Arithmetic mean occupancy of the field.
    pub mean_soc: f64,

    /// Occupancy at the surface node.
    pub surface_soc: f64,

    /// Cell voltage, in volts.
    pub voltage: f64,

    /// Concentration field as occupancy fractions, center first.
    pub field: &'a [f64],
}
