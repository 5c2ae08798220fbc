//! Component interfaces
//!
//! Each control component in `sim_exec` shall implement all the items in
//! this module.

// ---------------------------------------------------------------------------
// COMPONENT
// ---------------------------------------------------------------------------

/// A cyclic control component.
///
/// Components never fail during cyclic processing: any out of range input is
/// clamped to its valid domain rather than reported.
pub trait Component {
    /// Parameters required during initialisation.
    type Params;

    /// The shared signal storage the component reads from and writes to.
    type Signals;

    /// Initialise the component.
    ///
    /// Resets any state owned by the component and installs the given
    /// parameters. May be called again to restart the component.
    fn init(&mut self, params: Self::Params);

    /// Main component processing function.
    ///
    /// # Inputs
    /// - `signals`: The signals the component consumes and produces.
    /// - `dt_s`: The period of the rate class the component runs in.
    fn step(&mut self, signals: &mut Self::Signals, dt_s: f64);

    /// Identification string for this component's implementation.
    fn version(&self) -> &'static str;
}
