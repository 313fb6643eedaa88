use filtro_core::{FilterError, PoleZeroLayout};

use super::AnalogPrototype;

/// Identity prototype: copies a caller-built analog layout.
///
/// The order argument of [`design`](AnalogPrototype::design) is ignored; the
/// layout's own pole count is the prototype order.
#[derive(Debug, Clone, Copy)]
pub struct CustomPrototype<'a>(pub &'a PoleZeroLayout);

impl AnalogPrototype for CustomPrototype<'_> {
    fn validate(&self) -> Result<(), FilterError> {
        if self.0.is_empty() || !self.0.is_finite() {
            return Err(FilterError::InvalidParameter {
                name: "layout",
                value: self.0.num_poles() as f64,
            });
        }
        Ok(())
    }

    fn design(&self, _order: usize, layout: &mut PoleZeroLayout) {
        layout.copy_from(self.0);
    }
}
