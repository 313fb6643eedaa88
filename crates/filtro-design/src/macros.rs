//! Declarative boilerplate for raw filters and their [`Design`](filtro_core::Design) adapters.

/// Declares a raw pole filter: a [`PoleFilterBase`](crate::pole_filter::PoleFilterBase)
/// newtype with coefficient access.
///
/// The family module adds the `setup(...)` method that picks the prototype
/// and band shape.
///
/// ```rust,ignore
/// pole_filter! {
///     /// Butterworth low-pass.
///     LowPass
/// }
///
/// impl LowPass {
///     pub fn setup(&mut self, order: usize, sample_rate: f64, cutoff: f64) -> Result<(), FilterError> {
///         self.base.setup(&Butterworth, order, sample_rate, BandShape::LowPass { cutoff })
///     }
/// }
/// ```
macro_rules! pole_filter {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            base: $crate::pole_filter::PoleFilterBase,
        }

        impl $name {
            /// Creates a passthrough filter accepting orders up to `max_order`.
            pub fn new(max_order: usize) -> Self {
                Self {
                    base: $crate::pole_filter::PoleFilterBase::new(max_order),
                }
            }

            /// Highest order `setup` accepts.
            pub fn max_order(&self) -> usize {
                self.base.max_order()
            }

            /// Pipeline state, including the intermediate layouts.
            pub fn base(&self) -> &$crate::pole_filter::PoleFilterBase {
                &self.base
            }
        }

        impl ::filtro_core::RawFilter for $name {
            fn cascade(&self) -> &::filtro_core::Cascade {
                self.base.cascade()
            }
        }
    };
}

/// Declares a [`Design`](filtro_core::Design) wrapping a raw filter.
///
/// `params(this)` binds the raw filter while the parameter table is built,
/// so entries can depend on it (e.g. the order range). `apply(params)`
/// receives the checked [`Params`](filtro_core::Params) with the raw filter
/// bound mutably to the same name.
///
/// ```rust,ignore
/// design_class! {
///     /// Butterworth low-pass.
///     LowPass(super::LowPass) {
///         new(max_order: usize) => super::LowPass::new(max_order),
///         kind: Kind::LowPass,
///         name: "Butterworth Low Pass",
///         params(this): [
///             ParamInfo::sample_rate(),
///             ParamInfo::order(this.max_order()),
///             ParamInfo::frequency(),
///         ],
///         apply(params) {
///             this.setup(params.order(1)?, params.sample_rate(), params[2])
///         }
///     }
/// }
/// ```
macro_rules! design_class {
    (
        $(#[$meta:meta])*
        $name:ident($raw:ty) {
            new($($arg:ident: $arg_ty:ty),*) => $ctor:expr,
            kind: $kind:expr,
            name: $label:expr,
            params($this:ident): [$($info:expr),+ $(,)?],
            apply($params:ident) $apply:block
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            filter: $raw,
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            /// Creates the design. Defaults are applied once it is wrapped in a filter.
            pub fn new($($arg: $arg_ty),*) -> Self {
                Self { filter: $ctor }
            }

            /// The wrapped raw filter.
            pub fn filter(&self) -> &$raw {
                &self.filter
            }
        }

        impl ::filtro_core::Design for $name {
            fn kind(&self) -> ::filtro_core::Kind {
                $kind
            }

            fn name(&self) -> &'static str {
                $label
            }

            fn num_params(&self) -> usize {
                [$(stringify!($info)),+].len()
            }

            fn param_info(&self, index: usize) -> Option<::filtro_core::ParamInfo> {
                #[allow(unused_variables)]
                let $this = &self.filter;
                [$($info),+].get(index).copied()
            }

            fn apply_params(
                &mut self,
                $params: &::filtro_core::Params,
            ) -> Result<(), ::filtro_core::FilterError> {
                let $this = &mut self.filter;
                $apply
            }

            fn cascade(&self) -> &::filtro_core::Cascade {
                ::filtro_core::RawFilter::cascade(&self.filter)
            }
        }
    };
}
