//! Macros for declaring phase enums.

/// Generate a `State` implementation for a fieldless enum.
///
/// # Example
///
/// ```
/// use traffic_lights::state_enum;
/// use traffic_lights::core::State;
///
/// state_enum! {
///     pub enum Handshake {
///         Hello,
///         Negotiating,
///         Established,
///     }
///     final: [Established]
/// }
///
/// assert_eq!(Handshake::Negotiating.name(), "Negotiating");
/// assert!(Handshake::Established.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
