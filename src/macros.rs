//! Macros for declaring states and static transition tables.

/// Declare a state enum and its `State` implementation.
///
/// Each variant is given a wire name, used for `Display`, logging and serde.
/// The optional `redirect:` list declares pass-through states.
///
/// # Example
///
/// ```
/// use fleet_fsm::core::State;
/// use fleet_fsm::state_enum;
///
/// state_enum! {
///     pub enum Parcel {
///         Packed => "packed",
///         Scanned => "scanned",
///         Shipped => "shipped",
///     }
///     redirect: [Scanned => Shipped]
/// }
///
/// assert_eq!(Parcel::Packed.name(), "packed");
/// assert_eq!(Parcel::Scanned.redirect(), Some(Parcel::Shipped));
/// assert_eq!(Parcel::Shipped.to_string(), "shipped");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }

        $(redirect: [$($from:ident => $to:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant
            ),*
        }

        impl $name {
            /// Every state, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),*
                }
            }

            #[allow(unreachable_patterns)]
            fn redirect(&self) -> Option<Self> {
                match self {
                    $($(Self::$from => Some(Self::$to),)*)?
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

/// Declare an event enum and its static transition table.
///
/// Each row names the event, its wire name, the allowed source states and
/// the destination state.
///
/// # Example
///
/// ```
/// use fleet_fsm::core::Event;
/// use fleet_fsm::{state_enum, transition_table};
///
/// state_enum! {
///     pub enum Door {
///         Open => "open",
///         Closed => "closed",
///         Locked => "locked",
///     }
/// }
///
/// transition_table! {
///     pub enum DoorEvent for Door {
///         Close => "close": [Open] => Closed,
///         Lock => "lock": [Closed] => Locked,
///         Open => "open": [Closed, Locked] => Open,
///     }
/// }
///
/// assert!(DoorEvent::Open.allows(&Door::Locked));
/// assert!(!DoorEvent::Lock.allows(&Door::Open));
/// assert_eq!(DoorEvent::Close.destination(), Door::Closed);
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $state:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal : [$($src:ident),+ $(,)?] => $dst:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every event, in table order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::Event for $name {
            type State = $state;

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),*
                }
            }

            fn sources(&self) -> &'static [$state] {
                match self {
                    $(Self::$variant => &[$($state::$src),+]),*
                }
            }

            fn destination(&self) -> $state {
                match self {
                    $(Self::$variant => $state::$dst),*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::core::Event::name(self))
            }
        }
    };
}
