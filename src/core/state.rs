//! Core traits describing states and the events that move between them.
//!
//! The engine in [`crate::machine`] is generic over these traits; the
//! vehicle lifecycle is one instantiation of them.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Trait for state machine states.
///
/// States are small `Copy` values. Exactly one is active per machine.
///
/// # Example
///
/// ```rust
/// use fleet_fsm::core::State;
/// use serde::{Deserialize, Serialize};
/// use std::fmt;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl fmt::Display for Door {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(self.name())
///     }
/// }
///
/// impl State for Door {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "open",
///             Self::Closed => "closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "open");
/// assert!(Door::Closed.redirect().is_none());
/// ```
pub trait State:
    Copy + Eq + Debug + Display + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Stable name used for display, logging and serialization.
    fn name(&self) -> &'static str;

    /// State the machine moves to immediately after entering this one.
    ///
    /// Returning `Some` makes this state a pass-through: the engine enters
    /// it, runs the entry hook, then forces the redirect target. Redirect
    /// chains must terminate.
    ///
    /// Default implementation returns `None`.
    fn redirect(&self) -> Option<Self> {
        None
    }
}

/// A named transition with a static set of allowed source states.
///
/// Implementations are lookup tables: `sources` and `destination` must be
/// pure and must not depend on anything but `self`.
pub trait Event: Copy + Eq + Debug + Display + Send + Sync + 'static {
    /// State type this event operates on.
    type State: State;

    /// Stable name used for display and logging.
    fn name(&self) -> &'static str;

    /// States from which this event may fire.
    fn sources(&self) -> &'static [Self::State];

    /// State entered when this event fires.
    fn destination(&self) -> Self::State;

    /// Check whether this event may fire from `state`.
    fn allows(&self, state: &Self::State) -> bool {
        self.sources().contains(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum Light {
        Green,
        Amber,
        Red,
    }

    impl fmt::Display for Light {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name())
        }
    }

    impl State for Light {
        fn name(&self) -> &'static str {
            match self {
                Self::Green => "green",
                Self::Amber => "amber",
                Self::Red => "red",
            }
        }

        fn redirect(&self) -> Option<Self> {
            matches!(self, Self::Amber).then_some(Self::Red)
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Signal {
        Stop,
        Go,
    }

    impl fmt::Display for Signal {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name())
        }
    }

    impl Event for Signal {
        type State = Light;

        fn name(&self) -> &'static str {
            match self {
                Self::Stop => "stop",
                Self::Go => "go",
            }
        }

        fn sources(&self) -> &'static [Light] {
            match self {
                Self::Stop => &[Light::Green],
                Self::Go => &[Light::Red, Light::Amber],
            }
        }

        fn destination(&self) -> Light {
            match self {
                Self::Stop => Light::Amber,
                Self::Go => Light::Green,
            }
        }
    }

    #[test]
    fn default_redirect_is_none() {
        #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Only;

        impl fmt::Display for Only {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("only")
            }
        }

        impl State for Only {
            fn name(&self) -> &'static str {
                "only"
            }
        }

        assert!(Only.redirect().is_none());
    }

    #[test]
    fn redirect_is_declared_per_state() {
        assert_eq!(Light::Amber.redirect(), Some(Light::Red));
        assert_eq!(Light::Green.redirect(), None);
        assert_eq!(Light::Red.redirect(), None);
    }

    #[test]
    fn allows_checks_source_membership() {
        assert!(Signal::Stop.allows(&Light::Green));
        assert!(!Signal::Stop.allows(&Light::Red));
        assert!(Signal::Go.allows(&Light::Red));
        assert!(Signal::Go.allows(&Light::Amber));
        assert!(!Signal::Go.allows(&Light::Green));
    }
}
