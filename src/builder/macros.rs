//! Macros for generating `State` and `Event` implementations for enums.

/// Generate a `State` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use cascade::state_enum;
///
/// state_enum! {
///     pub enum Phase {
///         Idle,
///         Active,
///     }
/// }
///
/// use cascade::State;
/// assert_eq!(Phase::Active.name(), "Active");
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
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an `Event` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use cascade::event_enum;
///
/// event_enum! {
///     pub enum Signal {
///         Go,
///         Stop,
///     }
/// }
///
/// use cascade::Event;
/// assert_eq!(Signal::Go.name(), "Go");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
