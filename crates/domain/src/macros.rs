//! Macro for implementing label conversions on closed vocabulary enums
//!
//! Levers, horizons, grades, tiers and range options all have a fixed display
//! label that doubles as the accepted input spelling. This macro generates the
//! label table once.
//!
//! # Example
//!
//! ```rust
//! use autooptix_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Priority {
//!     P1,
//!     P2,
//! }
//!
//! impl_label_conversions!(Priority {
//!     P1 => "P1",
//!     P2 => "P2",
//! });
//!
//! assert_eq!(Priority::P1.to_string(), "P1");
//! assert_eq!(" p2 ".parse::<Priority>(), Ok(Priority::P2));
//! ```

/// Implements `as_str`, `ALL`, `Display` and `FromStr` for a label enum
///
/// Parsing trims surrounding whitespace and compares ASCII
/// case-insensitively, so `"l1.5"`, `"L1.5"` and `" L1.5 "` all resolve to
/// the same variant. `ALL` lists the variants in declaration order.
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$($enum_name::$variant),+];

            /// Display label of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($label) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
