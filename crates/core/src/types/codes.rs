//! Integer-coded enumerations used by the catalogue API.
//!
//! Every enum is dense over `1..=N` and reserves `Unknown = -1`.
//!
//! [`Colour`], [`Pickup`] and [`BodyShape`] decode forgivingly: any code
//! outside their range becomes `Unknown`, so a new upstream code never
//! breaks a product page. [`OrderStatus`] shares the same shape, but the
//! order decoder only accepts it through [`OrderStatus::try_from_code`] and
//! rejects unknown codes.

use core::fmt;

use serde::Serialize;

/// Defines an integer-coded enum with an `Unknown` sentinel.
///
/// Generates `try_from_code`, `from_code`, `code`, `label`, `ALL` and
/// `Display`.
macro_rules! define_codes {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Code outside the known range.
            Unknown,
        }

        impl $name {
            /// Every named value, in code order. Excludes `Unknown`.
            pub const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            /// Map a code to its named value, or `None` if out of range.
            #[must_use]
            pub const fn try_from_code(code: i64) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Map a code to its named value, falling back to `Unknown`.
            #[must_use]
            pub const fn from_code(code: i64) -> Self {
                match Self::try_from_code(code) {
                    Some(value) => value,
                    None => Self::Unknown,
                }
            }

            /// The upstream code. `Unknown` is `-1`.
            #[must_use]
            pub const fn code(self) -> i64 {
                match self {
                    $( Self::$variant => $code, )+
                    Self::Unknown => -1,
                }
            }

            /// Human-readable label for display.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                    Self::Unknown => "Unknown",
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

define_codes! {
    /// Product finish colour.
    Colour {
        Red = 1 => "Red",
        Orange = 2 => "Orange",
        Yellow = 3 => "Yellow",
        Green = 4 => "Green",
        Blue = 5 => "Blue",
        Purple = 6 => "Purple",
        Pink = 7 => "Pink",
        Brown = 8 => "Brown",
        Gold = 9 => "Gold",
        Silver = 10 => "Silver",
        Grey = 11 => "Grey",
        Black = 12 => "Black",
        White = 13 => "White",
        Natural = 14 => "Natural",
        Multicolor = 15 => "Multicolour",
    }
}

define_codes! {
    /// Pickup configuration (S = single coil, H = humbucker).
    #[allow(clippy::upper_case_acronyms)]
    Pickup {
        ElectroAcoustic = 1 => "Electro-acoustic",
        SS = 2 => "SS",
        SSS = 3 => "SSS",
        HH = 4 => "HH",
        HHH = 5 => "HHH",
        HS = 6 => "HS",
        HSS = 7 => "HSS",
        HSH = 8 => "HSH",
        P90 = 9 => "P90",
        S = 10 => "S",
        H = 11 => "H",
    }
}

define_codes! {
    /// Body shape, including amplifier form factors.
    BodyShape {
        SStyle = 1 => "S-style",
        TStyle = 2 => "T-style",
        DoubleCut = 3 => "Double cut",
        Offset = 4 => "Offset",
        HollowBody = 5 => "Hollow body",
        VStyle = 6 => "V-style",
        SmallBody = 7 => "Small body",
        Orchestral = 8 => "Orchestral",
        GrandAuditorium = 9 => "Grand auditorium",
        Dreadnought = 10 => "Dreadnought",
        Jumbo = 11 => "Jumbo",
        Explorer = 12 => "Explorer",
        SingleCut = 13 => "Single cut",
        Combo = 14 => "Combo",
        Head = 15 => "Head",
        Cabinet = 16 => "Cabinet",
    }
}

define_codes! {
    /// Order lifecycle status.
    OrderStatus {
        Placed = 1 => "Placed",
        Dispatched = 2 => "Dispatched",
        Delivering = 3 => "Delivering",
        Delivered = 4 => "Delivered",
        Completed = 5 => "Completed",
        Cancelled = 6 => "Cancelled",
    }
}
