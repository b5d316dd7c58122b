use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Sub},
};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ByteUnits {
    units: u64,
}

impl ByteUnits {
    pub const ZERO: Self = Self { units: 0 };

    pub const fn of(value: u64) -> Self {
        Self { units: value }
    }

    pub const fn bytes(&self) -> u64 {
        self.units
    }

    /// Whether this is a whole multiple of `align`
    pub fn is_aligned_to(&self, align: ByteUnits) -> bool {
        assert_ne!(align.units, 0);
        self.units % align.units == 0
    }

    /// Bytes needed to advance this offset to the next multiple of `align`
    pub fn padding_to(&self, align: ByteUnits) -> ByteUnits {
        self.align_to(align) - *self
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BitUnits {
    units: u64,
}

impl BitUnits {
    pub const fn of(value: u64) -> Self {
        Self { units: value }
    }

    pub const fn bits(&self) -> u64 {
        self.units
    }
}

macro_rules! impl_units_from {
    ($units:ty, $ty:ty) => {
        impl From<$ty> for $units {
            fn from(value: $ty) -> Self {
                Self {
                    units: value.into(),
                }
            }
        }
    };
}

impl_units_from!(ByteUnits, u8);
impl_units_from!(ByteUnits, u16);
impl_units_from!(ByteUnits, u32);
impl_units_from!(ByteUnits, u64);

impl_units_from!(BitUnits, u8);
impl_units_from!(BitUnits, u16);
impl_units_from!(BitUnits, u32);
impl_units_from!(BitUnits, u64);

impl TryFrom<BitUnits> for ByteUnits {
    type Error = ();

    fn try_from(value: BitUnits) -> Result<Self, ()> {
        if value.bits() % 8 == 0 {
            Ok(Self {
                units: value.bits() / 8,
            })
        } else {
            Err(())
        }
    }
}

impl Display for ByteUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.units)
    }
}

impl Display for BitUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.units)
    }
}

macro_rules! impl_math_for {
    ($units:ty) => {
        impl $units {
            pub fn is_zero(&self) -> bool {
                self.units == 0
            }

            pub fn align_to(&self, align: $units) -> $units {
                let width = self.units;
                let align = align.units;

                assert_ne!(align, 0);
                assert!(align.is_power_of_two());
                Self::of((width + align - 1) & !(align - 1))
            }

            pub fn is_power_of_2(&self) -> bool {
                self.units.is_power_of_two()
            }
        }

        impl Add<$units> for $units {
            type Output = $units;

            fn add(self, rhs: $units) -> Self::Output {
                Self {
                    units: self.units + rhs.units,
                }
            }
        }

        impl AddAssign<$units> for $units {
            fn add_assign(&mut self, rhs: $units) {
                self.units += rhs.units
            }
        }

        impl Sub<$units> for $units {
            type Output = $units;

            fn sub(self, rhs: $units) -> Self::Output {
                Self {
                    units: self.units - rhs.units,
                }
            }
        }

        impl Sum for $units {
            fn sum<I: Iterator<Item = $units>>(iter: I) -> Self {
                iter.fold(Self::of(0), |total, units| total + units)
            }
        }

        impl $units {
            pub fn saturating_sub(self, rhs: $units) -> $units {
                Self::of(self.units.saturating_sub(rhs.units))
            }
        }
    };
}

impl_math_for!(ByteUnits);
impl_math_for!(BitUnits);
