//! Physical dimensions
//!
//! A dimension is a vector of exponents over the base quantities the
//! catalog needs (length, mass, time, temperature). Two units are
//! compatible exactly when their dimensions are equal.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    /// Exponents of [L, M, T, Θ]
    exponents: [i8; 4],
}

impl Dimension {
    pub const LENGTH: Dimension = Dimension::base(0);
    pub const MASS: Dimension = Dimension::base(1);
    pub const TIME: Dimension = Dimension::base(2);
    pub const TEMPERATURE: Dimension = Dimension::base(3);

    pub const VELOCITY: Dimension = Self::LENGTH.per(Self::TIME);
    pub const FORCE: Dimension = Self::MASS.times(Self::VELOCITY).per(Self::TIME);
    pub const ENERGY: Dimension = Self::FORCE.times(Self::LENGTH);
    pub const POWER: Dimension = Self::ENERGY.per(Self::TIME);
    pub const PRESSURE: Dimension = Self::FORCE.per(Self::LENGTH).per(Self::LENGTH);
    pub const VOLUME: Dimension = Self::LENGTH.times(Self::LENGTH).times(Self::LENGTH);

    const fn base(index: usize) -> Dimension {
        let mut exponents = [0; 4];
        exponents[index] = 1;
        Dimension { exponents }
    }

    const fn combine(self, other: Dimension, sign: i8) -> Dimension {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < exponents.len() {
            exponents[i] += sign * other.exponents[i];
            i += 1;
        }
        Dimension { exponents }
    }

    /// Dimension of a product, e.g. N·m
    const fn times(self, other: Dimension) -> Dimension {
        self.combine(other, 1)
    }

    /// Dimension of a quotient, e.g. m/s
    const fn per(self, other: Dimension) -> Dimension {
        self.combine(other, -1)
    }
}
