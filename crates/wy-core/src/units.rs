// wy-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Energy as UomEnergy, Length as UomLength, Mass as UomMass,
    MassDensity as UomMassDensity, Power as UomPower, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Energy = UomEnergy;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Density = UomMassDensity;
pub type Power = UomPower;
pub type Velocity = UomVelocity;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

/// Watt-hours, the energy unit the yield vectors are expressed in.
#[inline]
pub fn wh(v: f64) -> Energy {
    use uom::si::energy::watt_hour;
    Energy::new::<watt_hour>(v)
}

pub mod constants {
    pub const G_MPS2: f64 = 9.81;

    /// Julian year used for annual yield.
    pub const YEAR_HOURS: f64 = 365.25 * 24.0;

    pub const AIR_DENSITY_KGPM3: f64 = 1.225;
}
