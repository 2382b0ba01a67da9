use super::Vec3;

/// Projects a geographic position onto a sphere of `radius` centered at the origin.
///
/// The polar axis is `+y`: the north pole maps to `(0, radius, 0)`. The azimuth is
/// measured from `+x` starting at longitude -180°, so both globe markers and the
/// focus camera agree on where a given latitude/longitude sits.
///
/// - polar angle `phi = 90° - lat`
/// - azimuth `theta = lon + 180°`
pub fn to_cartesian(lat_deg: f64, lon_deg: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();

    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}
