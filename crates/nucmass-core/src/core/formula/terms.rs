#[inline]
pub fn volume(a: f64, a_v: f64) -> f64 {
    a_v * a
}

#[inline]
pub fn surface(a: f64, a_s: f64) -> f64 {
    a_s * a.powf(2.0 / 3.0)
}

#[inline]
pub fn coulomb(a: f64, z: f64, a_c: f64) -> f64 {
    a_c * (z * z) / a.powf(1.0 / 3.0)
}

#[inline]
pub fn asymmetry(a: f64, z: f64, a_a: f64) -> f64 {
    let excess = a - 2.0 * z;
    a_a * (excess * excess) / a
}

/// Pairing term: positive for even-even, negative for odd-odd, zero for odd-A nuclei.
#[inline]
pub fn pairing(a: f64, z: i64, n: i64, delta_0: f64) -> f64 {
    match (z % 2 == 0, n % 2 == 0) {
        (true, true) => delta_0 * a.powf(-0.75),
        (false, false) => -delta_0 * a.powf(-0.75),
        _ => 0.0,
    }
}

#[inline]
pub fn radius(a: f64, r_0: f64) -> f64 {
    r_0 * a.powf(1.0 / 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn volume_is_linear_in_mass_number() {
        assert!(f64_approx_equal(volume(10.0, 15.56), 155.6));
        assert!(f64_approx_equal(volume(20.0, 15.56), 311.2));
    }

    #[test]
    fn surface_scales_with_two_thirds_power() {
        assert!(f64_approx_equal(surface(8.0, 17.23), 17.23 * 4.0));
        assert!(f64_approx_equal(surface(27.0, 1.0), 9.0));
    }

    #[test]
    fn coulomb_scales_with_z_squared() {
        let single = coulomb(27.0, 1.0, 0.7);
        let double = coulomb(27.0, 2.0, 0.7);
        assert!(f64_approx_equal(double, 4.0 * single));
        assert!(f64_approx_equal(single, 0.7 / 3.0));
    }

    #[test]
    fn asymmetry_vanishes_for_symmetric_nuclei() {
        assert_eq!(asymmetry(16.0, 8.0, 23.285), 0.0);
        assert!(asymmetry(238.0, 92.0, 23.285) > 0.0);
    }

    #[test]
    fn asymmetry_is_symmetric_in_neutron_excess() {
        let neutron_rich = asymmetry(20.0, 8.0, 23.285);
        let proton_rich = asymmetry(20.0, 12.0, 23.285);
        assert!(f64_approx_equal(neutron_rich, proton_rich));
    }

    #[test]
    fn pairing_is_positive_for_even_even() {
        let delta = pairing(238.0, 92, 146, 12.0);
        assert!(delta > 0.0);
        assert!(f64_approx_equal(delta, 12.0 * 238f64.powf(-0.75)));
    }

    #[test]
    fn pairing_is_negative_for_odd_odd() {
        let delta = pairing(14.0, 7, 7, 12.0);
        assert!(delta < 0.0);
        assert!(f64_approx_equal(delta, -12.0 * 14f64.powf(-0.75)));
    }

    #[test]
    fn pairing_is_zero_for_odd_mass_number() {
        assert_eq!(pairing(239.0, 94, 145, 12.0), 0.0);
        assert_eq!(pairing(135.0, 52, 83, 12.0), 0.0);
        assert_eq!(pairing(235.0, 93, 142, 12.0), 0.0);
    }

    #[test]
    fn pairing_handles_negative_parity_inputs() {
        assert!(pairing(4.0, -2, 6, 12.0) > 0.0);
        assert!(pairing(4.0, -3, 7, 12.0) < 0.0);
    }

    #[test]
    fn radius_of_mass_number_one_is_the_radius_constant() {
        assert!(f64_approx_equal(radius(1.0, 1.2), 1.2));
        assert!(f64_approx_equal(radius(8.0, 1.2), 2.4));
    }
}
