//! Random Helpers
//!
//! Integer chance rolls over any `rand` generator.

use rand::Rng;

/// True with probability `x / y`.
pub fn x_chance_in_y<R: Rng + ?Sized>(rng: &mut R, x: i32, y: i32) -> bool {
    if x <= 0 {
        return false;
    }
    if x >= y {
        return true;
    }
    rng.gen_range(0..y) < x
}

/// True with probability `1 / a`.
pub fn one_chance_in<R: Rng + ?Sized>(rng: &mut R, a: i32) -> bool {
    a <= 1 || rng.gen_range(0..a) == 0
}

/// `num / den`, rounding the remainder up with probability `remainder / den`.
pub fn div_rand_round<R: Rng + ?Sized>(rng: &mut R, num: i32, den: i32) -> i32 {
    let den = den.max(1);
    let whole = num / den;
    if x_chance_in_y(rng, num % den, den) {
        whole + 1
    } else {
        whole
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_x_chance_in_y_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(!x_chance_in_y(&mut rng, 0, 12));
            assert!(!x_chance_in_y(&mut rng, -3, 12));
            assert!(x_chance_in_y(&mut rng, 12, 12));
            assert!(x_chance_in_y(&mut rng, 20, 12));
        }
    }

    #[test]
    fn test_one_chance_in_one_always() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert!(one_chance_in(&mut rng, 1));
    }

    #[test]
    fn test_div_rand_round_exact() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(div_rand_round(&mut rng, 12, 4), 3);
            assert_eq!(div_rand_round(&mut rng, 5, 1), 5);
        }
    }

    #[test]
    fn test_div_rand_round_range() {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..200 {
            match div_rand_round(&mut rng, 10, 4) {
                2 => seen_low = true,
                3 => seen_high = true,
                other => panic!("unexpected rounding {}", other),
            }
        }
        assert!(seen_low && seen_high);
    }
}
