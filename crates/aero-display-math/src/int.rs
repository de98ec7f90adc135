/// Largest value a 24-bit M/N hardware register holds.
pub const MAX_24BIT_REGISTER: u64 = (1 << 24) - 1;

/// Greatest common divisor. `gcd(0, n) == n`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// `ceil(n / d)`. `d` must be non-zero.
pub const fn div_round_up(n: u64, d: u64) -> u64 {
    n.div_ceil(d)
}

/// `floor(n / d)`. `d` must be non-zero.
pub const fn div_round_down(n: u64, d: u64) -> u64 {
    n / d
}

/// Rounds half away from zero for positive inputs, matching the `(int)(x + 0.5)` rule the
/// VESA timing spreadsheets use.
pub fn round_to_nearest(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Rounds to three decimal places (kHz precision on a MHz quantity).
pub fn round_to_3_decimals(value: f64) -> f64 {
    round_to_nearest(value * 1000.0) as f64 / 1000.0
}

/// EDID block checksum byte: the value that makes the whole block sum to zero modulo 256.
///
/// The last byte of `block` is the checksum slot and is excluded from the sum.
pub fn checksum(block: &[u8]) -> u8 {
    let Some((_, body)) = block.split_last() else {
        return 0;
    };
    let sum = body.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
