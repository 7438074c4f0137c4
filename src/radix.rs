/// Number of bits needed to hold one digit of `base`, i.e. `ceil(log2(base))`.
///
/// For bases that are not powers of two the result over-estimates the
/// information carried by a digit, so `width / bits` digits is only an
/// approximation of the digits needed to show a `width`-bit value
/// losslessly (base 10 gives 4 bits per digit, 40 digits for 160 bits).
/// Bases below 2 carry no information and return 0.
pub fn bits_needed_to_represent(base: u32) -> u32 {
    if base < 2 {
        return 0;
    }
    u32::BITS - (base - 1).leading_zeros()
}
