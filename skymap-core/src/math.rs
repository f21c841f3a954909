/// Floating-point modulo via libm.
///
/// Rust's `%` operator is a remainder and keeps the sign of the dividend,
/// which is wrong for angle reduction; all wrapping in this workspace goes
/// through here.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}
