//! Nutation in longitude and obliquity.
//!
//! Evaluates the largest lunisolar terms of the IAU 2000B series
//! (IERS Conventions 2010, Table 5.3b). Dropped terms are each below
//! 5 mas, and their sum stays under 0.1″, far inside what alt/az
//! reporting needs.

use std::f64::consts::TAU;

/// Arcseconds to radians.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// One periodic term: Delaunay multipliers and amplitudes in 0.1 μas.
struct NutationTerm {
    /// Multipliers of `[l, l', F, D, Ω]`.
    args: [i8; 5],
    /// Δψ sine amplitude and its rate per century.
    psi: (f64, f64),
    /// Δε cosine amplitude and its rate per century.
    eps: (f64, f64),
}

const fn term(args: [i8; 5], s: f64, st: f64, c: f64, ct: f64) -> NutationTerm {
    NutationTerm {
        args,
        psi: (s, st),
        eps: (c, ct),
    }
}

#[rustfmt::skip]
const TERMS: [NutationTerm; 20] = [
    term([ 0,  0,  0,  0,  1], -172_064_161.0, -174_666.0, 92_052_331.0,  9_086.0),
    term([ 0,  0,  2, -2,  2],  -13_170_906.0,   -1_675.0,  5_730_336.0, -3_015.0),
    term([ 0,  0,  2,  0,  2],   -2_276_413.0,     -234.0,    978_459.0,   -485.0),
    term([ 0,  0,  0,  0,  2],    2_074_554.0,      207.0,   -897_492.0,    470.0),
    term([ 0,  1,  0,  0,  0],    1_475_877.0,   -3_633.0,     73_871.0,   -184.0),
    term([ 0,  1,  2, -2,  2],     -516_821.0,    1_226.0,    224_386.0,   -677.0),
    term([ 1,  0,  0,  0,  0],      711_159.0,       73.0,     -6_750.0,      0.0),
    term([ 0,  0,  2,  0,  1],     -387_298.0,     -367.0,    200_728.0,     18.0),
    term([ 1,  0,  2,  0,  2],     -301_461.0,      -36.0,    129_025.0,    -63.0),
    term([ 0, -1,  2, -2,  2],      215_829.0,     -494.0,    -95_929.0,    299.0),
    term([ 0,  0,  2, -2,  1],      128_227.0,      137.0,    -68_982.0,     -9.0),
    term([-1,  0,  2,  0,  2],      123_457.0,       11.0,    -53_311.0,     32.0),
    term([-1,  0,  0,  2,  0],      156_994.0,       10.0,     -1_235.0,      0.0),
    term([ 1,  0,  0,  0,  1],       63_110.0,       63.0,    -33_228.0,      0.0),
    term([-1,  0,  0,  0,  1],      -57_976.0,      -63.0,     31_429.0,      0.0),
    term([-1,  0,  2,  2,  2],      -59_641.0,      -11.0,     25_543.0,    -11.0),
    term([ 1,  0,  2,  0,  1],      -51_613.0,      -42.0,     26_366.0,      0.0),
    term([-2,  0,  2,  0,  1],       45_893.0,       50.0,    -24_236.0,    -10.0),
    term([ 0,  0,  0,  2,  0],       63_384.0,       11.0,     -1_220.0,      0.0),
    term([ 0,  0,  2,  2,  2],      -38_571.0,       -1.0,     16_452.0,    -11.0),
];

/// Delaunay arguments `[l, l', F, D, Ω]` in radians.
///
/// `t` = Julian centuries of TT since J2000.0. Polynomials from IERS
/// Conventions 2010, Eq. 5.43 (arcseconds).
pub fn delaunay_arguments(t: f64) -> [f64; 5] {
    let poly = |c: [f64; 5]| (c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])))) * AS2RAD;
    [
        poly([485_868.249_036, 1_717_915_923.217_8, 31.879_2, 0.051_635, -0.000_244_70]),
        poly([1_287_104.793_05, 129_596_581.048_1, -0.553_2, 0.000_136, -0.000_011_49]),
        poly([335_779.526_232, 1_739_527_262.847_8, -12.751_2, -0.001_037, 0.000_004_17]),
        poly([1_072_260.703_69, 1_602_961_601.209_0, -6.370_6, 0.006_593, -0.000_031_69]),
        poly([450_160.398_036, -6_962_890.543_1, 7.472_2, 0.007_702, -0.000_059_39]),
    ]
}

/// Nutation `(Δψ, Δε)` in arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_arcsec(t: f64) -> (f64, f64) {
    let args = delaunay_arguments(t);
    let (dpsi, deps) = TERMS.iter().fold((0.0, 0.0), |(dpsi, deps), term| {
        let arg: f64 = term
            .args
            .iter()
            .zip(args.iter())
            .map(|(&n, &a)| f64::from(n) * a)
            .sum();
        let (sin_arg, cos_arg) = arg.sin_cos();
        (
            dpsi + (term.psi.0 + term.psi.1 * t) * sin_arg,
            deps + (term.eps.0 + term.eps.1 * t) * cos_arg,
        )
    });
    // 0.1 μas → arcsec, plus the fixed IAU 2000B offsets
    (dpsi * 1e-7 - 0.000_135, deps * 1e-7 - 0.000_388)
}
