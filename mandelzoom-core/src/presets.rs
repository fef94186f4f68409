//! Hand-picked Julia constants, browsed with `[` and `]`.

use crate::complex::Complex;

/// Number of entries in [`JULIA_PRESETS`].
pub const PRESET_COUNT: usize = 19;

/// `c` values that give visually distinctive Julia sets.
pub const JULIA_PRESETS: [Complex; PRESET_COUNT] = [
    Complex { re: -0.7, im: 0.27015 },
    Complex { re: -0.835, im: -0.2321 },
    Complex { re: 0.285, im: 0.01 },
    Complex { re: -0.70176, im: -0.3842 },
    Complex { re: -0.4, im: 0.6 },
    Complex { re: -0.751442, im: -0.0747098 },
    Complex { re: -0.692048, im: -0.253816 },
    Complex { re: -1.03884, im: 0.214964 },
    Complex { re: -0.743621, im: -0.0344564 }, // swirls
    Complex { re: -0.756475, im: -0.0707046 },
    Complex { re: -0.179884, im: 0.689243 }, // triple swirl
    Complex { re: 0.391465, im: 0.349051 }, // palm trees
    Complex { re: -0.232621, im: -0.653532 }, // spider
    Complex { re: -0.511001, im: 0.608968 },
    Complex { re: -1.34819, im: -0.0665871 }, // fire pulse
    Complex { re: -0.745417, im: -0.226992 }, // galactic
    Complex { re: 0.349831, im: -0.385603 }, // fireworks
    Complex { re: 0.316808, im: -0.413749 }, // dragon heads
    Complex { re: -1.31481, im: 0.0579096 },
];

/// Look up a preset by a signed index, wrapping in both directions.
pub fn preset(index: i64) -> Complex {
    JULIA_PRESETS[index.rem_euclid(PRESET_COUNT as i64) as usize]
}
