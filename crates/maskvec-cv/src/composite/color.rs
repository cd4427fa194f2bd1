use rand::Rng;

/// Supplies one fill color per mask.
///
/// Implemented for every [`rand::Rng`], so a seeded `StdRng` gives
/// reproducible segment rasters.
pub trait ColorSource {
    fn next_color(&mut self) -> [u8; 3];
}

impl<R: Rng> ColorSource for R {
    fn next_color(&mut self) -> [u8; 3] {
        let mut channel = || (self.gen_range(0.0..1.0f64) * 255.0) as u8;
        [channel(), channel(), channel()]
    }
}
