use rand::Rng;
use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::error::DemoError;

pub const PARTICLE_PALETTE: [&str; 5] = ["#00d4ff", "#a855f7", "#ff6b6b", "#4ecdc4", "#fbbf24"];

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleStyle {
    pub delay_secs: f64,
    pub size_px: f64,
    pub opacity: f64,
    pub color: &'static str,
}

impl ParticleStyle {
    /// Delay in `[0, 20)` seconds, size in `[2, 6)` px, opacity in `[0.3, 0.8)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            delay_secs: rng.gen::<f64>() * 20.0,
            size_px: 2.0 + rng.gen::<f64>() * 4.0,
            opacity: 0.3 + rng.gen::<f64>() * 0.5,
            color: PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())],
        }
    }

    pub fn apply(&self, particle: &HtmlElement) -> Result<(), DemoError> {
        let delay = format!("{}s", self.delay_secs);
        let size = format!("{}px", self.size_px);
        let opacity = self.opacity.to_string();
        dom::set_styles(
            particle,
            &[
                ("animation-delay", delay.as_str()),
                ("width", size.as_str()),
                ("height", size.as_str()),
                ("opacity", opacity.as_str()),
                ("background", self.color),
            ],
        )
    }
}

pub(super) fn init<R: Rng + ?Sized>(document: &Document, rng: &mut R) -> Result<(), DemoError> {
    let particles = dom::select_all(document, ".particle")?;
    for particle in &particles {
        ParticleStyle::random(rng).apply(particle)?;
    }
    log::debug!("Randomized {} particles", particles.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_styles_stay_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let style = ParticleStyle::random(&mut rng);
            assert!((0.0..20.0).contains(&style.delay_secs));
            assert!((2.0..6.0).contains(&style.size_px));
            assert!((0.3..0.8).contains(&style.opacity));
            assert!(PARTICLE_PALETTE.contains(&style.color));
        }
    }

    #[test]
    fn test_same_seed_same_styles() {
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| ParticleStyle::random(&mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| ParticleStyle::random(&mut rng)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_particles_differ_and_use_whole_palette() {
        let mut rng = StdRng::seed_from_u64(1234);
        let styles: Vec<_> = (0..200).map(|_| ParticleStyle::random(&mut rng)).collect();

        let first = &styles[0];
        assert!(styles[1..].iter().any(|s| s.delay_secs != first.delay_secs));
        assert!(styles[1..].iter().any(|s| s.size_px != first.size_px));
        for color in PARTICLE_PALETTE {
            assert!(styles.iter().any(|s| s.color == color), "{} never drawn", color);
        }
    }
}
