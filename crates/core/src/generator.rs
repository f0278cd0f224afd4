//! Generator module - random shapes with weighted color selection
//!
//! Templates are chosen uniformly from the catalog; colors are chosen by
//! weighted random selection over a `(color, weight)` palette. Weights are
//! positive and need not be normalized: a color's probability is its weight
//! divided by the palette total.

use blockfall_types::ColorName;

use crate::rng::RandomSource;
use crate::shape::{Shape, TEMPLATES};

/// Produces random shapes from the template catalog and a color palette
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    palette: Vec<(ColorName, f32)>,
    total_weight: f32,
}

impl ShapeGenerator {
    /// Create a generator from a `(color, weight)` palette
    ///
    /// Panics on an empty palette or a non-positive weight; both are
    /// caller misconfiguration with no sensible default.
    pub fn new(palette: Vec<(ColorName, f32)>) -> Self {
        assert!(!palette.is_empty(), "color palette must not be empty");
        for &(color, weight) in &palette {
            assert!(
                weight > 0.0,
                "weight for {} must be positive, got {weight}",
                color.as_str()
            );
        }
        let total_weight = palette.iter().map(|&(_, weight)| weight).sum();
        Self {
            palette,
            total_weight,
        }
    }

    /// Generator over all colors with equal weight
    pub fn uniform() -> Self {
        Self::new(ColorName::ALL.iter().map(|&color| (color, 1.0)).collect())
    }

    /// The palette this generator draws colors from
    pub fn palette(&self) -> &[(ColorName, f32)] {
        &self.palette
    }

    /// Generate a shape: uniform template, weighted color
    pub fn generate(&self, rng: &mut impl RandomSource) -> Shape {
        let template = rng.next_range(TEMPLATES.len() as u32) as usize;
        let color = self.pick_color(rng);
        Shape::from_template(template, color)
    }

    fn pick_color(&self, rng: &mut impl RandomSource) -> ColorName {
        let mut remaining = rng.next_f32() * self.total_weight;
        for &(color, weight) in &self.palette {
            if remaining < weight {
                return color;
            }
            remaining -= weight;
        }
        // Rounding can walk past the last entry; it is still the right pick.
        self.palette[self.palette.len() - 1].0
    }
}
