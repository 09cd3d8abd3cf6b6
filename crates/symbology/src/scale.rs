use formats::dataset::has_value;

use crate::schemes::{Rgba, SchemeId, sample};

/// Value domain for the active metric.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Used when no record carries a finite, positive value.
    pub const FALLBACK: Domain = Domain {
        min: 0.0,
        max: 1000.0,
    };

    /// Extent of the finite, positive values. Zero and non-finite values
    /// mean "no data" and never contribute.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Domain {
        let mut extent: Option<(f64, f64)> = None;
        for v in values {
            if !has_value(v) {
                continue;
            }
            extent = Some(match extent {
                None => (v, v),
                Some((min, max)) => (min.min(v), max.max(v)),
            });
        }
        match extent {
            Some((min, max)) => Domain { min, max },
            None => Domain::FALLBACK,
        }
    }
}

/// A sequential color scale over a metric domain.
///
/// For `reversed` metrics (lower is better) the domain endpoints are
/// swapped before interpolation, so "better" values land on the same
/// visual endpoint across all metrics.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SequentialScale {
    scheme: SchemeId,
    start: f64,
    end: f64,
}

impl SequentialScale {
    pub fn new(scheme: SchemeId, domain: Domain, reversed: bool) -> Self {
        let (start, end) = if reversed {
            (domain.max, domain.min)
        } else {
            (domain.min, domain.max)
        };
        Self { scheme, start, end }
    }

    pub fn scheme(&self) -> SchemeId {
        self.scheme
    }

    /// Map a value to its color. A degenerate domain maps everything to
    /// the scheme midpoint.
    pub fn color(&self, value: f64) -> Rgba {
        let t = if self.start == self.end {
            0.5
        } else {
            (value - self.start) / (self.end - self.start)
        };
        sample(self.scheme, t)
    }

    /// Sample the underlying scheme directly (legend ramps ignore the
    /// domain direction).
    pub fn ramp(&self, t: f64) -> Rgba {
        sample(self.scheme, t)
    }
}

#[cfg(test)]
mod tests {
    use super::{Domain, SequentialScale};
    use crate::schemes::{SchemeId, sample};

    #[test]
    fn domain_excludes_missing_and_non_positive_values() {
        let domain = Domain::from_values([0.0, -3.0, f64::NAN, 800.0, 1200.0]);
        assert_eq!(domain, Domain { min: 800.0, max: 1200.0 });
    }

    #[test]
    fn empty_domain_falls_back() {
        let domain = Domain::from_values([0.0, f64::NAN]);
        assert_eq!(domain, Domain::FALLBACK);
    }

    #[test]
    fn non_reversed_maps_max_to_high_endpoint() {
        let domain = Domain::from_values([100.0, 900.0]);
        let scale = SequentialScale::new(SchemeId::Viridis, domain, false);
        assert_eq!(scale.color(900.0), sample(SchemeId::Viridis, 1.0));
        assert_eq!(scale.color(100.0), sample(SchemeId::Viridis, 0.0));
    }

    #[test]
    fn reversed_swaps_the_endpoints() {
        let domain = Domain::from_values([100.0, 900.0]);
        let scale = SequentialScale::new(SchemeId::Inferno, domain, true);
        assert_eq!(scale.color(100.0), sample(SchemeId::Inferno, 1.0));
        assert_eq!(scale.color(900.0), sample(SchemeId::Inferno, 0.0));
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let scale =
            SequentialScale::new(SchemeId::Magma, Domain { min: 5.0, max: 5.0 }, false);
        assert_eq!(scale.color(5.0), sample(SchemeId::Magma, 0.5));
    }
}
