//! The layer recurrence for the normal Ziggurat
//!
//! Follows the table setup in Marsaglia and Tsang's "The Ziggurat Method for
//! Generating Random Variables" (J. Stat. Software 5(8), 2000): the base
//! rectangle plus tail and every layer above it enclose the same area `V`
//! under the unnormalised density `exp(-x^2 / 2)`.

use log::{debug, trace};

use crate::error::TableError;
use crate::params::ZigguratParams;

/// Unnormalised normal density
#[inline]
pub fn density(x: f64) -> f64 {
    (-0.5 * x * x).exp()
}

/// Layer edges and edge ratios for one Ziggurat
#[derive(Clone, Debug, PartialEq)]
pub struct ZigguratTables {
    params: ZigguratParams,
    x: Vec<f64>,
    ratio: Vec<f64>,
}

impl ZigguratTables {
    /// Run the recurrence for `params`.
    ///
    /// Every step depends on the exact result of the previous one, so the
    /// layers are filled strictly in order. Fails with
    /// [`TableError::Domain`] as soon as a logarithm argument leaves `(0, 1)`
    /// instead of letting NaN into the table, and with
    /// [`TableError::InvalidParams`] when the base rectangle would be narrower
    /// than the tail boundary.
    pub fn build(params: ZigguratParams) -> Result<Self, TableError> {
        params.validate()?;

        let c = params.layers;
        let r = params.tail;
        let v = params.area;

        let mut x = vec![0.0f64; c + 1];
        let mut ratio = vec![0.0f64; c];

        let mut f = density(r);
        x[0] = v / f;
        if x[0] < r {
            return Err(TableError::InvalidParams {
                reason: format!("base edge V / f(R) = {:?} is below R = {:?}", x[0], r),
            });
        }
        x[1] = r;
        x[c] = 0.0;

        for i in 2..c {
            let a = v / x[i - 1] + f;
            if !(a > 0.0 && a < 1.0) {
                return Err(TableError::Domain {
                    layer: i,
                    argument: a,
                });
            }
            x[i] = (-2.0 * a.ln()).sqrt();
            f = density(x[i]);
            trace!("layer {}: x = {:?}, f = {:?}", i, x[i], f);
        }

        for i in 0..c {
            ratio[i] = x[i + 1] / x[i];
        }

        let tables = Self { params, x, ratio };
        debug!(
            "built {} layers (R = {}, V = {}), closure error {:e}",
            c,
            r,
            v,
            tables.closure_error()
        );
        Ok(tables)
    }

    /// Tables for the standard 128-layer normal Ziggurat
    pub fn standard() -> Result<Self, TableError> {
        Self::build(ZigguratParams::default())
    }

    pub fn params(&self) -> &ZigguratParams {
        &self.params
    }

    pub fn layers(&self) -> usize {
        self.params.layers
    }

    /// Layer edges, `C + 1` values from the base down to the peak
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// `x[i + 1] / x[i]` for each layer, `C` values
    pub fn ratio(&self) -> &[f64] {
        &self.ratio
    }

    /// Area of layer `i` under `exp(-x^2 / 2)`.
    ///
    /// Layer 0 is the base rectangle `x[0] * f(R)`, which stands in for the
    /// base strip plus the tail. `None` if `i >= C`.
    pub fn layer_area(&self, i: usize) -> Option<f64> {
        if i >= self.layers() {
            None
        } else if i == 0 {
            Some(self.x[0] * density(self.x[1]))
        } else {
            Some(self.x[i] * (density(self.x[i + 1]) - density(self.x[i])))
        }
    }

    /// Relative area mismatch of the topmost layer.
    ///
    /// The recurrence pins every other layer to `V`; whatever is left over at
    /// the peak shows how consistent `R` and `V` are with each other.
    pub fn closure_error(&self) -> f64 {
        let v = self.params.area;
        let top = self.layers() - 1;
        let area = self.x[top] * (1.0 - density(self.x[top]));
        (area - v).abs() / v
    }

    /// Verify the structural invariants of both tables.
    pub fn check(&self) -> Result<(), TableError> {
        let c = self.layers();
        let invariant = |index: usize, reason: String| TableError::Invariant { index, reason };

        if self.x.len() != c + 1 {
            return Err(invariant(
                0,
                format!("x has {} values, want {}", self.x.len(), c + 1),
            ));
        }
        if self.ratio.len() != c {
            return Err(invariant(
                0,
                format!("ratio has {} values, want {}", self.ratio.len(), c),
            ));
        }
        if self.x[1] != self.params.tail {
            return Err(invariant(1, format!("x[1] = {:?} is not R", self.x[1])));
        }
        if self.x[c] != 0.0 {
            return Err(invariant(c, format!("x[C] = {:?} is not 0", self.x[c])));
        }
        for i in 0..c {
            let (hi, lo) = (self.x[i], self.x[i + 1]);
            if !(hi.is_finite() && lo.is_finite()) {
                return Err(invariant(i, "non-finite edge".to_string()));
            }
            if hi < lo {
                return Err(invariant(
                    i,
                    format!("x[{}] = {:?} < x[{}] = {:?}", i, hi, i + 1, lo),
                ));
            }
            let q = self.ratio[i];
            if q != lo / hi {
                return Err(invariant(i, format!("ratio {:?} != {:?}", q, lo / hi)));
            }
            if !(0.0..=1.0).contains(&q) {
                return Err(invariant(i, format!("ratio {:?} outside [0, 1]", q)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NOR_SECTION_AREA, ZIGGURAT_LAYERS, ZIGGURAT_NOR_R};

    fn standard() -> ZigguratTables {
        ZigguratTables::standard().unwrap()
    }

    #[test]
    fn test_lengths() {
        let t = standard();
        assert_eq!(t.x().len(), ZIGGURAT_LAYERS + 1);
        assert_eq!(t.ratio().len(), ZIGGURAT_LAYERS);
    }

    #[test]
    fn test_fixed_edges() {
        let t = standard();
        assert_eq!(t.x()[1], ZIGGURAT_NOR_R);
        assert_eq!(t.x()[ZIGGURAT_LAYERS], 0.0);
        assert_eq!(t.ratio()[ZIGGURAT_LAYERS - 1], 0.0);

        let x0 = NOR_SECTION_AREA / (-0.5 * ZIGGURAT_NOR_R * ZIGGURAT_NOR_R).exp();
        assert!(
            (t.x()[0] - x0).abs() <= 1e-15 * x0,
            "x[0] should be V / f(R), got {}",
            t.x()[0]
        );
        assert!((t.x()[0] - 3.7130862467425505).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic() {
        let t = standard();
        for w in t.x().windows(2) {
            assert!(w[0] >= w[1], "{} < {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_ratio_matches_x() {
        let t = standard();
        let x = t.x();
        for (i, &q) in t.ratio().iter().enumerate() {
            let expected = x[i + 1] / x[i];
            assert!(
                (q - expected).abs() <= 1e-12 * expected.abs(),
                "ratio[{}] = {}, expected {}",
                i,
                q,
                expected
            );
            assert!((0.0..=1.0).contains(&q));
        }
    }

    #[test]
    fn test_layer_areas_equal() {
        let t = standard();
        for i in 0..ZIGGURAT_LAYERS - 1 {
            let a = t.layer_area(i).unwrap();
            assert!(
                (a - NOR_SECTION_AREA).abs() < 1e-12,
                "layer {} has area {}",
                i,
                a
            );
        }
        assert!(t.closure_error() < 1e-8, "closure error {}", t.closure_error());
    }

    #[test]
    fn test_layer_area_out_of_range() {
        let t = standard();
        assert!(t.layer_area(ZIGGURAT_LAYERS - 1).is_some());
        assert_eq!(t.layer_area(ZIGGURAT_LAYERS), None);
        assert_eq!(t.layer_area(usize::MAX), None);
    }

    #[test]
    fn test_base_narrower_than_tail_is_rejected() {
        let params = ZigguratParams::new(ZIGGURAT_LAYERS, ZIGGURAT_NOR_R, 0.001);
        assert!(matches!(
            ZigguratTables::build(params),
            Err(TableError::InvalidParams { .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let a = standard();
        let b = standard();
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(a.x()), bits(b.x()));
        assert_eq!(bits(a.ratio()), bits(b.ratio()));
    }

    #[test]
    fn test_check_passes() {
        assert!(standard().check().is_ok());
    }

    #[test]
    fn test_check_reports_corruption() {
        let mut t = standard();
        t.ratio[5] = 1.5;
        assert!(matches!(
            t.check(),
            Err(TableError::Invariant { index: 5, .. })
        ));
    }

    #[test]
    fn test_inconsistent_constants_fail_fast() {
        let params = ZigguratParams::new(ZIGGURAT_LAYERS, ZIGGURAT_NOR_R, 0.02);
        match ZigguratTables::build(params) {
            Err(TableError::Domain { layer, argument }) => {
                assert_eq!(layer, 65);
                assert!(argument > 1.0);
            }
            other => panic!("expected a domain error, got {:?}", other),
        }
    }

    #[test]
    fn test_two_layers() {
        // Only the base and the peak; the recurrence loop never runs.
        let t = ZigguratTables::build(ZigguratParams::new(2, ZIGGURAT_NOR_R, NOR_SECTION_AREA))
            .unwrap();
        assert_eq!(t.x().len(), 3);
        assert_eq!(t.x()[1], ZIGGURAT_NOR_R);
        assert_eq!(t.x()[2], 0.0);
        assert_eq!(t.ratio()[1], 0.0);
    }
}
