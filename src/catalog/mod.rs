//! Static registry of the thirteen input parameters.
//!
//! Descriptions and valid ranges come from the experimental corbel database
//! the network was trained on. The table is process-wide immutable state:
//! defined once, read-only, safe to share across threads without locking.

use crate::domain::{PARAM_COUNT, ParamKey, ParameterDefinition};

static CATALOG: [ParameterDefinition; PARAM_COUNT] = [
    ParameterDefinition {
        key: ParamKey::SqrtFck,
        index: 0,
        description: "Square root of concrete compressive strength (MPa)",
        min: 3.87,
        max: 10.25,
    },
    ParameterDefinition {
        key: ParamKey::ShearSpan,
        index: 1,
        description: "Shear span (mm)",
        min: 53.0,
        max: 870.0,
    },
    ParameterDefinition {
        key: ParamKey::SectionWidth,
        index: 2,
        description: "Width of the section (mm)",
        min: 115.0,
        max: 600.0,
    },
    ParameterDefinition {
        key: ParamKey::ColumnWidth,
        index: 3,
        description: "Width of the column (mm)",
        min: 80.0,
        max: 1200.0,
    },
    ParameterDefinition {
        key: ParamKey::EffectiveDepth,
        index: 4,
        description: "Effective depth (mm)",
        min: 92.0,
        max: 1059.0,
    },
    ParameterDefinition {
        key: ParamKey::TotalDepth,
        index: 5,
        description: "Total depth (mm)",
        min: 120.0,
        max: 1143.0,
    },
    ParameterDefinition {
        key: ParamKey::SpanDepthRatio,
        index: 6,
        description: "Shear span-to-depth ratio",
        min: 0.11,
        max: 1.69,
    },
    ParameterDefinition {
        key: ParamKey::RhoLongitudinal,
        index: 7,
        description: "Longitudinal reinforcement ratio (%)",
        min: 0.21,
        max: 4.93,
    },
    ParameterDefinition {
        key: ParamKey::RhoHorizontal,
        index: 8,
        description: "Horizontal reinforcement ratio (%)",
        min: 0.0,
        max: 2.33,
    },
    ParameterDefinition {
        key: ParamKey::RhoVertical,
        index: 9,
        description: "Vertical reinforcement ratio (%)",
        min: 0.0,
        max: 1.10,
    },
    ParameterDefinition {
        key: ParamKey::FyTransverse,
        index: 10,
        description: "Yield strength of transverse reinforcement (MPa)",
        min: 298.0,
        max: 1480.0,
    },
    ParameterDefinition {
        key: ParamKey::FyHorizontal,
        index: 11,
        description: "Yield strength of horizontal reinforcement (MPa)",
        min: 0.0,
        max: 760.0,
    },
    ParameterDefinition {
        key: ParamKey::FyVertical,
        index: 12,
        description: "Yield strength of vertical reinforcement (MPa)",
        min: 0.0,
        max: 614.0,
    },
];

/// All parameter definitions, in network input order.
pub fn definitions() -> &'static [ParameterDefinition; PARAM_COUNT] {
    &CATALOG
}

/// Definition for one key.
pub fn definition_of(key: ParamKey) -> &'static ParameterDefinition {
    &CATALOG[key.index()]
}

/// Valid `(min, max)` range for one key.
pub fn range_of(key: ParamKey) -> (f64, f64) {
    let def = definition_of(key);
    (def.min, def.max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_rows_match_key_indices() {
        for (i, def) in definitions().iter().enumerate() {
            assert_eq!(def.index, i);
            assert_eq!(def.key.index(), i);
        }
    }

    #[test]
    fn every_range_has_nonzero_width() {
        for def in definitions() {
            assert!(
                def.width() > 0.0,
                "{} has degenerate range [{}, {}]",
                def.key,
                def.min,
                def.max
            );
        }
    }

    #[test]
    fn range_of_reads_the_table() {
        assert_eq!(range_of(ParamKey::SectionWidth), (115.0, 600.0));
        assert_eq!(range_of(ParamKey::SpanDepthRatio), (0.11, 1.69));
    }
}
