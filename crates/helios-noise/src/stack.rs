//! Ordered composition of noise layers into one height function.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::{NoiseError, NoiseFilter, NoiseParams};

/// One entry in a noise stack: a filter plus its composition flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseLayer {
    /// Disabled layers contribute zero and are never evaluated.
    pub enabled: bool,
    /// Multiply this layer's contribution by the first enabled layer's raw
    /// output. Lets a continent layer gate where mountains appear.
    pub use_first_layer_as_mask: bool,
    /// The filter parameters for this layer.
    pub params: NoiseParams,
}

impl Default for NoiseLayer {
    fn default() -> Self {
        Self {
            enabled: true,
            use_first_layer_as_mask: false,
            params: NoiseParams::default(),
        }
    }
}

struct StackEntry {
    use_first_layer_as_mask: bool,
    filter: NoiseFilter,
}

/// An ordered stack of noise layers evaluated as a single height function.
///
/// Layer order is semantically significant: the first *enabled* layer is the
/// mask source for any later layer flagged with
/// [`NoiseLayer::use_first_layer_as_mask`]. Disabled layers are dropped at
/// build time so evaluation never touches them.
pub struct NoiseStack {
    entries: Vec<StackEntry>,
    configured_layers: usize,
}

impl NoiseStack {
    /// Build a stack from layer configuration, validating every enabled
    /// layer's parameters eagerly.
    ///
    /// Errors carry the index of the offending layer in configuration order.
    pub fn new(layers: &[NoiseLayer]) -> Result<Self, NoiseError> {
        let mut entries = Vec::new();
        for (index, layer) in layers.iter().enumerate() {
            if !layer.enabled {
                continue;
            }
            let filter = NoiseFilter::new(layer.params.clone()).map_err(|source| {
                NoiseError::Layer {
                    index,
                    source: Box::new(source),
                }
            })?;
            entries.push(StackEntry {
                use_first_layer_as_mask: layer.use_first_layer_as_mask,
                filter,
            });
        }
        Ok(Self {
            entries,
            configured_layers: layers.len(),
        })
    }

    /// Evaluate the composed height at a point on the unit sphere.
    ///
    /// Returns exactly `0.0` when no layer is enabled (a flat sphere).
    #[must_use]
    pub fn evaluate(&self, point_on_unit_sphere: DVec3) -> f64 {
        let mut elevation = 0.0;
        let mut mask_source: Option<f64> = None;

        for entry in &self.entries {
            let value = entry.filter.evaluate(point_on_unit_sphere);
            match mask_source {
                // First enabled layer: contributes directly and becomes the
                // mask source. Its raw value is deliberately not clamped.
                None => {
                    mask_source = Some(value);
                    elevation += value;
                }
                Some(mask) => {
                    let gate = if entry.use_first_layer_as_mask { mask } else { 1.0 };
                    elevation += value * gate;
                }
            }
        }

        elevation
    }

    /// Number of layers that survived configuration (enabled only).
    #[must_use]
    pub fn enabled_len(&self) -> usize {
        self.entries.len()
    }

    /// Number of layers in the original configuration, enabled or not.
    #[must_use]
    pub fn configured_len(&self) -> usize {
        self.configured_layers
    }

    /// True when evaluation will always return `0.0`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterKind;

    const EPSILON: f64 = 1e-12;

    fn layer(seed: u32) -> NoiseLayer {
        NoiseLayer {
            params: NoiseParams { seed, ..Default::default() },
            ..Default::default()
        }
    }

    #[test]
    fn test_single_layer_repeated_evaluation_is_stable() {
        // strength=1, num_layers=1, roughness=2, persistence=0.5,
        // base_roughness=1, min_value=0: the stack must return the same
        // float for the same point on every call.
        let stack = NoiseStack::new(&[layer(42)]).expect("valid layer");
        let p = DVec3::new(0.1, 0.8, -0.58).normalize();
        assert_eq!(stack.evaluate(p), stack.evaluate(p));
    }

    #[test]
    fn test_empty_stack_is_flat() {
        let stack = NoiseStack::new(&[]).expect("empty stack is valid");
        assert!(stack.is_empty());
        for p in [DVec3::X, DVec3::NEG_Y, DVec3::new(0.6, 0.0, 0.8)] {
            assert_eq!(stack.evaluate(p), 0.0, "empty stack must be exactly flat");
        }
    }

    #[test]
    fn test_disabled_layers_contribute_nothing() {
        let enabled = NoiseStack::new(&[layer(5)]).expect("valid");
        let with_disabled = NoiseStack::new(&[
            NoiseLayer { enabled: false, ..layer(1000) },
            layer(5),
            NoiseLayer { enabled: false, ..layer(2000) },
        ])
        .expect("valid");

        let p = DVec3::new(-0.3, 0.5, 0.81).normalize();
        assert!(
            (enabled.evaluate(p) - with_disabled.evaluate(p)).abs() < EPSILON,
            "disabled layers must be skipped entirely"
        );
        assert_eq!(with_disabled.enabled_len(), 1);
        assert_eq!(with_disabled.configured_len(), 3);
    }

    #[test]
    fn test_unmasked_layers_sum() {
        let a = NoiseStack::new(&[layer(1)]).expect("valid");
        let b = NoiseStack::new(&[layer(2)]).expect("valid");
        let both = NoiseStack::new(&[layer(1), layer(2)]).expect("valid");

        let p = DVec3::new(0.7, -0.1, 0.7).normalize();
        let sum = a.evaluate(p) + b.evaluate(p);
        assert!(
            (both.evaluate(p) - sum).abs() < EPSILON,
            "without masking, layers must simply sum: {} vs {sum}",
            both.evaluate(p)
        );
    }

    #[test]
    fn test_masked_layer_is_scaled_by_first_layer_value() {
        let first = layer(1);
        let second_params = NoiseParams { seed: 2, ..Default::default() };

        let masked = NoiseStack::new(&[
            first.clone(),
            NoiseLayer {
                use_first_layer_as_mask: true,
                params: second_params.clone(),
                ..Default::default()
            },
        ])
        .expect("valid");

        let first_only = NoiseStack::new(&[first]).expect("valid");
        let second_only = NoiseStack::new(&[NoiseLayer {
            params: second_params,
            ..Default::default()
        }])
        .expect("valid");

        let p = DVec3::new(0.2, 0.5, -0.84).normalize();
        let expected = first_only.evaluate(p) + second_only.evaluate(p) * first_only.evaluate(p);
        assert!(
            (masked.evaluate(p) - expected).abs() < EPSILON,
            "masked contribution must be gated by the first layer's raw value"
        );
    }

    #[test]
    fn test_mask_source_is_first_enabled_layer() {
        // With the original first layer disabled, the mask must come from
        // the next enabled layer, not from the disabled one.
        let stack = NoiseStack::new(&[
            NoiseLayer { enabled: false, ..layer(11) },
            layer(22),
            NoiseLayer {
                use_first_layer_as_mask: true,
                params: NoiseParams { seed: 33, ..Default::default() },
                ..Default::default()
            },
        ])
        .expect("valid");

        let reference = NoiseStack::new(&[
            layer(22),
            NoiseLayer {
                use_first_layer_as_mask: true,
                params: NoiseParams { seed: 33, ..Default::default() },
                ..Default::default()
            },
        ])
        .expect("valid");

        let p = DVec3::new(-0.5, -0.5, 0.70710678).normalize();
        assert!(
            (stack.evaluate(p) - reference.evaluate(p)).abs() < EPSILON,
            "disabled first layer must not act as mask source"
        );
    }

    #[test]
    fn test_ridged_layer_composes_in_stack() {
        let stack = NoiseStack::new(&[
            layer(1),
            NoiseLayer {
                use_first_layer_as_mask: true,
                params: NoiseParams {
                    kind: FilterKind::Ridged,
                    num_layers: 3,
                    ..Default::default()
                },
                ..Default::default()
            },
        ])
        .expect("valid");
        let p = DVec3::new(0.9, 0.1, 0.42).normalize();
        assert_eq!(stack.evaluate(p), stack.evaluate(p));
    }

    #[test]
    fn test_invalid_layer_error_names_its_index() {
        let result = NoiseStack::new(&[
            layer(0),
            NoiseLayer {
                params: NoiseParams { roughness: -2.0, ..Default::default() },
                ..Default::default()
            },
        ]);
        let Err(err) = result else {
            panic!("stack with an invalid enabled layer must fail");
        };
        match err {
            NoiseError::Layer { index, .. } => assert_eq!(index, 1),
            other => panic!("expected layer error, got {other:?}"),
        }
    }

    #[test]
    fn test_disabled_invalid_layer_is_ignored() {
        // A disabled layer is never built, so its parameters are not checked.
        let result = NoiseStack::new(&[
            layer(0),
            NoiseLayer {
                enabled: false,
                params: NoiseParams { num_layers: 0, ..Default::default() },
                ..Default::default()
            },
        ]);
        assert!(result.is_ok(), "disabled layers must not fail validation");
    }
}
