//! Named animation parameters of the character model.
//!
//! The model runtime owns skeletal and parameter application; the engine only needs to
//! read and write float parameters by id. `ParamStore` is the in-memory stand-in used by
//! the hosts and tests.

use crate::constants::*;
use fnv::FnvHashMap;

/// Get/set access to named model parameters.
pub trait ParameterModel {
    fn value(&self, id: &str) -> f32;
    fn set_value(&mut self, id: &str, value: f32);
}

/// Parameter ids the engine drives.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamIds {
    pub eye_r_open: String,
    pub eye_l_open: String,
    pub blush: String,
    pub angle_x: String,
    pub angle_y: String,
}

impl Default for ParamIds {
    fn default() -> Self {
        Self {
            eye_r_open: PARAM_EYE_R_OPEN.to_string(),
            eye_l_open: PARAM_EYE_L_OPEN.to_string(),
            blush: PARAM_BLUSH.to_string(),
            angle_x: PARAM_ANGLE_X.to_string(),
            angle_y: PARAM_ANGLE_Y.to_string(),
        }
    }
}

/// Flat parameter table. Unknown ids read as 0.0.
#[derive(Clone, Debug, Default)]
pub struct ParamStore {
    values: FnvHashMap<String, f32>,
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the resting pose: eyes open, blush at rest, no rotation.
    pub fn with_rest_pose(ids: &ParamIds) -> Self {
        let mut store = Self::new();
        store.set_value(&ids.eye_r_open, EYE_OPEN);
        store.set_value(&ids.eye_l_open, EYE_OPEN);
        store.set_value(&ids.blush, BLUSH_REST);
        store.set_value(&ids.angle_x, 0.0);
        store.set_value(&ids.angle_y, 0.0);
        store
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl ParameterModel for ParamStore {
    fn value(&self, id: &str) -> f32 {
        self.values.get(id).copied().unwrap_or(0.0)
    }

    fn set_value(&mut self, id: &str, value: f32) {
        match self.values.get_mut(id) {
            Some(v) => *v = value,
            None => {
                self.values.insert(id.to_string(), value);
            }
        }
    }
}
