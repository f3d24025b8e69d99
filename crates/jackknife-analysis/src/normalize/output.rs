//! Output shape reconstruction.

use std::collections::HashMap;

use jackknife_core::config::OutputSection;
use jackknife_core::constants::{DEFAULT_USE_ID_FIELD, DEFAULT_USE_LIST_OUTPUT};
use jackknife_core::Identity;
use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Serialize, Serializer};
use tracing::warn;

use crate::outliers::RunResult;

/// Input/output shape flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShapeOptions {
    /// Ordered list (true) or mapping keyed by identity (false).
    pub use_list_output: bool,
    /// Input carries identities and list rows include them.
    pub use_id_field: bool,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            use_list_output: DEFAULT_USE_LIST_OUTPUT,
            use_id_field: DEFAULT_USE_ID_FIELD,
        }
    }
}

impl ShapeOptions {
    pub fn new(use_list_output: bool, use_id_field: bool) -> Self {
        Self {
            use_list_output,
            use_id_field,
        }
    }

    pub fn from_settings(output: &OutputSection) -> Self {
        Self::new(
            output.effective_use_list_output(),
            output.effective_use_id_field(),
        )
    }
}

/// A value and its Z-score. Serializes as `[value, z_score]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredValue {
    pub value: f64,
    pub z_score: f64,
}

impl Serialize for ScoredValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(2)?;
        t.serialize_element(&self.value)?;
        t.serialize_element(&self.z_score)?;
        t.end()
    }
}

/// One row of list output.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputRow {
    /// `[value, z_score]`
    Unlabeled(ScoredValue),
    /// `[identity, value, z_score]`
    Labeled(Identity, ScoredValue),
}

impl OutputRow {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Unlabeled(_) => None,
            Self::Labeled(id, _) => Some(id),
        }
    }

    pub fn scored(&self) -> ScoredValue {
        match self {
            Self::Unlabeled(s) | Self::Labeled(_, s) => *s,
        }
    }
}

impl Serialize for OutputRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unlabeled(s) => s.serialize(serializer),
            Self::Labeled(id, s) => {
                let mut t = serializer.serialize_tuple(3)?;
                t.serialize_element(id)?;
                t.serialize_element(&s.value)?;
                t.serialize_element(&s.z_score)?;
                t.end()
            }
        }
    }
}

/// Identity-keyed results in first-seen order.
/// Serializes as a JSON object keyed by each identity's display form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreMap {
    entries: Vec<(Identity, ScoredValue)>,
}

impl ScoreMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, identity: &Identity) -> Option<&ScoredValue> {
        self.entries
            .iter()
            .find(|(id, _)| id == identity)
            .map(|(_, s)| s)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Identity> {
        self.entries.iter().map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Identity, &ScoredValue)> {
        self.entries.iter().map(|(id, s)| (id, s))
    }
}

impl Serialize for ScoreMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, s) in &self.entries {
            map.serialize_entry(&id.to_string(), s)?;
        }
        map.end()
    }
}

/// Results in the caller's requested shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RunOutput {
    List(Vec<OutputRow>),
    Map(ScoreMap),
}

impl RunOutput {
    pub fn len(&self) -> usize {
        match self {
            Self::List(rows) => rows.len(),
            Self::Map(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_list(&self) -> Option<&[OutputRow]> {
        match self {
            Self::List(rows) => Some(rows),
            Self::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&ScoreMap> {
        match self {
            Self::Map(map) => Some(map),
            Self::List(_) => None,
        }
    }
}

/// Render a run result in the requested shape.
///
/// List output follows input order. Map output is keyed by the display form
/// of each identity, which is also its JSON object key. When two records
/// share a key (a repeated identity, or distinct identities such as `1` and
/// `"1"`), the later record's score replaces the earlier one in the earlier
/// slot, which keeps the earlier identity.
pub fn render(result: &RunResult, shape: ShapeOptions) -> RunOutput {
    if shape.use_list_output {
        return RunOutput::List(
            result
                .records
                .iter()
                .map(|r| {
                    let scored = ScoredValue {
                        value: r.value,
                        z_score: r.z_score,
                    };
                    if shape.use_id_field {
                        OutputRow::Labeled(r.identity.clone(), scored)
                    } else {
                        OutputRow::Unlabeled(scored)
                    }
                })
                .collect(),
        );
    }

    let mut slots: HashMap<String, usize> = HashMap::with_capacity(result.len());
    let mut entries: Vec<(Identity, ScoredValue)> = Vec::with_capacity(result.len());
    for r in &result.records {
        let scored = ScoredValue {
            value: r.value,
            z_score: r.z_score,
        };
        let key = r.identity.to_string();
        match slots.get(&key) {
            Some(&slot) => {
                warn!(
                    identity = %r.identity,
                    kept = ?entries[slot].0,
                    "duplicate key in map output, keeping last score"
                );
                entries[slot].1 = scored;
            }
            None => {
                slots.insert(key, entries.len());
                entries.push((r.identity.clone(), scored));
            }
        }
    }
    RunOutput::Map(ScoreMap { entries })
}
