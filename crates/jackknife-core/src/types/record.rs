//! Records and the immutable dataset they form.

use serde::Serialize;

use super::Identity;
use crate::errors::InputShapeError;

/// One observation: a stable identity and its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub identity: Identity,
    pub value: f64,
}

impl Record {
    pub fn new(identity: impl Into<Identity>, value: f64) -> Self {
        Self {
            identity: identity.into(),
            value,
        }
    }
}

/// Ordered, immutable sequence of records.
///
/// Engines never mutate a dataset; outlier removal is tracked on an
/// active-set view over it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset, rejecting non-finite values.
    pub fn new(records: Vec<Record>) -> Result<Self, InputShapeError> {
        if let Some((position, record)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| !r.value.is_finite())
        {
            return Err(InputShapeError::NonFiniteValue {
                position,
                value: record.value,
            });
        }
        Ok(Self { records })
    }

    /// Build a dataset from plain values, identified by position.
    pub fn from_values(values: &[f64]) -> Result<Self, InputShapeError> {
        Self::new(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| Record::new(i, v))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.value)
    }
}
