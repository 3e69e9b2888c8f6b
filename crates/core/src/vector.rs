//! Parity vectors: recorded `(seed, outputs)` pairs used to compare this
//! generator against another implementation.
//!
//! A [`VectorSpec`] says what to draw (variant, method, count, seeds). A
//! [`VectorSet`] holds the spec together with one [`VectorRecord`] per seed.
//! Sets serialize to JSON; `f64` values survive the trip bit-for-bit.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RngError;
use crate::prng::LegacyRandom;
use crate::variant::Variant;

/// Seeds covered when a spec does not name its own: small values, both signs,
/// a wrapping negative and both 32-bit extremes.
pub const DEFAULT_SEEDS: &[i32] = &[
    0,
    1,
    42,
    100,
    12345,
    -1,
    -100,
    -638_161_535,
    i32::MAX,
    i32::MIN,
];

/// Number of draws per seed when a spec does not say.
pub const DEFAULT_COUNT: usize = 10;

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_seeds() -> Vec<i32> {
    DEFAULT_SEEDS.to_vec()
}

/// Which generator method a vector exercises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Method {
    /// `sample()`, one `f64` per draw.
    #[default]
    Sample,
    /// `next(bound)`.
    Next { bound: i32 },
    /// `next_raw()`.
    Raw,
    /// `next_range(min, max)`.
    Range { min: i32, max: i32 },
}

impl Method {
    fn draw(self, rng: &mut LegacyRandom) -> Result<Value, RngError> {
        Ok(match self {
            Method::Sample => Value::Float(rng.sample()),
            Method::Next { bound } => Value::Int(rng.next(bound)?),
            Method::Raw => Value::Int(rng.next_raw()),
            Method::Range { min, max } => Value::Int(rng.next_range(min, max)?),
        })
    }

    fn validate(self) -> Result<(), RngError> {
        match self {
            Method::Next { bound } if bound <= 0 => Err(RngError::invalid(
                "bound",
                format!("must be positive, got {bound}"),
            )),
            Method::Range { min, max } if min > max => Err(RngError::invalid(
                "min",
                format!("{min} is greater than max {max}"),
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Sample => write!(f, "sample()"),
            Method::Next { bound } => write!(f, "next({bound})"),
            Method::Raw => write!(f, "next_raw()"),
            Method::Range { min, max } => write!(f, "next_range({min}, {max})"),
        }
    }
}

/// One generator output.
///
/// Equality on `Float` compares bit patterns, so `0.1 + 0.2`-style near
/// misses are reported as mismatches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i32),
    Float(f64),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            // Debug formatting is the shortest string that parses back to
            // the same bits.
            Value::Float(v) => write!(f, "{v:?}"),
        }
    }
}

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorSpec {
    #[serde(default)]
    pub variant: Variant,
    #[serde(flatten)]
    pub method: Method,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_seeds")]
    pub seeds: Vec<i32>,
}

impl Default for VectorSpec {
    fn default() -> Self {
        Self {
            variant: Variant::Full,
            method: Method::Sample,
            count: DEFAULT_COUNT,
            seeds: default_seeds(),
        }
    }
}

impl VectorSpec {
    /// Checks that the spec produces at least one value and that its method
    /// arguments are accepted by the generator.
    pub fn validate(&self) -> Result<(), RngError> {
        if self.count == 0 {
            return Err(RngError::invalid("count", "must be at least 1"));
        }
        if self.seeds.is_empty() {
            return Err(RngError::invalid("seeds", "must name at least one seed"));
        }
        self.method.validate()
    }

    /// Draws `count` values from a fresh generator seeded with `seed`.
    pub fn run(&self, seed: i32) -> Result<Vec<Value>, RngError> {
        let mut rng = LegacyRandom::new(seed, self.variant);
        (0..self.count).map(|_| self.method.draw(&mut rng)).collect()
    }
}

/// A seed paired with its ordered outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorRecord {
    pub seed: i32,
    pub values: Vec<Value>,
}

impl VectorRecord {
    /// Renders the record as `seed: v1, v2, ...`.
    pub fn to_line(&self) -> String {
        let values: Vec<String> = self.values.iter().map(Value::to_string).collect();
        format!("{}: {}", self.seed, values.join(", "))
    }
}

/// A value that differs between a recorded vector and a fresh run.
///
/// `recorded` or `computed` is `None` when the two sequences have different
/// lengths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    pub seed: i32,
    pub index: usize,
    pub recorded: Option<Value>,
    pub computed: Option<Value>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: &Option<Value>| v.map_or_else(|| "<missing>".to_string(), |v| v.to_string());
        write!(
            f,
            "seed {} #{}: recorded {}, computed {}",
            self.seed,
            self.index,
            show(&self.recorded),
            show(&self.computed)
        )
    }
}

/// A spec and the records it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorSet {
    pub spec: VectorSpec,
    pub records: Vec<VectorRecord>,
}

impl VectorSet {
    /// Runs `spec` for every seed it names.
    pub fn generate(spec: &VectorSpec) -> Result<Self, RngError> {
        spec.validate()?;
        let records = spec
            .seeds
            .iter()
            .map(|&seed| {
                let values = spec.run(seed)?;
                tracing::debug!(seed, count = values.len(), "generated record");
                Ok(VectorRecord { seed, values })
            })
            .collect::<Result<Vec<_>, RngError>>()?;
        tracing::info!(
            variant = %spec.variant,
            method = %spec.method,
            seeds = records.len(),
            count = spec.count,
            "generated vector set"
        );
        Ok(Self {
            spec: spec.clone(),
            records,
        })
    }

    /// Re-runs every record against this implementation and returns every
    /// position where the recorded value is not bit-identical.
    ///
    /// Each record is replayed for as many draws as it holds, or `spec.count`
    /// if that is larger, so truncated and padded records both show up.
    pub fn verify(&self) -> Result<Vec<Mismatch>, RngError> {
        self.spec.method.validate()?;
        let mut mismatches = Vec::new();
        for record in &self.records {
            let len = record.values.len().max(self.spec.count);
            let replay = VectorSpec {
                count: len,
                ..self.spec.clone()
            };
            let computed = replay.run(record.seed)?;
            for index in 0..len {
                let recorded = record.values.get(index).copied();
                let fresh = if index < self.spec.count {
                    computed.get(index).copied()
                } else {
                    None
                };
                if recorded != fresh {
                    tracing::warn!(seed = record.seed, index, "parity mismatch");
                    mismatches.push(Mismatch {
                        seed: record.seed,
                        index,
                        recorded,
                        computed: fresh,
                    });
                }
            }
        }
        tracing::info!(
            records = self.records.len(),
            mismatches = mismatches.len(),
            "verified vector set"
        );
        Ok(mismatches)
    }

    /// Renders every record with [`VectorRecord::to_line`], one per line.
    pub fn to_lines(&self) -> String {
        self.records
            .iter()
            .map(VectorRecord::to_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
