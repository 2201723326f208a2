use std::sync::Arc;

use num_enum::TryFromPrimitive;

use common::SampleBuffer;

/// Columns of the accelerometer fixture, in export order.
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum FixtureColumn {
    Timestamp,
    XAccel,
    YAccel,
    ZAccel,
}

impl FixtureColumn {
    pub const ALL: [FixtureColumn; 4] = [
        FixtureColumn::Timestamp,
        FixtureColumn::XAccel,
        FixtureColumn::YAccel,
        FixtureColumn::ZAccel,
    ];

    /// Raw column name as stored in the export set.
    pub fn name(&self) -> &'static str {
        match self {
            FixtureColumn::Timestamp => "Time (s)",
            FixtureColumn::XAccel => "Acceleration x (m/s^2)",
            FixtureColumn::YAccel => "Acceleration y (m/s^2)",
            FixtureColumn::ZAccel => "Acceleration z (m/s^2)",
        }
    }

    /// Buffer identifier used by the experiment.
    pub fn buffer_name(&self) -> &'static str {
        match self {
            FixtureColumn::Timestamp => "acc_time",
            FixtureColumn::XAccel => "accX",
            FixtureColumn::YAccel => "accY",
            FixtureColumn::ZAccel => "accZ",
        }
    }
}

impl From<FixtureColumn> for usize {
    fn from(value: FixtureColumn) -> Self {
        value as usize
    }
}

/// Deterministic accelerometer samples: `n_samples` rows sampled every `period` seconds.
pub fn accelerometer_samples(n_samples: usize, period: f64) -> Vec<[f64; 4]> {
    (0..n_samples)
        .map(|i| {
            let t = i as f64 * period;
            [t, (t * 2.0).sin(), (t * 2.0).cos(), 9.81 + 0.01 * i as f64]
        })
        .collect()
}

/// One shared buffer per fixture column, filled with `accelerometer_samples`.
pub fn accelerometer_buffers(
    n_samples: usize,
    period: f64,
) -> Vec<(FixtureColumn, Arc<SampleBuffer>)> {
    let samples = accelerometer_samples(n_samples, period);
    FixtureColumn::ALL
        .iter()
        .map(|column| {
            let idx = usize::from(*column);
            let values: Vec<f64> = samples.iter().map(|row| row[idx]).collect();
            (
                *column,
                Arc::new(SampleBuffer::from_values(column.buffer_name(), &values)),
            )
        })
        .collect()
}

/// Buffer holding `slots` in order; `None` entries are samples never recorded.
pub fn sparse_buffer(name: &str, slots: &[Option<f64>]) -> Arc<SampleBuffer> {
    let mut buffer = SampleBuffer::new(name, 0);
    for slot in slots {
        match slot {
            Some(value) => buffer.push(*value),
            None => buffer.push_gap(),
        };
    }
    Arc::new(buffer)
}
