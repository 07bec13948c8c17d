use serde::{Deserialize, Serialize};

/// Number of leading vocabulary fields that can be drawn on a numeric axis.
pub const PLOTTABLE_FIELDS: usize = 6;

/// Fixed, ordered axis vocabulary. Axis choices are positions in this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Time,
    Temperature,
    Energy,
    DirectorVariance,
    AvgDirectorDist,
    TimeUsed,
    NumDirectors,
    Potential,
    PotentialApprox,
    Process,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Time,
        Field::Temperature,
        Field::Energy,
        Field::DirectorVariance,
        Field::AvgDirectorDist,
        Field::TimeUsed,
        Field::NumDirectors,
        Field::Potential,
        Field::PotentialApprox,
        Field::Process,
    ];

    pub fn from_index(index: i64) -> Option<Field> {
        usize::try_from(index)
            .ok()
            .and_then(|idx| Field::ALL.get(idx).copied())
    }

    /// Field for a 0-based axis index, or `None` when the index is outside the
    /// plottable range (categorical fields and the alphabetical sentinel).
    pub fn plottable(index: i64) -> Option<Field> {
        match usize::try_from(index) {
            Ok(idx) if idx < PLOTTABLE_FIELDS => Field::from_index(index),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Field::Time => "Event",
            Field::Temperature => "Temperature",
            Field::Energy => "Energy",
            Field::DirectorVariance => "Director Variance",
            Field::AvgDirectorDist => "Average Director Distance from Original",
            Field::TimeUsed => "Time Used",
            Field::NumDirectors => "Number of Directors",
            Field::Potential => "Potential",
            Field::PotentialApprox => "Potential Approximation",
            Field::Process => "Process",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            Field::Potential | Field::PotentialApprox | Field::Process
        )
    }
}

/// A single cell of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }
}

/// One time step of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub time: f64,
    pub temperature: f64,
    pub energy: f64,
    pub director_variance: f64,
    pub avg_director_dist: f64,
    pub time_used: f64,
    pub num_directors: u64,
    pub potential: String,
    pub potential_approx: String,
    pub process: String,
}

impl Record {
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Time => FieldValue::Number(self.time),
            Field::Temperature => FieldValue::Number(self.temperature),
            Field::Energy => FieldValue::Number(self.energy),
            Field::DirectorVariance => FieldValue::Number(self.director_variance),
            Field::AvgDirectorDist => FieldValue::Number(self.avg_director_dist),
            Field::TimeUsed => FieldValue::Number(self.time_used),
            Field::NumDirectors => FieldValue::Number(self.num_directors as f64),
            Field::Potential => FieldValue::Text(self.potential.clone()),
            Field::PotentialApprox => FieldValue::Text(self.potential_approx.clone()),
            Field::Process => FieldValue::Text(self.process.clone()),
        }
    }

    /// Numeric value of `field`; categorical fields have none.
    pub fn number(&self, field: Field) -> Option<f64> {
        self.value(field).as_number()
    }
}
