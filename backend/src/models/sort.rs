use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine sortable table columns, in header order.
///
/// Serialized as the header index (`0..=8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SortColumn {
    DriverName,
    PlannedStartDate,
    DepartureTime,
    ArrivalTime,
    DrivenMeters,
    ClickScore,
    SequenceAdherence,
    StopTimeMinutes,
    VisitedCustomers,
}

impl SortColumn {
    pub const ALL: [SortColumn; 9] = [
        SortColumn::DriverName,
        SortColumn::PlannedStartDate,
        SortColumn::DepartureTime,
        SortColumn::ArrivalTime,
        SortColumn::DrivenMeters,
        SortColumn::ClickScore,
        SortColumn::SequenceAdherence,
        SortColumn::StopTimeMinutes,
        SortColumn::VisitedCustomers,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Table header text.
    pub fn header(self) -> &'static str {
        match self {
            SortColumn::DriverName => "Chofer",
            SortColumn::PlannedStartDate => "Fecha",
            SortColumn::DepartureTime => "Hora de Salida",
            SortColumn::ArrivalTime => "Hora de Llegada",
            SortColumn::DrivenMeters => "Distancia (km)",
            SortColumn::ClickScore => "Adherencia Click",
            SortColumn::SequenceAdherence => "Adherencia Secuencia",
            SortColumn::StopTimeMinutes => "Duración de Visita (minutos)",
            SortColumn::VisitedCustomers => "Clientes Visitados",
        }
    }
}

impl TryFrom<u8> for SortColumn {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| format!("Sort column must be between 0 and 8, got {}", value))
    }
}

impl From<SortColumn> for u8 {
    fn from(column: SortColumn) -> Self {
        column.index()
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// Which column the table is ordered by and in which direction.
///
/// Values are never mutated in place: a header click produces the next state
/// through [`SortState::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            ascending: true,
        }
    }
}

impl SortState {
    pub fn new(column: Option<SortColumn>, ascending: bool) -> Self {
        Self { column, ascending }
    }

    /// State after clicking `column`'s header: the active column flips
    /// direction, any other column becomes active in ascending order.
    pub fn select(self, column: SortColumn) -> Self {
        if self.column == Some(column) {
            Self {
                column: Some(column),
                ascending: !self.ascending,
            }
        } else {
            Self {
                column: Some(column),
                ascending: true,
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.column.is_some()
    }
}
