#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Energy,
    Water,
    Co2,
}

impl Indicator {
    /// Display and table order.
    pub const ALL: [Indicator; 3] = [Self::Energy, Self::Water, Self::Co2];

    pub fn label(self) -> &'static str {
        match self {
            Self::Energy => "Energia",
            Self::Water => "Água",
            Self::Co2 => "CO2",
        }
    }
}

/// Zero-defaulted sums returned by the data store for one stage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StageTotals {
    pub energy: f64,
    pub water: f64,
    pub co2: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageAggregate {
    pub stage_name: String,
    pub energy: f64,
    pub water: f64,
    pub co2: f64,
}

impl StageAggregate {
    pub fn from_totals(stage_name: impl Into<String>, totals: StageTotals) -> Self {
        Self {
            stage_name: stage_name.into(),
            energy: totals.energy,
            water: totals.water,
            co2: totals.co2,
        }
    }

    pub fn value(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::Energy => self.energy,
            Indicator::Water => self.water,
            Indicator::Co2 => self.co2,
        }
    }

    pub fn values(&self) -> [f64; 3] {
        Indicator::ALL.map(|indicator| self.value(indicator))
    }

    pub fn rows(&self) -> impl Iterator<Item = (Indicator, f64)> + '_ {
        Indicator::ALL
            .into_iter()
            .map(|indicator| (indicator, self.value(indicator)))
    }
}
