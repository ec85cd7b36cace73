use super::model::Indicator;

/// Where one process stage keeps its records and which columns feed each
/// indicator. Column names are fixed identifiers, never user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDescriptor {
    pub name: &'static str,
    pub table: &'static str,
    pub energy_columns: [&'static str; 3],
    pub water_columns: [&'static str; 3],
    pub co2_columns: [&'static str; 6],
}

pub const STAGES: [StageDescriptor; 3] = [
    StageDescriptor {
        name: "Etapa 1",
        table: "Etapa_1",
        energy_columns: [
            "Etp1_energia_insumo1",
            "Etp1_energia_insumo2",
            "Etp1_energia_insumo3",
        ],
        water_columns: ["Etp1_agua_insumo1", "Etp1_agua_insumo2", "Etp1_agua_insumo3"],
        co2_columns: [
            "Etp1_insumo1",
            "Etp1_insumo2",
            "Etp1_insumo3",
            "Etp1_residuo1",
            "Etp1_residuo2",
            "Etp1_residuo3",
        ],
    },
    StageDescriptor {
        name: "Etapa 2",
        table: "Etapa_2",
        energy_columns: [
            "Etp2_energia_insumo1",
            "Etp2_energia_insumo2",
            "Etp2_energia_insumo3",
        ],
        water_columns: ["Etp2_agua_insumo1", "Etp2_agua_insumo2", "Etp2_agua_insumo3"],
        co2_columns: [
            "Etp2_insumo1",
            "Etp2_insumo2",
            "Etp2_insumo3",
            "Etp2_residuo1",
            "Etp2_residuo2",
            "Etp2_residuo3",
        ],
    },
    StageDescriptor {
        name: "Etapa 3",
        table: "Etapa_3",
        energy_columns: [
            "Etp3_energia_insumo1",
            "Etp3_energia_insumo2",
            "Etp3_energia_insumo3",
        ],
        water_columns: ["Etp3_agua_insumo1", "Etp3_agua_insumo2", "Etp3_agua_insumo3"],
        co2_columns: [
            "Etp3_insumo1",
            "Etp3_insumo2",
            "Etp3_insumo3",
            "Etp3_residuo1",
            "Etp3_residuo2",
            "Etp3_residuo3",
        ],
    },
];

impl StageDescriptor {
    pub fn columns(&self, indicator: Indicator) -> &[&'static str] {
        match indicator {
            Indicator::Energy => &self.energy_columns,
            Indicator::Water => &self.water_columns,
            Indicator::Co2 => &self.co2_columns,
        }
    }

    /// One row with the three zero-defaulted sums, bound to `?1` = user id.
    pub fn totals_query(&self) -> String {
        let sums = Indicator::ALL
            .iter()
            .map(|indicator| {
                format!(
                    "COALESCE(SUM({}), 0)",
                    self.columns(*indicator).join(" + ")
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("SELECT {} FROM {} WHERE ID_User = ?1", sums, self.table)
    }
}
