//! Fixed vehicle statistics shown under the model

/// One statistic in the readout row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readout {
    pub label: &'static str,
    /// Icon glyph drawn next to the value
    pub icon: &'static str,
    pub value: u32,
    pub unit: &'static str,
}

impl Readout {
    /// Value with its unit, e.g. `190 km/h`
    pub fn display_value(&self) -> String {
        format!("{} {}", self.value, self.unit)
    }
}

pub const READOUTS: [Readout; 3] = [
    Readout {
        label: "Speed",
        icon: "⏱",
        value: 190,
        unit: "km/h",
    },
    Readout {
        label: "Oil",
        icon: "🛢",
        value: 87,
        unit: "%",
    },
    Readout {
        label: "Power",
        icon: "⚡",
        value: 132,
        unit: "hp",
    },
];
