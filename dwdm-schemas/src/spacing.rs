use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed channel spacings of the G.694.1 grid, finest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChannelSpacing {
    #[serde(rename = "12.5 GHz")]
    Ghz12_5,
    #[serde(rename = "25 GHz")]
    Ghz25,
    #[serde(rename = "50 GHz")]
    Ghz50,
    #[serde(rename = "100 GHz")]
    Ghz100,
}

impl ChannelSpacing {
    pub const ALL: [ChannelSpacing; 4] = [
        ChannelSpacing::Ghz12_5,
        ChannelSpacing::Ghz25,
        ChannelSpacing::Ghz50,
        ChannelSpacing::Ghz100,
    ];

    /// The canonical label, e.g. `"12.5 GHz"`.
    pub fn label(self) -> &'static str {
        match self {
            ChannelSpacing::Ghz12_5 => "12.5 GHz",
            ChannelSpacing::Ghz25 => "25 GHz",
            ChannelSpacing::Ghz50 => "50 GHz",
            ChannelSpacing::Ghz100 => "100 GHz",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Number of base-grid steps between adjacent channels of this spacing.
    pub fn step(self) -> i64 {
        match self {
            ChannelSpacing::Ghz12_5 => 1,
            ChannelSpacing::Ghz25 => 2,
            ChannelSpacing::Ghz50 => 4,
            ChannelSpacing::Ghz100 => 8,
        }
    }

    pub fn ghz(self) -> f64 {
        12.5 * self.step() as f64
    }

    /// Whether the channel with index `n` belongs to this spacing's subgrid.
    pub fn contains(self, n: i64) -> bool {
        n.rem_euclid(self.step()) == 0
    }

    /// Label with spaces and periods stripped, e.g. `"125GHz"`; used for file names.
    pub fn file_stem(self) -> String {
        self.label().chars().filter(|c| *c != ' ' && *c != '.').collect()
    }
}

impl fmt::Display for ChannelSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
