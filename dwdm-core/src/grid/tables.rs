use dwdm_schemas::{channel::Channel, spacing::ChannelSpacing};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The base grid plus the subgrid memberships derived from it.
///
/// Every channel is stored once in `channels`; each subgrid holds positions into it, so a
/// channel that belongs to several spacings is the same value in all of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpacingTables {
    pub(super) channels: Vec<Channel>,
    pub(super) subgrids: [Vec<usize>; 4],
}

/// Count and frequency extent of one spacing's table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingSummary {
    pub spacing: ChannelSpacing,
    pub count: usize,
    pub first: Option<Channel>,
    pub last: Option<Channel>,
}

impl SpacingTables {
    pub(super) fn push(&mut self, channel: Channel) {
        let position = self.channels.len();
        for spacing in ChannelSpacing::ALL {
            if spacing.contains(channel.index) {
                self.subgrids[spacing as usize].push(position);
            }
        }
        self.channels.push(channel);
    }

    /// The 12.5 GHz base grid, ascending by index.
    pub fn base(&self) -> &[Channel] {
        &self.channels
    }

    /// Channels of one spacing, ascending by index.
    pub fn channels(&self, spacing: ChannelSpacing) -> impl Iterator<Item = &Channel> + '_ {
        self.subgrids[spacing as usize]
            .iter()
            .map(move |&position| &self.channels[position])
    }

    pub fn len(&self, spacing: ChannelSpacing) -> usize {
        self.subgrids[spacing as usize].len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Looks up the channel with the given index.
    pub fn find(&self, index: i64) -> Option<&Channel> {
        self.channels
            .binary_search_by_key(&index, |c| c.index)
            .ok()
            .map(|position| &self.channels[position])
    }

    /// The spacings the channel with `index` was classified into; empty when out of range.
    pub fn memberships(&self, index: i64) -> Vec<ChannelSpacing> {
        match self.channels.binary_search_by_key(&index, |c| c.index) {
            Ok(position) => ChannelSpacing::ALL
                .into_iter()
                .filter(|s| self.subgrids[*s as usize].binary_search(&position).is_ok())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Each spacing in canonical order with its channels.
    pub fn labelled(&self) -> impl Iterator<Item = (ChannelSpacing, Vec<&Channel>)> + '_ {
        ChannelSpacing::ALL
            .into_iter()
            .map(move |spacing| (spacing, self.channels(spacing).collect()))
    }

    pub fn summary(&self) -> Vec<SpacingSummary> {
        ChannelSpacing::ALL
            .into_iter()
            .map(|spacing| SpacingSummary {
                spacing,
                count: self.len(spacing),
                first: self.channels(spacing).next().copied(),
                last: self.channels(spacing).last().copied(),
            })
            .collect()
    }
}

/// Serializes as a map from spacing label to its channel list, finest spacing first.
impl Serialize for SpacingTables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ChannelSpacing::ALL.len()))?;
        for (spacing, channels) in self.labelled() {
            map.serialize_entry(spacing.label(), &channels)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(index: i64) -> Channel {
        Channel {
            index,
            frequency: 193.1 + index as f64 * 0.0125,
            wavelength: 0.0,
        }
    }

    #[test]
    fn push_classifies_into_subgrids() {
        let mut tables = SpacingTables::default();
        for n in -4..=4 {
            tables.push(channel(n));
        }
        assert_eq!(tables.len(ChannelSpacing::Ghz12_5), 9);
        assert_eq!(tables.len(ChannelSpacing::Ghz25), 5);
        assert_eq!(tables.len(ChannelSpacing::Ghz50), 3);
        assert_eq!(tables.len(ChannelSpacing::Ghz100), 1);
        assert_eq!(tables.memberships(-2), vec![ChannelSpacing::Ghz12_5, ChannelSpacing::Ghz25]);
        assert!(tables.memberships(12).is_empty());
        assert_eq!(tables.find(3).map(|c| c.index), Some(3));
    }

    #[test]
    fn serializes_labels_in_order() {
        let mut tables = SpacingTables::default();
        tables.push(channel(0));
        tables.push(channel(1));
        let json = serde_json::to_string(&tables).unwrap();
        let labels: Vec<usize> = ["12.5 GHz", "25 GHz", "50 GHz", "100 GHz"]
            .iter()
            .map(|l| json.find(l).unwrap())
            .collect();
        assert!(labels.windows(2).all(|w| w[0] < w[1]));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["12.5 GHz"].as_array().unwrap().len(), 2);
        assert_eq!(value["100 GHz"][0]["index"], 0);
    }
}
