use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

pub const DARK_GRAY: &str = "#333333";
pub const MEDIUM_GRAY: &str = "#888888";
pub const WHITE: &str = "#ffffff";
pub const DARK_GREEN: &str = "#7b9f35";
pub const LIGHT_GREEN: &str = "#d4ee9f";
pub const DARK_PURPLE: &str = "#582a72";
pub const LIGHT_PURPLE: &str = "#9775aa";
pub const DARK_RED: &str = "#aa3939";
pub const LIGHT_RED: &str = "#ffaaaa";

/// Edge colour between nodes of the same layer
pub const SAME_LAYER_EDGE: &str = DARK_GRAY;
/// Edge colour between nodes of different layers
pub const CROSS_LAYER_EDGE: &str = "#dddddd";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub border: &'static str,
    pub background: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupColor {
    pub border: &'static str,
    pub background: &'static str,
    pub highlight: Highlight,
}

/// vis.js group options for one node label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupStyle {
    pub color: GroupColor,
}

impl GroupStyle {
    const fn new(border: &'static str, background: &'static str, highlight_border: &'static str) -> Self {
        Self {
            color: GroupColor {
                border,
                background,
                highlight: Highlight {
                    border: highlight_border,
                    background,
                },
            },
        }
    }
}

/// Ordered mapping from group name to style, serialized as a JSON object
#[derive(Debug, Clone, Copy)]
pub struct GroupTable(&'static [(&'static str, GroupStyle)]);

impl GroupTable {
    pub fn get(&self, group: &str) -> Option<&GroupStyle> {
        self.0
            .iter()
            .find(|(name, _)| *name == group)
            .map(|(_, style)| style)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for GroupTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, style) in self.0 {
            map.serialize_entry(name, style)?;
        }
        map.end()
    }
}

/// Styles for the metamodel/model/instance layers
pub const LAYER_GROUPS: GroupTable = GroupTable(&[
    ("Element", GroupStyle::new(DARK_GRAY, DARK_GRAY, DARK_GRAY)),
    ("Connection", GroupStyle::new(MEDIUM_GRAY, WHITE, MEDIUM_GRAY)),
    ("Metamodel Element", GroupStyle::new(DARK_GREEN, DARK_GREEN, DARK_GRAY)),
    ("Metamodel Connection", GroupStyle::new(LIGHT_GREEN, LIGHT_GREEN, DARK_GRAY)),
    ("Model Element", GroupStyle::new(DARK_PURPLE, DARK_PURPLE, DARK_GRAY)),
    ("Model Connection", GroupStyle::new(LIGHT_PURPLE, LIGHT_PURPLE, DARK_GRAY)),
    ("Instance Element", GroupStyle::new(DARK_RED, DARK_RED, DARK_GRAY)),
    ("Instance Connection", GroupStyle::new(LIGHT_RED, LIGHT_RED, DARK_GRAY)),
]);
