// Speaker colour assignment shared by the trend and bar charts

/// Ten-colour categorical palette ("tab10").
pub const TAB10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Speaker number to hex colour, in assignment order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorAssignment {
    entries: Vec<(i64, &'static str)>,
}

impl ColorAssignment {
    pub fn get(&self, key: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, color)| *color)
    }
}

/// Assign palette colours to keys in traversal order, wrapping after ten.
/// Duplicate keys keep their first colour.
pub fn assign_colors(ordered_keys: &[i64]) -> ColorAssignment {
    let mut entries: Vec<(i64, &'static str)> = Vec::with_capacity(ordered_keys.len());
    for &key in ordered_keys {
        if entries.iter().any(|(k, _)| *k == key) {
            continue;
        }
        let color = TAB10[entries.len() % TAB10.len()];
        entries.push((key, color));
    }
    ColorAssignment { entries }
}
