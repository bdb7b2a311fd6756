use tracing::warn;

/// Index into a palette. Colors are compared by identity, never by numeric
/// distance. The index one past the last entry is the neutral fallback.
pub type ColorIdx = usize;

/// Hex value of the neutral fallback color
pub const NEUTRAL_HEX: &str = "#cccccc";

const DEFAULT_COLORS: [&str; 5] = ["#335c67", "#2a9d8f", "#e09f3e", "#9e2a2b", "#540b0e"];

/// Fixed ordered set of branch colors, cycled through at forks.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<String>,
}

impl Palette {
    /// Build a palette from custom hex entries. An empty list falls back to
    /// the default palette since the colorer needs at least one entry.
    pub fn new(entries: Vec<String>) -> Self {
        if entries.is_empty() {
            warn!("empty palette supplied, using the default palette");
            return Self::default();
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Palette index `offset` steps past `base`, wrapping cyclically. Gives
    /// fork siblings distinct, deterministic colors.
    pub fn cycle(&self, base: ColorIdx, offset: usize) -> ColorIdx {
        (base + offset) % self.entries.len()
    }

    /// Index of the neutral fallback color, outside the cyclic range
    pub fn neutral(&self) -> ColorIdx {
        self.entries.len()
    }

    /// Hex value for a color index; out-of-range indices map to neutral
    pub fn hex(&self, idx: ColorIdx) -> &str {
        self.entries.get(idx).map(String::as_str).unwrap_or(NEUTRAL_HEX)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_has_five_entries() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.hex(0), "#335c67");
    }

    #[test]
    fn test_cycle_wraps() {
        let palette = Palette::default();
        assert_eq!(palette.cycle(3, 0), 3);
        assert_eq!(palette.cycle(3, 2), 0);
        assert_eq!(palette.cycle(4, 1), 0);
    }

    #[test]
    fn test_neutral_is_out_of_range() {
        let palette = Palette::default();
        assert_eq!(palette.neutral(), 5);
        assert_eq!(palette.hex(palette.neutral()), NEUTRAL_HEX);
    }

    #[test]
    fn test_empty_palette_falls_back_to_default() {
        let palette = Palette::new(vec![]);
        assert_eq!(palette.len(), 5);
    }
}
