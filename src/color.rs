use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{FromColor, Hsl, ShiftHue, Srgb};

use crate::data::model::AccountType;

// ---------------------------------------------------------------------------
// Hue wheel
// ---------------------------------------------------------------------------

/// Individuals sit on a muted blue; the other types rotate away from it.
fn base_color() -> Hsl {
    Hsl::new(210.0, 0.65, 0.55)
}

/// `steps` colours a `360 / steps` degree hue rotation apart, starting at
/// [`base_color`].
pub fn hue_wheel(steps: usize) -> Vec<Color32> {
    let turn = 360.0 / steps.max(1) as f32;
    (0..steps)
        .map(|i| {
            let rgb = Srgb::from_color(base_color().shift_hue(turn * i as f32))
                .into_format::<u8>();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Slice colours: account type → Color32
// ---------------------------------------------------------------------------

/// Fixed colour per account type so a slice keeps its colour when another
/// slice drops out of the chart.
#[derive(Debug, Clone)]
pub struct SliceColors {
    mapping: BTreeMap<AccountType, Color32>,
}

impl Default for SliceColors {
    fn default() -> Self {
        let mapping = AccountType::ALL
            .into_iter()
            .zip(hue_wheel(AccountType::ALL.len()))
            .collect();
        SliceColors { mapping }
    }
}

impl SliceColors {
    pub fn color_for(&self, account_type: AccountType) -> Color32 {
        self.mapping
            .get(&account_type)
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_size_and_distinct() {
        assert!(hue_wheel(0).is_empty());
        let colors = hue_wheel(3);
        assert_eq!(colors.len(), 3);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }

    #[test]
    fn test_every_account_type_has_a_colour() {
        let colors = SliceColors::default();
        for kind in AccountType::ALL {
            assert_ne!(colors.color_for(kind), Color32::GRAY);
        }
    }
}
