//! Terminal rendering of the slot row

use colored::Colorize;
use pinslot_core::config::DisplayConfig;
use pinslot_core::slot::SlotSnapshot;
use pinslot_core::types::Passcode;

/// Render one line showing every slot, the active one highlighted
pub fn render_row(snapshot: &SlotSnapshot, display: &DisplayConfig) -> String {
    snapshot
        .slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let shown = match slot {
                Some(_) if display.mask => display.mask_char,
                Some(c) => *c,
                None => display.placeholder,
            };
            let cell = format!("[{}]", shown);
            if snapshot.is_active(index) {
                cell.bold().cyan().to_string()
            } else if slot.is_none() {
                cell.dimmed().to_string()
            } else {
                cell
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the completed code, masked when configured
pub fn render_code(code: &Passcode, display: &DisplayConfig) -> String {
    if display.mask {
        std::iter::repeat(display.mask_char).take(code.len()).collect()
    } else {
        code.expose().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> SlotSnapshot {
        SlotSnapshot {
            slots: vec![Some('4'), Some('2'), None, None],
            active_index: 2,
            complete: false,
        }
    }

    #[test]
    fn test_render_row_plain() {
        colored::control::set_override(false);
        let row = render_row(&snapshot(), &DisplayConfig::default());
        assert_eq!(row, "[4] [2] [_] [_]");
    }

    #[test]
    fn test_render_row_masked() {
        colored::control::set_override(false);
        let display = DisplayConfig {
            mask: true,
            ..DisplayConfig::default()
        };
        let row = render_row(&snapshot(), &display);
        assert_eq!(row, "[*] [*] [_] [_]");
    }

    #[test]
    fn test_render_code() {
        let code = Passcode::new("1234".to_string());
        assert_eq!(render_code(&code, &DisplayConfig::default()), "1234");

        let display = DisplayConfig {
            mask: true,
            mask_char: '#',
            ..DisplayConfig::default()
        };
        assert_eq!(render_code(&code, &display), "####");
    }
}
