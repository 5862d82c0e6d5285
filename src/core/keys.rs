/// Dashboard actions reachable from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    TogglePlay,
    Refresh,
    TogglePlates,
    ToggleControls,
    ClearSelection,
    CenterSelection,
    RaiseMinMagnitude,
    LowerMinMagnitude,
}

/// Magnitude slider step for the `+`/`-` keys.
pub const MIN_MAGNITUDE_KEY_STEP: f64 = 0.5;

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        " " => Some(KeyCommand::TogglePlay),
        "r" | "R" => Some(KeyCommand::Refresh),
        "p" | "P" => Some(KeyCommand::TogglePlates),
        "h" | "H" => Some(KeyCommand::ToggleControls),
        "Escape" => Some(KeyCommand::ClearSelection),
        "c" | "C" => Some(KeyCommand::CenterSelection),
        "+" | "=" | "ArrowUp" => Some(KeyCommand::RaiseMinMagnitude),
        "-" | "_" | "ArrowDown" => Some(KeyCommand::LowerMinMagnitude),
        _ => None,
    }
}
