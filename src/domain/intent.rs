use crate::domain::integration::DOMAIN;

/// The two-valued signal a button press carries to the remote workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Coffee ON for next Sunday.
    Activate,
    /// Coffee OFF for next Sunday.
    Deactivate,
}

impl Intent {
    /// Value sent as the `coffee_status` workflow input.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            Intent::Activate => "true",
            Intent::Deactivate => "false",
        }
    }

    /// Short human label used in logs and console output.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Activate => "ON",
            Intent::Deactivate => "OFF",
        }
    }

    /// Stable identity of the button bound to this intent.
    pub fn unique_id(&self) -> String {
        match self {
            Intent::Activate => format!("{DOMAIN}_on"),
            Intent::Deactivate => format!("{DOMAIN}_off"),
        }
    }

    /// Display icon hint for the bound button.
    pub fn icon(&self) -> &'static str {
        match self {
            Intent::Activate => "mdi:coffee",
            Intent::Deactivate => "mdi:coffee-off",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_map_to_wire_strings() {
        assert_eq!(Intent::Activate.as_wire_str(), "true");
        assert_eq!(Intent::Deactivate.as_wire_str(), "false");
    }

    #[test]
    fn intents_carry_stable_button_identities() {
        assert_eq!(Intent::Activate.unique_id(), "sunday_coffee_on");
        assert_eq!(Intent::Deactivate.unique_id(), "sunday_coffee_off");
        assert_eq!(Intent::Activate.icon(), "mdi:coffee");
        assert_eq!(Intent::Deactivate.icon(), "mdi:coffee-off");
    }
}
