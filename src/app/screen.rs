// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the coach can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Intake,
    Plans,
    Exercises,
}

impl Screen {
    /// All screens in navbar order.
    pub const ALL: [Screen; 4] = [
        Screen::Dashboard,
        Screen::Intake,
        Screen::Plans,
        Screen::Exercises,
    ];

    /// Navbar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Intake => "Client Intake",
            Screen::Plans => "Generate Plans",
            Screen::Exercises => "Exercises",
        }
    }
}
