//! Message types for the TUI update loop.
//!
//! Messages represent user actions and system events. They are grouped into
//! categories so the app can dispatch each group to its own handler.

/// Messages for the consult TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation
    /// Move the card cursor up one professional.
    CursorUp,
    /// Move the card cursor down one professional.
    CursorDown,
    /// Move the card cursor to the first professional.
    Home,
    /// Move the card cursor to the last professional.
    End,

    // Selection
    /// Select the professional under the card cursor.
    SelectAtCursor,
    /// Select the professional with the given identifier.
    Select(u32),

    // Focus
    /// Move focus to the next section (list, form fields, rating).
    FocusNext,
    /// Move focus to the previous section.
    FocusPrevious,
    /// Return focus to the professional list.
    FocusList,

    // Contact form
    /// Type a character into the focused form field.
    InsertChar(char),
    /// Delete the last character of the focused form field.
    Backspace,
    /// Submit the contact form.
    SubmitForm,

    // Rating
    /// Move the star cursor one star to the left.
    StarLeft,
    /// Move the star cursor one star to the right.
    StarRight,
    /// Rate with the star under the star cursor.
    RateAtCursor,
    /// Rate with the given number of stars.
    Rate(u8),

    // Routing
    /// Follow the link from the home screen to the consult screen.
    OpenConsult,
    /// Follow the footer link back to the home screen.
    BackToHome,

    // Application lifecycle
    /// Startup tick emitted by `init()`.
    Initialized,
    /// Close the acknowledgment dialog.
    DismissAcknowledgment,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns whether this message moves the card cursor.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(self, Self::CursorUp | Self::CursorDown | Self::Home | Self::End)
    }

    /// Returns whether this message changes the selection.
    #[must_use]
    pub const fn is_selection(&self) -> bool {
        matches!(self, Self::SelectAtCursor | Self::Select(_))
    }

    /// Returns whether this message moves focus between sections.
    #[must_use]
    pub const fn is_focus(&self) -> bool {
        matches!(self, Self::FocusNext | Self::FocusPrevious | Self::FocusList)
    }

    /// Returns whether this message edits or submits the contact form.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(self, Self::InsertChar(_) | Self::Backspace | Self::SubmitForm)
    }

    /// Returns whether this message drives the rating control.
    #[must_use]
    pub const fn is_rating(&self) -> bool {
        matches!(
            self,
            Self::StarLeft | Self::StarRight | Self::RateAtCursor | Self::Rate(_)
        )
    }

    /// Returns whether this message changes the route.
    #[must_use]
    pub const fn is_routing(&self) -> bool {
        matches!(self, Self::OpenConsult | Self::BackToHome)
    }

    /// Returns whether this message is still handled while the
    /// acknowledgment dialog is open.
    #[must_use]
    pub const fn passes_modal(&self) -> bool {
        matches!(
            self,
            Self::DismissAcknowledgment
                | Self::Quit
                | Self::Initialized
                | Self::WindowResized { .. }
        )
    }
}
