//! Professional cards.
//!
//! Each card is three lines: name and specialty, the rating indicator with
//! the location, and the portrait caption. The card under the cursor is
//! prefixed with `>` and the selected card is marked with `*`. Only the
//! cards inside the scroll window are rendered.

use crate::directory::Professional;

use super::star_rating::render_rating_indicator;

/// Lines rendered per card.
pub const CARD_HEIGHT: usize = 3;

/// Context for rendering the card list.
#[derive(Debug, Clone)]
pub struct ProfessionalListViewContext<'a> {
    /// Professionals in display order.
    pub professionals: &'a [Professional],
    /// Position of the card cursor.
    pub cursor_position: usize,
    /// Index of the first card shown.
    pub scroll_offset: usize,
    /// Maximum number of cards shown.
    pub visible_cards: usize,
    /// Identifier of the selected professional.
    pub selected_id: Option<u32>,
    /// Whether the list has keyboard focus (shows the cursor).
    pub focused: bool,
}

/// Component for displaying professionals as selectable cards.
#[derive(Debug, Clone, Default)]
pub struct ProfessionalListComponent;

impl ProfessionalListComponent {
    /// Creates a new card list component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the cards inside the scroll window.
    #[must_use]
    pub fn view(&self, ctx: &ProfessionalListViewContext<'_>) -> String {
        if ctx.professionals.is_empty() {
            return "  No professionals are available.\n".to_owned();
        }

        ctx.professionals
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(ctx.visible_cards)
            .map(|(index, professional)| {
                let is_cursor = ctx.focused && index == ctx.cursor_position;
                let is_selected = ctx.selected_id == Some(professional.id);
                Self::format_card(professional, is_cursor, is_selected)
            })
            .collect()
    }

    fn format_card(professional: &Professional, is_cursor: bool, is_selected: bool) -> String {
        let cursor = if is_cursor { ">" } else { " " };
        let mark = if is_selected { "*" } else { " " };
        let indicator = render_rating_indicator(professional.rating);

        format!(
            "{cursor}{mark} {} - {}\n    {indicator} | {}\n    Photo: {}\n",
            professional.name,
            professional.specialty,
            professional.location,
            professional.image.caption(),
        )
    }
}
