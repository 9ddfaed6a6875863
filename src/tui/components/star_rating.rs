//! Star rendering for card indicators and the interactive rating control.

use crate::screen::{STAR_COUNT, star_fill};

/// Glyph for a filled star.
pub const FILLED_STAR: char = '★';

/// Glyph for an empty star.
pub const EMPTY_STAR: char = '☆';

/// Renders five stars for a professional's average rating, followed by
/// the rating with one decimal, e.g. `★★★★★ 4.8`.
#[must_use]
pub fn render_rating_indicator(rating: f64) -> String {
    let stars: String = star_fill(rating)
        .into_iter()
        .map(|filled| if filled { FILLED_STAR } else { EMPTY_STAR })
        .collect();
    format!("{stars} {rating:.1}")
}

/// Lines rendered by the rating control: the heading and the stars.
pub const RATING_HEIGHT: usize = 2;

/// Context for rendering the interactive rating control.
#[derive(Debug, Clone)]
pub struct StarRatingViewContext<'a> {
    /// Name of the professional being rated.
    pub professional_name: &'a str,
    /// The rating the user gave so far, 0 to 5.
    pub user_rating: u8,
    /// Position of the star cursor when the control has focus.
    pub star_cursor: Option<usize>,
}

/// Component for the "Rate <name>" control.
#[derive(Debug, Clone, Default)]
pub struct StarRatingComponent;

impl StarRatingComponent {
    /// Creates a new rating control component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the heading and the five clickable stars.
    ///
    /// The focused star is wrapped in brackets: ` ★ [★] ☆ ☆ ☆ `.
    #[must_use]
    pub fn view(&self, ctx: &StarRatingViewContext<'_>) -> String {
        let fill = star_fill(f64::from(ctx.user_rating));
        let stars: String = fill
            .iter()
            .enumerate()
            .map(|(index, filled)| {
                let glyph = if *filled { FILLED_STAR } else { EMPTY_STAR };
                if ctx.star_cursor == Some(index) {
                    format!("[{glyph}]")
                } else {
                    format!(" {glyph} ")
                }
            })
            .collect();

        format!(
            "Rate {}\n  {stars}  ({}/{STAR_COUNT})\n",
            ctx.professional_name, ctx.user_rating
        )
    }
}
