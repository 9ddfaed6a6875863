//! UI components for the consult TUI.
//!
//! Each component renders one section of the screen from a borrowed view
//! context and holds no state of its own.

mod acknowledgment_dialog;
mod contact_form;
mod professional_list;
mod star_rating;

pub use acknowledgment_dialog::{AcknowledgmentDialogComponent, AcknowledgmentDialogViewContext};
pub use contact_form::{ContactFormComponent, ContactFormViewContext, FORM_HEIGHT};
pub use professional_list::{CARD_HEIGHT, ProfessionalListComponent, ProfessionalListViewContext};
pub use star_rating::{
    EMPTY_STAR, FILLED_STAR, RATING_HEIGHT, StarRatingComponent, StarRatingViewContext,
    render_rating_indicator,
};
