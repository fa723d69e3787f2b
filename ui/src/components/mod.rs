//! Shared components. Screens compose these; none of them fetch data themselves
//! except `InterestButton`, which drives its own toggle.
pub mod empty_state;
pub mod interest_button;
pub mod listing_card;
pub mod nav_menu;
pub mod pico;
pub mod toast_stack;
