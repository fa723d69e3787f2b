pub mod use_interest_toggle;
pub mod use_notifier;
