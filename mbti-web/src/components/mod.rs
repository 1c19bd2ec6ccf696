pub mod copy_button;
pub mod question_card;
