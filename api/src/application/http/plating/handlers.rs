pub mod get_templates;
pub mod illustrate_plate;
pub mod judge_plate;
pub mod plate;
