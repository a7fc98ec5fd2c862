pub mod about;
pub mod manual;
