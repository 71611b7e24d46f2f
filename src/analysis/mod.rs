pub mod loot;
pub mod mastery;
