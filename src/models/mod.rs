pub mod mood_entry;
