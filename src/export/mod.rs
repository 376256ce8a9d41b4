pub mod card_file;
