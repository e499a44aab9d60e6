//! # CLI Console
//!
//! User-facing layer over the namespace: commands that return the message
//! to show, plus the menu text. It does not read input or print; the host
//! decides where lines come from and go to.

pub mod commands;
pub mod menu;

pub use commands::CommandHandler;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_round_trip_session() {
        let mut handler = CommandHandler::new();
        handler.create_folder("docs", None).unwrap();
        handler.create_folder("archive", None).unwrap();
        handler.create_file("readme", Some("docs")).unwrap();
        handler.move_entry("readme", "archive").unwrap();

        assert_eq!(handler.search("readme"), Ok("/archive/readme".to_string()));
        assert_eq!(handler.tree(), "|-- archive\n|    |-- readme\n|-- docs\n");
    }
}
