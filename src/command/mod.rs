pub use self::command::{Command, ESC, GS, DC2, LF};
pub use self::justification::Justification;
pub use self::style_tag::StyleTag;

mod command;
mod justification;
mod style_tag;
