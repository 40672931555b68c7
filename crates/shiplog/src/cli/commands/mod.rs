//! CLI commands

mod add;
mod delete;
mod edit;
mod export;
mod init;
mod list;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use export::ExportCommand;
pub use init::InitCommand;
pub use list::ListCommand;
