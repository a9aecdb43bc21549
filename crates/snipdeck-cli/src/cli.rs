use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "snipdeck - insert UI component snippets and personal quick code",
    long_about = "snipdeck keeps a catalog of UI component templates and a personal \
library of quick code snippets, and inserts them into source files through a guided picker."
)]
pub struct Snipdeck {
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Browse the component catalog
    Browse,
    /// Manage quick code groups and snippets interactively
    Manage,
    /// Pick a template and insert it into a source file
    Insert {
        #[clap(long, short, help = "File to insert into")]
        file: PathBuf,

        #[clap(long, short, default_value_t = 0, help = "Caret byte offset in the file")]
        offset: usize,

        #[clap(long, short, help = "Pick from the quick code store instead of the catalog")]
        quick: bool,
    },
    /// List catalog groups and quick code groups
    List,
    /// Manage quick code groups
    Group {
        #[clap(subcommand)]
        command: GroupCommand,
    },
    /// Manage quick code snippets
    Item {
        #[clap(subcommand)]
        command: ItemCommand,
    },
}

#[derive(Subcommand)]
pub enum GroupCommand {
    /// Add a new quick code group
    Add { name: String },
    /// Rename a quick code group
    Rename { name: String, new_name: String },
    /// Enable a group in the quick-insert picker
    Enable { name: String },
    /// Disable a group in the quick-insert picker
    Disable { name: String },
    /// Delete a group and all of its snippets
    Delete { name: String },
    /// Move a group to a new position (0-based)
    Move { name: String, index: usize },
}

#[derive(Subcommand)]
pub enum ItemCommand {
    /// Add a snippet to a group
    Add {
        #[clap(long, short, help = "Owning group")]
        group: String,

        #[clap(long, short, help = "Snippet name")]
        name: String,

        #[clap(long, short, default_value = "", help = "Import statements, one per line")]
        imports: String,

        #[clap(long, short, help = "Snippet code")]
        code: Option<String>,

        #[clap(long, help = "Read the snippet code from a file")]
        code_file: Option<PathBuf>,
    },
    /// Edit a snippet (unset fields keep their current value)
    Edit {
        #[clap(long, short, help = "Owning group")]
        group: String,

        #[clap(help = "Snippet position within the group, as shown by `snipdeck list`")]
        index: usize,

        #[clap(long, short, help = "New snippet name")]
        name: Option<String>,

        #[clap(long, short, help = "New import statements, one per line")]
        imports: Option<String>,

        #[clap(long, short, help = "New snippet code")]
        code: Option<String>,

        #[clap(long, help = "Read the new snippet code from a file")]
        code_file: Option<PathBuf>,
    },
    /// Delete a snippet
    Delete {
        #[clap(long, short, help = "Owning group")]
        group: String,

        #[clap(help = "Snippet position within the group")]
        index: usize,
    },
    /// Move a snippet to a new position within its group (0-based)
    Move {
        #[clap(long, short, help = "Owning group")]
        group: String,

        #[clap(help = "Current snippet position")]
        index: usize,

        #[clap(help = "New snippet position")]
        new_index: usize,
    },
    /// Enable a snippet in the quick-insert picker
    Enable {
        #[clap(long, short, help = "Owning group")]
        group: String,

        #[clap(help = "Snippet position within the group")]
        index: usize,
    },
    /// Disable a snippet in the quick-insert picker
    Disable {
        #[clap(long, short, help = "Owning group")]
        group: String,

        #[clap(help = "Snippet position within the group")]
        index: usize,
    },
}
